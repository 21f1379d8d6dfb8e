use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::Read;
use strum::EnumIter;

/// An Australian state or territory. Nearly all reference data in this crate
/// (machine energy use, tariffs, emissions factors, install costs) is resolved
/// against one of these.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Victoria,
    NewSouthWales,
    NorthernTerritory,
    AustralianCapitalTerritory,
    Tasmania,
    WesternAustralia,
    SouthAustralia,
    Queensland,
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap())
    }
}

/// The time horizon a figure is expressed over.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    Daily,
    Weekly,
    Yearly,
    /// The expected operating life of the household's machines, currently 15 years.
    OperationalLifetime,
}

/// Fuel purchased (or generated) by a household to run its machines.
///
/// `Solar` marks machines driven directly by the sun rather than by a purchased
/// fuel, and `None` marks the absence of a machine. Neither ever contributes to
/// energy totals or bills.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Electricity,
    NaturalGas,
    Lpg,
    Wood,
    Petrol,
    Diesel,
    Solar,
    None,
}

impl Display for FuelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceHeating {
    Wood,
    Gas,
    Lpg,
    Diesel,
    ElectricResistance,
    ElectricHeatPump,
    None,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaterHeating {
    Gas,
    Lpg,
    ElectricResistance,
    ElectricHeatPump,
    Solar,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cooktop {
    Gas,
    Lpg,
    ElectricResistance,
    ElectricInduction,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleFuelType {
    Petrol,
    Diesel,
    Hybrid,
    PlugInHybrid,
    Electric,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub fuel_type: VehicleFuelType,
    /// Distance driven in a typical week. When absent, the regional average is
    /// substituted during normalisation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_per_week: Option<f64>,
    #[serde(rename = "switchToEV", skip_serializing_if = "Option::is_none")]
    pub switch_to_ev: Option<bool>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solar {
    pub has_solar: bool,
    /// Nameplate size of the owned or wanted array, in kW.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_solar: Option<bool>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub has_battery: bool,
    /// Usable capacity of the owned or wanted battery, in kWh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_battery: Option<bool>,
}

/// A household as described by the caller: where it is, who lives there, and
/// what machines it runs today alongside any electrification intentions.
///
/// This is the sole input to [`calculate_savings`](crate::calculate_savings).
/// Callers are expected to populate every machine field; only the per-vehicle
/// details and the occupancy may be left unset.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub location: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u32>,
    pub space_heating: SpaceHeating,
    pub water_heating: WaterHeating,
    pub cooktop: Cooktop,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    pub solar: Solar,
    pub battery: Battery,
}

impl Household {
    pub fn from_json(json: impl Read) -> Result<Self, anyhow::Error> {
        Ok(serde_json::from_reader(json)?)
    }

    /// The starting household presented to a user in the given region: a
    /// two-person home heated by a heat pump, with resistive hot water, gas
    /// cooking and two petrol cars they would like to replace, plus an
    /// intention to install 7kW of solar and an 11kWh battery.
    pub fn default_for(region: Region) -> Self {
        Self {
            location: region,
            occupancy: Some(2),
            space_heating: SpaceHeating::ElectricHeatPump,
            water_heating: WaterHeating::ElectricResistance,
            cooktop: Cooktop::Gas,
            vehicles: vec![
                Vehicle {
                    fuel_type: VehicleFuelType::Petrol,
                    kms_per_week: Some(200.),
                    switch_to_ev: Some(true),
                },
                Vehicle {
                    fuel_type: VehicleFuelType::Petrol,
                    kms_per_week: Some(200.),
                    switch_to_ev: Some(true),
                },
            ],
            solar: Solar {
                has_solar: false,
                size: Some(7.),
                install_solar: Some(true),
            },
            battery: Battery {
                has_battery: false,
                capacity: Some(11.),
                install_battery: Some(true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn should_deserialize_a_fully_populated_household() {
        let json = json!({
            "location": "NEW_SOUTH_WALES",
            "occupancy": 2,
            "spaceHeating": "ELECTRIC_HEAT_PUMP",
            "waterHeating": "ELECTRIC_RESISTANCE",
            "cooktop": "GAS",
            "vehicles": [
                {"fuelType": "PETROL", "kmsPerWeek": 200, "switchToEV": true},
                {"fuelType": "PETROL", "kmsPerWeek": 200, "switchToEV": true}
            ],
            "solar": {"hasSolar": false, "size": 7, "installSolar": true},
            "battery": {"hasBattery": false, "capacity": 11, "installBattery": true}
        });
        let household: Household = serde_json::from_value(json).unwrap();
        assert_eq!(household, Household::default_for(Region::NewSouthWales));
    }

    #[rstest]
    fn should_treat_absent_vehicles_as_an_empty_list() {
        let json = json!({
            "location": "TASMANIA",
            "spaceHeating": "WOOD",
            "waterHeating": "GAS",
            "cooktop": "LPG",
            "solar": {"hasSolar": false},
            "battery": {"hasBattery": false}
        });
        let household: Household = serde_json::from_value(json).unwrap();
        assert_eq!(household.vehicles, vec![]);
        assert_eq!(household.occupancy, None);
    }

    #[rstest]
    #[case(Region::Victoria, "\"VICTORIA\"")]
    #[case(Region::AustralianCapitalTerritory, "\"AUSTRALIAN_CAPITAL_TERRITORY\"")]
    fn should_serialize_regions_in_screaming_snake_case(
        #[case] region: Region,
        #[case] expected: &str,
    ) {
        assert_eq!(serde_json::to_string(&region).unwrap(), expected);
    }

    #[rstest]
    fn should_serialize_fuel_types_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&FuelType::NaturalGas).unwrap(),
            "\"natural_gas\""
        );
    }

    #[rstest]
    fn should_round_trip_a_household_without_optional_flags() {
        let household = Household {
            location: Region::Queensland,
            occupancy: None,
            space_heating: SpaceHeating::None,
            water_heating: WaterHeating::Solar,
            cooktop: Cooktop::ElectricInduction,
            vehicles: vec![Vehicle {
                fuel_type: VehicleFuelType::Electric,
                kms_per_week: None,
                switch_to_ev: None,
            }],
            solar: Solar {
                has_solar: true,
                size: Some(5.),
                install_solar: None,
            },
            battery: Battery {
                has_battery: false,
                capacity: None,
                install_battery: None,
            },
        };
        let json = serde_json::to_string(&household).unwrap();
        assert!(!json.contains("switchToEV"));
        assert_eq!(
            serde_json::from_str::<Household>(&json).unwrap(),
            household
        );
    }
}
