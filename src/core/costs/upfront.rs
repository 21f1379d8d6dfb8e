use crate::compare_floats::max_of_2;
use crate::core::household::Installable;
use crate::core::reference::battery::{COST_INTERCEPT, COST_PER_KWH};
use crate::core::reference::machines::{
    cooktop_upfront_cost, space_heating_upfront_cost, water_heating_upfront_cost,
    N_HEAT_PUMPS_NEEDED,
};
use crate::core::reference::solar::cost_per_kw;
use crate::core::units::round_to_two_decimal_places;
use crate::input::{Battery, Cooktop, Household, Region, Solar, SpaceHeating, WaterHeating};
use serde::Serialize;

/// What each planned purchase and appliance switch costs, to the cent.
/// Upgrades the household is not making sit at zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpfrontCost {
    pub solar: f64,
    pub battery: f64,
    pub cooktop: f64,
    pub water_heating: f64,
    pub space_heating: f64,
}

fn solar_upfront_cost(solar: &Solar, region: Region) -> f64 {
    if solar.should_install() {
        return round_to_two_decimal_places(cost_per_kw(region) * solar.size.unwrap_or(0.));
    }
    0.
}

/// Installed battery prices track capacity linearly above a fixed base.
fn battery_upfront_cost(battery: &Battery) -> f64 {
    if battery.should_install() {
        return round_to_two_decimal_places(
            COST_INTERCEPT + COST_PER_KWH * battery.capacity.unwrap_or(0.),
        );
    }
    0.
}

fn cooktop_switch_cost(current: Cooktop, electrified: Cooktop) -> f64 {
    if current == electrified {
        return 0.;
    }
    let info = cooktop_upfront_cost(electrified);
    round_to_two_decimal_places(info.item_price + info.install_cost)
}

fn water_heating_switch_cost(current: WaterHeating, electrified: WaterHeating) -> f64 {
    if current == electrified {
        return 0.;
    }
    match water_heating_upfront_cost(electrified) {
        Some(info) => round_to_two_decimal_places(info.item_price + info.install_cost),
        None => 0.,
    }
}

fn space_heating_switch_cost(
    current: SpaceHeating,
    electrified: SpaceHeating,
    region: Region,
) -> f64 {
    if current == electrified {
        return 0.;
    }
    match space_heating_upfront_cost(electrified) {
        Some(info) => {
            let cost_per_heater = info.item_price + info.install_cost;
            round_to_two_decimal_places(cost_per_heater * N_HEAT_PUMPS_NEEDED.get(region))
        }
        None => 0.,
    }
}

/// Prices the gap between the current household and its electrified
/// counterpart. A battery installed alongside solar shares the base
/// installation, so its fixed cost component is waived.
pub(crate) fn calculate_upfront_cost(current: &Household, electrified: &Household) -> UpfrontCost {
    let install_solar = current.solar.should_install();
    let install_battery = current.battery.should_install();

    let mut battery_cost = battery_upfront_cost(&current.battery);
    if install_solar && install_battery {
        battery_cost = max_of_2(0., battery_cost - COST_INTERCEPT);
    }

    UpfrontCost {
        solar: solar_upfront_cost(&current.solar, current.location),
        battery: battery_cost,
        cooktop: cooktop_switch_cost(current.cooktop, electrified.cooktop),
        water_heating: water_heating_switch_cost(current.water_heating, electrified.water_heating),
        space_heating: space_heating_switch_cost(
            current.space_heating,
            electrified.space_heating,
            electrified.location,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::household::electrify_household;
    use crate::input::Region;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn household() -> Household {
        Household::default_for(Region::NewSouthWales)
    }

    #[rstest]
    fn should_cost_the_default_electrification_plan(household: Household) {
        let electrified = electrify_household(&household);

        let upfront = calculate_upfront_cost(&household, &electrified);

        assert_eq!(
            upfront,
            UpfrontCost {
                solar: 5537.,
                battery: 12100.,
                cooktop: 2000.,
                water_heating: 0.,
                space_heating: 0.,
            }
        );
    }

    #[rstest]
    fn should_charge_the_battery_base_cost_without_a_solar_install(mut household: Household) {
        household.solar.has_solar = true;
        household.solar.install_solar = None;
        let electrified = electrify_household(&household);

        let upfront = calculate_upfront_cost(&household, &electrified);

        assert_eq!(upfront.solar, 0.);
        assert_eq!(upfront.battery, 13600.);
    }

    #[rstest]
    fn should_multiply_space_heater_cost_by_the_regional_unit_count(household: Household) {
        let household = Household {
            space_heating: SpaceHeating::Gas,
            ..household
        };
        let electrified = electrify_household(&household);

        let upfront = calculate_upfront_cost(&household, &electrified);

        // two heat pumps at 2600 each
        assert_eq!(upfront.space_heating, 5200.);
    }

    #[rstest]
    fn should_not_cost_appliances_that_stay_as_they_are(household: Household) {
        let household = Household {
            cooktop: Cooktop::ElectricInduction,
            ..household
        };
        let electrified = electrify_household(&household);

        let upfront = calculate_upfront_cost(&household, &electrified);

        assert_eq!(upfront.cooktop, 0.);
        assert_eq!(upfront.water_heating, 0.);
        assert_eq!(upfront.space_heating, 0.);
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let household = Household::default_for(Region::Queensland);
        let electrified = electrify_household(&household);

        let upfront = calculate_upfront_cost(&household, &electrified);

        let json = serde_json::to_string(&upfront).unwrap();

        assert!(json.contains("\"waterHeating\""));
        assert!(json.contains("\"spaceHeating\""));
    }
}
