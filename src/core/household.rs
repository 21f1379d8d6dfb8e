//! Validation and the two household transforms every calculation starts
//! from: normalisation of unset per-vehicle mileage, and the fully-electrified
//! counterpart household that savings are measured against.

use crate::core::reference::machines::VEHICLE_AVG_KMS_PER_WEEK;
use crate::errors::ValidationError;
use crate::input::{
    Battery, Cooktop, Household, Region, Solar, SpaceHeating, Vehicle, VehicleFuelType,
    WaterHeating,
};

/// Machinery that is bought outright rather than electrified in place.
pub trait Installable {
    fn is_owned(&self) -> bool;
    fn is_wanted(&self) -> bool;

    /// True when the household wants one it does not yet have.
    fn should_install(&self) -> bool {
        !self.is_owned() && self.is_wanted()
    }
}

impl Installable for Solar {
    fn is_owned(&self) -> bool {
        self.has_solar
    }

    fn is_wanted(&self) -> bool {
        self.install_solar.unwrap_or(false)
    }
}

impl Installable for Battery {
    fn is_owned(&self) -> bool {
        self.has_battery
    }

    fn is_wanted(&self) -> bool {
        self.install_battery.unwrap_or(false)
    }
}

/// True when applying a per-field transform would change the value.
pub fn should_electrify<T: PartialEq + Copy>(current: T, electrify: impl Fn(T) -> T) -> bool {
    electrify(current) != current
}

pub fn validate_household(household: &Household) -> Result<(), ValidationError> {
    let has_or_wants_solar = household.solar.is_owned() || household.solar.is_wanted();
    let has_or_wants_battery = household.battery.is_owned() || household.battery.is_wanted();
    if !has_or_wants_solar && has_or_wants_battery {
        return Err(ValidationError::BatteryRequiresSolar);
    }
    if household.occupancy == Some(0) {
        return Err(ValidationError::OccupancyIsZero);
    }
    Ok(())
}

fn clean_vehicle(vehicle: &Vehicle, location: Region) -> Vehicle {
    Vehicle {
        kms_per_week: Some(
            vehicle
                .kms_per_week
                .unwrap_or_else(|| VEHICLE_AVG_KMS_PER_WEEK.get(location).round()),
        ),
        ..*vehicle
    }
}

/// Fills each vehicle's unset weekly mileage with the regional average,
/// rounded to a whole number of kilometres.
pub fn clean_household(household: &Household) -> Household {
    Household {
        vehicles: household
            .vehicles
            .iter()
            .map(|vehicle| clean_vehicle(vehicle, household.location))
            .collect(),
        ..household.clone()
    }
}

pub fn electrify_space_heating(current: SpaceHeating) -> SpaceHeating {
    match current {
        SpaceHeating::None => SpaceHeating::None,
        _ => SpaceHeating::ElectricHeatPump,
    }
}

pub fn electrify_water_heating(current: WaterHeating) -> WaterHeating {
    match current {
        WaterHeating::ElectricResistance | WaterHeating::ElectricHeatPump | WaterHeating::Solar => {
            current
        }
        WaterHeating::Gas | WaterHeating::Lpg => WaterHeating::ElectricHeatPump,
    }
}

pub fn electrify_cooktop(current: Cooktop) -> Cooktop {
    match current {
        Cooktop::ElectricResistance | Cooktop::ElectricInduction => current,
        Cooktop::Gas | Cooktop::Lpg => Cooktop::ElectricInduction,
    }
}

/// A vehicle flagged for replacement becomes an EV driving the same distance;
/// the rest keep their current drivetrain.
pub fn electrify_vehicle(current: &Vehicle) -> Vehicle {
    if current.switch_to_ev.unwrap_or(false) {
        Vehicle {
            fuel_type: VehicleFuelType::Electric,
            kms_per_week: current.kms_per_week,
            switch_to_ev: None,
        }
    } else {
        *current
    }
}

fn install_solar(current: Solar) -> Solar {
    if current.should_install() {
        Solar {
            has_solar: true,
            install_solar: None,
            ..current
        }
    } else {
        current
    }
}

fn install_battery(current: Battery) -> Battery {
    if current.should_install() {
        Battery {
            has_battery: true,
            install_battery: None,
            ..current
        }
    } else {
        current
    }
}

/// The household as it would look fully electrified: every machine swapped
/// for its electric counterpart and every wanted install carried out.
pub fn electrify_household(current: &Household) -> Household {
    Household {
        location: current.location,
        occupancy: current.occupancy,
        space_heating: electrify_space_heating(current.space_heating),
        water_heating: electrify_water_heating(current.water_heating),
        cooktop: electrify_cooktop(current.cooktop),
        vehicles: current.vehicles.iter().map(electrify_vehicle).collect(),
        solar: install_solar(current.solar),
        battery: install_battery(current.battery),
    }
}
