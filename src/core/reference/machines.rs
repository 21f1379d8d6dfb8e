//! Per-region energy draw and replacement pricing for every machine a
//! household can run. Figures are for an average household; occupancy
//! scaling happens at the point of use.

use super::RegionalValues;
use crate::input::{Cooktop, FuelType, Region, SpaceHeating, VehicleFuelType, WaterHeating};

/// Daily energy draw of one machine variant through one fuel.
///
/// Most machines burn a single fuel, so their variant maps to one profile.
/// Hybrid vehicles split their mileage between petrol and the grid, so they
/// map to a profile per fuel with the split baked into the table values.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MachineProfile {
    pub(crate) fuel_type: FuelType,
    pub(crate) kwh_per_day: RegionalValues,
}

/// Sticker price and install labour for replacing a machine, in dollars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct UpfrontCostInfo {
    pub(crate) item_price: f64,
    pub(crate) install_cost: f64,
}

const WOOD_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Wood,
    kwh_per_day: RegionalValues([35.91, 13.99, 1.71, 48.00, 41.42, 12.12, 16.89, 7.93]),
}];

const GAS_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::NaturalGas,
    kwh_per_day: RegionalValues([29.18, 11.36, 1.39, 39.00, 33.65, 9.84, 13.72, 6.44]),
}];

const LPG_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Lpg,
    kwh_per_day: RegionalValues([29.18, 11.36, 1.39, 39.00, 33.65, 9.84, 13.72, 6.44]),
}];

const DIESEL_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Diesel,
    kwh_per_day: RegionalValues([0., 0., 0., 0., 0., 0., 0., 0.]),
}];

const RESISTIVE_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([23.34, 9.09, 1.11, 31.20, 26.92, 7.87, 10.98, 5.16]),
}];

const HEAT_PUMP: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([6.007, 2.273, 0.263, 8.531, 7.362, 1.969, 2.745, 1.253]),
}];

/// A household with no space heating draws nothing.
pub(crate) fn space_heating_profiles(variant: SpaceHeating) -> &'static [MachineProfile] {
    match variant {
        SpaceHeating::Wood => WOOD_HEATER,
        SpaceHeating::Gas => GAS_HEATER,
        SpaceHeating::Lpg => LPG_HEATER,
        SpaceHeating::Diesel => DIESEL_HEATER,
        SpaceHeating::ElectricResistance => RESISTIVE_HEATER,
        SpaceHeating::ElectricHeatPump => HEAT_PUMP,
        SpaceHeating::None => &[],
    }
}

const GAS_WATER_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::NaturalGas,
    kwh_per_day: RegionalValues([8.70, 7.69, 5.86, 7.99, 7.59, 8.04, 7.93, 7.38]),
}];

const LPG_WATER_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Lpg,
    kwh_per_day: RegionalValues([8.70, 7.69, 5.86, 7.99, 7.59, 8.04, 7.93, 7.38]),
}];

const RESISTIVE_WATER_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([7.41, 6.54, 4.99, 6.80, 6.46, 6.84, 6.75, 6.28]),
}];

const HEAT_PUMP_WATER_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([2.05, 1.76, 1.27, 2.00, 1.90, 1.84, 1.81, 1.64]),
}];

/// Solar thermal hot water performs like a heat pump but draws on the sun
/// rather than a purchased fuel.
const SOLAR_WATER_HEATER: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Solar,
    kwh_per_day: RegionalValues([2.05, 1.76, 1.27, 2.00, 1.90, 1.84, 1.81, 1.64]),
}];

pub(crate) fn water_heating_profiles(variant: WaterHeating) -> &'static [MachineProfile] {
    match variant {
        WaterHeating::Gas => GAS_WATER_HEATER,
        WaterHeating::Lpg => LPG_WATER_HEATER,
        WaterHeating::ElectricResistance => RESISTIVE_WATER_HEATER,
        WaterHeating::ElectricHeatPump => HEAT_PUMP_WATER_HEATER,
        WaterHeating::Solar => SOLAR_WATER_HEATER,
    }
}

const GAS_COOKTOP: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::NaturalGas,
    kwh_per_day: RegionalValues([2.14, 2.21, 2.32, 2.07, 2.34, 2.26, 2.35, 2.17]),
}];

const LPG_COOKTOP: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Lpg,
    kwh_per_day: RegionalValues([2.14, 2.21, 2.32, 2.07, 2.34, 2.26, 2.35, 2.17]),
}];

const RESISTIVE_COOKTOP: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([0.92, 0.95, 0.99, 0.88, 1.00, 0.97, 1.00, 0.93]),
}];

const INDUCTION_COOKTOP: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([0.83, 0.86, 0.90, 0.80, 0.91, 0.87, 0.91, 0.84]),
}];

pub(crate) fn cooktop_profiles(variant: Cooktop) -> &'static [MachineProfile] {
    match variant {
        Cooktop::Gas => GAS_COOKTOP,
        Cooktop::Lpg => LPG_COOKTOP,
        Cooktop::ElectricResistance => RESISTIVE_COOKTOP,
        Cooktop::ElectricInduction => INDUCTION_COOKTOP,
    }
}

const PETROL_VEHICLE: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Petrol,
    kwh_per_day: RegionalValues([35.9, 36.7, 38.6, 33.5, 33.6, 35.8, 33.2, 37.2]),
}];

const DIESEL_VEHICLE: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Diesel,
    kwh_per_day: RegionalValues([28., 29., 30., 26., 26., 28., 26., 29.]),
}];

// 70% petrol, 30% electric
const HYBRID_VEHICLE: &[MachineProfile] = &[
    MachineProfile {
        fuel_type: FuelType::Petrol,
        kwh_per_day: RegionalValues([
            35.9 * 0.7,
            36.7 * 0.7,
            38.6 * 0.7,
            33.5 * 0.7,
            33.6 * 0.7,
            35.8 * 0.7,
            33.2 * 0.7,
            37.2 * 0.7,
        ]),
    },
    MachineProfile {
        fuel_type: FuelType::Electricity,
        kwh_per_day: RegionalValues([
            9.2 * 0.3,
            9.4 * 0.3,
            9.9 * 0.3,
            8.6 * 0.3,
            8.6 * 0.3,
            9.2 * 0.3,
            8.5 * 0.3,
            9.6 * 0.3,
        ]),
    },
];

// 60% petrol, 40% electric
const PLUG_IN_HYBRID_VEHICLE: &[MachineProfile] = &[
    MachineProfile {
        fuel_type: FuelType::Petrol,
        kwh_per_day: RegionalValues([
            35.9 * 0.6,
            36.7 * 0.6,
            38.6 * 0.6,
            33.5 * 0.6,
            33.6 * 0.6,
            35.8 * 0.6,
            33.2 * 0.6,
            37.2 * 0.6,
        ]),
    },
    MachineProfile {
        fuel_type: FuelType::Electricity,
        kwh_per_day: RegionalValues([
            9.2 * 0.4,
            9.4 * 0.4,
            9.9 * 0.4,
            8.6 * 0.4,
            8.6 * 0.4,
            9.2 * 0.4,
            8.5 * 0.4,
            9.6 * 0.4,
        ]),
    },
];

const ELECTRIC_VEHICLE: &[MachineProfile] = &[MachineProfile {
    fuel_type: FuelType::Electricity,
    kwh_per_day: RegionalValues([9.2, 9.4, 9.9, 8.6, 8.6, 9.2, 8.5, 9.6]),
}];

pub(crate) fn vehicle_profiles(variant: VehicleFuelType) -> &'static [MachineProfile] {
    match variant {
        VehicleFuelType::Petrol => PETROL_VEHICLE,
        VehicleFuelType::Diesel => DIESEL_VEHICLE,
        VehicleFuelType::Hybrid => HYBRID_VEHICLE,
        VehicleFuelType::PlugInHybrid => PLUG_IN_HYBRID_VEHICLE,
        VehicleFuelType::Electric => ELECTRIC_VEHICLE,
    }
}

/// Distance the average car travels in a week, used to weight a household's
/// stated mileage against the energy tables above.
pub(crate) const VEHICLE_AVG_KMS_PER_WEEK: RegionalValues = RegionalValues([
    38.0 * 7.,
    36.2 * 7.,
    35.9 * 7.,
    35.1 * 7.,
    33.1 * 7.,
    33.8 * 7.,
    35.0 * 7.,
    36.9 * 7.,
]);

const SPACE_COOLING_KWH_PER_DAY: RegionalValues =
    RegionalValues([0.10, 0.77, 7.58, 0.74, 0.09, 1.65, 0.63, 1.89]);

const MISC_APPLIANCES_KWH_PER_DAY: RegionalValues =
    RegionalValues([5.21, 5.32, 5.52, 5.18, 5.21, 5.14, 5.21, 5.09]);

const COOKING_APPLIANCES_KWH_PER_DAY: RegionalValues =
    RegionalValues([3.32, 3.40, 3.57, 3.20, 3.65, 3.47, 3.62, 3.35]);

/// Combined draw of everything not modelled as a dedicated machine: cooling,
/// white goods and small appliances, and non-cooktop cooking. Always
/// electric.
pub(crate) fn other_machines_kwh_per_day(region: Region) -> f64 {
    SPACE_COOLING_KWH_PER_DAY.get(region)
        + MISC_APPLIANCES_KWH_PER_DAY.get(region)
        + COOKING_APPLIANCES_KWH_PER_DAY.get(region)
}

const HEAT_PUMP_UPFRONT: UpfrontCostInfo = UpfrontCostInfo {
    item_price: 1700.,
    install_cost: 900.,
};

const GAS_HEATER_UPFRONT: UpfrontCostInfo = UpfrontCostInfo {
    item_price: 1740.,
    install_cost: 500.,
};

const WOOD_HEATER_UPFRONT: UpfrontCostInfo = UpfrontCostInfo {
    item_price: 1400.,
    install_cost: 1000.,
};

const RESISTIVE_HEATER_UPFRONT: UpfrontCostInfo = UpfrontCostInfo {
    item_price: 220.,
    install_cost: 0.,
};

pub(crate) fn space_heating_upfront_cost(variant: SpaceHeating) -> Option<UpfrontCostInfo> {
    match variant {
        SpaceHeating::ElectricHeatPump => Some(HEAT_PUMP_UPFRONT),
        SpaceHeating::Gas | SpaceHeating::Lpg => Some(GAS_HEATER_UPFRONT),
        SpaceHeating::Wood => Some(WOOD_HEATER_UPFRONT),
        SpaceHeating::ElectricResistance => Some(RESISTIVE_HEATER_UPFRONT),
        SpaceHeating::Diesel | SpaceHeating::None => None,
    }
}

/// Reverse-cycle heat pumps are sized per room, so replacing a whole-home
/// heater takes several units in the larger-home regions.
pub(crate) const N_HEAT_PUMPS_NEEDED: RegionalValues =
    RegionalValues([3., 2., 1., 3., 3., 2., 2., 1.]);

/// Solar thermal pricing is unknown, so a switch away from it is never
/// costed.
pub(crate) fn water_heating_upfront_cost(variant: WaterHeating) -> Option<UpfrontCostInfo> {
    match variant {
        WaterHeating::ElectricResistance => Some(UpfrontCostInfo {
            item_price: 1400.,
            install_cost: 700.,
        }),
        WaterHeating::Gas | WaterHeating::Lpg => Some(UpfrontCostInfo {
            item_price: 1200.,
            install_cost: 700.,
        }),
        WaterHeating::ElectricHeatPump => Some(UpfrontCostInfo {
            item_price: 3500.,
            install_cost: 0.,
        }),
        WaterHeating::Solar => None,
    }
}

pub(crate) fn cooktop_upfront_cost(variant: Cooktop) -> UpfrontCostInfo {
    match variant {
        Cooktop::Gas | Cooktop::Lpg => UpfrontCostInfo {
            item_price: 700.,
            install_cost: 400.,
        },
        Cooktop::ElectricResistance => UpfrontCostInfo {
            item_price: 600.,
            install_cost: 400.,
        },
        Cooktop::ElectricInduction => UpfrontCostInfo {
            item_price: 1400.,
            install_cost: 600.,
        },
    }
}
