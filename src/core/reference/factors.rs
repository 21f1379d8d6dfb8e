//! Emissions intensity of each fuel, in kg CO2e per kWh.

use super::RegionalValues;
use crate::input::{FuelType, Region};

/// Grid electricity intensity varies with each region's generation mix;
/// Tasmania's hydro-heavy grid sits an order of magnitude below the coal
/// states.
const GRID_EMISSIONS_FACTOR: RegionalValues =
    RegionalValues([0.31, 0.26, 0.22, 0.26, 0.04, 0.21, 0.10, 0.30]);

const NATURAL_GAS_EMISSIONS_FACTOR: f64 = 0.19;
const LPG_EMISSIONS_FACTOR: f64 = 0.23;
const WOOD_EMISSIONS_FACTOR: f64 = 0.10;
const PETROL_EMISSIONS_FACTOR: f64 = 0.24;
const DIESEL_EMISSIONS_FACTOR: f64 = 0.27;

pub(crate) fn emissions_factor(fuel_type: FuelType, region: Region) -> f64 {
    match fuel_type {
        FuelType::Electricity => GRID_EMISSIONS_FACTOR.get(region),
        FuelType::NaturalGas => NATURAL_GAS_EMISSIONS_FACTOR,
        FuelType::Lpg => LPG_EMISSIONS_FACTOR,
        FuelType::Wood => WOOD_EMISSIONS_FACTOR,
        FuelType::Petrol => PETROL_EMISSIONS_FACTOR,
        FuelType::Diesel => DIESEL_EMISSIONS_FACTOR,
        FuelType::Solar | FuelType::None => 0.,
    }
}
