use crate::errors::DataIntegrityError;
use crate::input::Period;

pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: u32 = 7;
pub const DAYS_PER_YEAR: f64 = 365.25;
/// How long a newly installed machine is expected to keep running, in years.
pub const OPERATIONAL_LIFETIME_YEARS: u32 = 15;

/// Multiplier applied to figures quoted for an average household, indexed by
/// occupancy. Flattens off at five occupants.
const OCCUPANCY_MULTIPLIER: [f64; 5] = [0.56, 0.90, 1.03, 1.07, 1.37];

pub fn scale_daily_to_period(daily_value: f64, period: Period) -> f64 {
    match period {
        Period::Daily => daily_value,
        Period::Weekly => daily_value * DAYS_PER_WEEK as f64,
        Period::Yearly => daily_value * DAYS_PER_YEAR,
        Period::OperationalLifetime => {
            daily_value * DAYS_PER_YEAR * OPERATIONAL_LIFETIME_YEARS as f64
        }
    }
}

/// Scales an energy figure quoted for an average household to the actual number
/// of occupants. Figures pass through untouched when the occupancy is unknown.
///
/// A zero occupancy is rejected upstream by validation, so reaching this
/// function with one is reported as a data integrity failure.
pub fn scale_energy_by_occupancy(
    energy_per_average_household: f64,
    occupancy: Option<u32>,
) -> Result<f64, DataIntegrityError> {
    match occupancy {
        None => Ok(energy_per_average_household),
        Some(0) => Err(DataIntegrityError::OccupancyNotValidated),
        Some(occupants) => {
            let capped = (occupants as usize).min(OCCUPANCY_MULTIPLIER.len());
            Ok(energy_per_average_household * OCCUPANCY_MULTIPLIER[capped - 1])
        }
    }
}

/// Rounds to two decimal places, halves away from zero.
pub(crate) fn round_to_two_decimal_places(value: f64) -> f64 {
    (value * 100.).round() / 100.
}
