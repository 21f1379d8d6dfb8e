use crate::input::FuelType;
use thiserror::Error;

/// Top-level error type for a savings calculation.
#[derive(Debug, Error)]
pub enum HescError {
    #[error("Household input was rejected: {0}")]
    InvalidHousehold(#[from] ValidationError),
    #[error("Error identified during savings calculation: {0}")]
    FailureInCalculation(#[from] DataIntegrityError),
}

/// A correctable problem with the household as supplied by the caller.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("A battery cannot be owned or installed without solar to charge it")]
    BatteryRequiresSolar,
    #[error("Occupancy must be greater than zero")]
    OccupancyIsZero,
}

/// An inconsistency in the engine's own accounting or reference data. Unlike a
/// [`ValidationError`] this is not attributable to the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DataIntegrityError {
    #[error("Energy consumed from solar ({consumed} kWh) exceeded energy generated ({generated} kWh)")]
    SolarConsumptionExceedsGeneration { consumed: f64, generated: f64 },
    #[error("No purchase price is defined for fuel type {0}")]
    UnpricedFuel(FuelType),
    #[error("An occupancy of zero reached the energy scaling stage unvalidated")]
    OccupancyNotValidated,
}

/// Failure to decode a share token back into a household.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Share token was not valid URL-safe base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Share token did not contain a well-formed household: {0}")]
    Payload(#[from] serde_json::Error),
}
