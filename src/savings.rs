use crate::core::costs::opex::{raw_opex, total_opex, OpexBreakdown};
use crate::core::costs::upfront::{calculate_upfront_cost, UpfrontCost};
use crate::core::emissions::total_emissions;
use crate::core::household::{clean_household, electrify_household, validate_household};
use crate::core::recommendation::{recommend_next_action, Recommendation};
use crate::core::units::{round_to_two_decimal_places, OPERATIONAL_LIFETIME_YEARS};
use crate::errors::{DataIntegrityError, HescError};
use crate::input::{Household, Period};
use serde::Serialize;
use tracing::error;

/// A before/after pair with its signed difference, rounded to cents (or to
/// hundredths of a kg for emissions).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComparisonValues {
    pub before: f64,
    pub after: f64,
    pub difference: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsComparison {
    pub per_week: ComparisonValues,
    pub per_year: ComparisonValues,
    pub over_lifetime: ComparisonValues,
    pub operational_lifetime: u32,
}

/// Everything a household learns from the calculation: emissions and bill
/// comparisons, the price of getting there, and the recommended next step.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub emissions: SavingsComparison,
    pub opex: SavingsComparison,
    pub upfront_cost: UpfrontCost,
    pub recommendation: Recommendation,
    pub opex_before: OpexBreakdown,
    pub opex_after: OpexBreakdown,
}

fn compare(before: f64, after: f64) -> ComparisonValues {
    ComparisonValues {
        before: round_to_two_decimal_places(before),
        after: round_to_two_decimal_places(after),
        difference: round_to_two_decimal_places(after - before),
    }
}

fn comparison_over_periods(
    current: &Household,
    electrified: &Household,
    total: impl Fn(&Household, Period) -> Result<f64, DataIntegrityError>,
) -> Result<SavingsComparison, DataIntegrityError> {
    let per_period = |period: Period| -> Result<ComparisonValues, DataIntegrityError> {
        Ok(compare(total(current, period)?, total(electrified, period)?))
    };

    Ok(SavingsComparison {
        per_week: per_period(Period::Weekly)?,
        per_year: per_period(Period::Yearly)?,
        over_lifetime: per_period(Period::OperationalLifetime)?,
        operational_lifetime: OPERATIONAL_LIFETIME_YEARS,
    })
}

fn logged(error: DataIntegrityError) -> HescError {
    error!("error during savings calculation: {error}");
    error.into()
}

/// Runs the full comparison for one household: validates and cleans the
/// input, derives its electrified counterpart, and reports emissions, bills,
/// upfront costs and the next recommended step.
pub fn calculate_savings(household: &Household) -> Result<Savings, HescError> {
    validate_household(household)?;
    let current = clean_household(household);
    let electrified = electrify_household(&current);

    let emissions =
        comparison_over_periods(&current, &electrified, total_emissions).map_err(logged)?;
    let opex = comparison_over_periods(&current, &electrified, total_opex).map_err(logged)?;
    let upfront_cost = calculate_upfront_cost(&current, &electrified);
    let recommendation = recommend_next_action(&current);

    let opex_before = raw_opex(&current).map_err(logged)?;
    let opex_after = raw_opex(&electrified).map_err(logged)?;

    Ok(Savings {
        emissions,
        opex,
        upfront_cost,
        recommendation,
        opex_before,
        opex_after,
    })
}
