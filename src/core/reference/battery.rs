/// Full charge-discharge cycles a home battery completes per day.
pub(crate) const CYCLES_PER_DAY: f64 = 1.0;

/// Average usable share of nameplate capacity over a fifteen-year life,
/// accounting for degradation.
pub(crate) const AVG_DEGRADED_PERFORMANCE_15_YEARS: f64 = 0.667;

/// Round-trip charging losses.
pub(crate) const LOSSES: f64 = 0.05;

/// Installed price: a flat component plus a per-kWh component.
pub(crate) const COST_INTERCEPT: f64 = 1500.;
pub(crate) const COST_PER_KWH: f64 = 1100.;
