use super::RegionalValues;
use crate::input::Region;

/// Share of each demand category's electricity that rooftop generation can
/// displace, given how poorly generation and demand hours line up.
pub(crate) const SELF_CONSUMPTION_RATE: f64 = 0.5;

/// $/kWh paid for exports at today's feed-in tariffs, roughly uniform across
/// the country.
pub(crate) const FEED_IN_TARIFF_TODAY: f64 = 0.06;

pub(crate) const FEED_IN_TARIFF_15_YEARS: RegionalValues =
    RegionalValues([0.06, 0.10, 0.10, 0.12, 0.11, 0.04, 0.09, 0.12]);

/// Average output of a panel over a thirty-year life relative to its first
/// year, accounting for degradation.
pub(crate) const AVG_DEGRADED_PERFORMANCE_30_YEARS: f64 = 0.9308;

/// Fraction of nameplate capacity actually generated, averaged across the
/// year.
pub(crate) const CAPACITY_FACTOR: RegionalValues = RegionalValues([
    0.1537, 0.1629, 0.1898, 0.1632, 0.1586, 0.2104, 0.1788, 0.1868,
]);

const COST_PER_KW: RegionalValues =
    RegionalValues([792., 791., 1306., 821., 949., 882., 805., 811.]);

/// Installed price of rooftop solar per nameplate kW.
pub(crate) fn cost_per_kw(region: Region) -> f64 {
    COST_PER_KW.get(region)
}
