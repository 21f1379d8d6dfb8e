use super::{ElectricityConsumption, MachineEnergyNeeds, MACHINE_CATEGORIES};
use crate::compare_floats::{max_of_2, min_of_2};
use crate::core::reference::battery::{
    AVG_DEGRADED_PERFORMANCE_15_YEARS, CYCLES_PER_DAY, LOSSES,
};
use crate::core::reference::solar::{
    AVG_DEGRADED_PERFORMANCE_30_YEARS, CAPACITY_FACTOR, SELF_CONSUMPTION_RATE,
};
use crate::core::units::{scale_daily_to_period, HOURS_PER_DAY};
use crate::errors::DataIntegrityError;
use crate::input::{Battery, Period, Region, Solar};

/// Usable output of a rooftop system over the period, held at its average
/// degraded performance. Zero unless panels are both owned and sized.
pub(crate) fn energy_generated_from_solar(solar: &Solar, region: Region, period: Period) -> f64 {
    let daily = match solar.size {
        Some(size) if solar.has_solar && size > 0. => {
            size * CAPACITY_FACTOR.get(region)
                * AVG_DEGRADED_PERFORMANCE_30_YEARS
                * HOURS_PER_DAY as f64
        }
        _ => 0.,
    };
    scale_daily_to_period(daily, period)
}

/// Generation absorbed by each demand category, capped at the
/// self-consumption rate of its electricity needs. When the cap exceeds
/// what the panels produced, the shortfall is shared in proportion to
/// demand.
fn solar_allocation(generated: f64, energy_needs: &MachineEnergyNeeds) -> [f64; 3] {
    let mut allocation = [0.; 3];
    for (allocated, category) in allocation.iter_mut().zip(MACHINE_CATEGORIES) {
        *allocated = energy_needs.electricity(category) * SELF_CONSUMPTION_RATE;
    }

    let total_max: f64 = allocation.iter().sum();
    if total_max > generated {
        let deficit = total_max - generated;
        for allocated in allocation.iter_mut() {
            let proportion_of_demand = *allocated / total_max;
            *allocated -= deficit * proportion_of_demand;
        }
    }
    allocation
}

/// Surplus generation the battery can hold over the period, limited by its
/// degraded throughput.
fn energy_stored_in_battery(
    battery_capacity: f64,
    generated: f64,
    consumed_from_solar: f64,
    period: Period,
) -> Result<f64, DataIntegrityError> {
    if consumed_from_solar > generated {
        return Err(DataIntegrityError::SolarConsumptionExceedsGeneration {
            consumed: consumed_from_solar,
            generated,
        });
    }
    let surplus = generated - consumed_from_solar;

    let capacity_per_day =
        battery_capacity * CYCLES_PER_DAY * AVG_DEGRADED_PERFORMANCE_15_YEARS * (1. - LOSSES);

    Ok(min_of_2(surplus, scale_daily_to_period(capacity_per_day, period)))
}

/// Settles where the household's electricity comes from over the period:
/// panels first, then the battery, with the grid covering the remainder and
/// taking any surplus as export.
pub(crate) fn electricity_consumption(
    energy_needs: &MachineEnergyNeeds,
    solar: &Solar,
    battery: &Battery,
    region: Region,
    period: Period,
) -> Result<ElectricityConsumption, DataIntegrityError> {
    let generated = energy_generated_from_solar(solar, region, period);

    let allocation = solar_allocation(generated, energy_needs);
    let consumed_from_solar: f64 = allocation.iter().sum();

    let mut consumed_from_battery = 0.;
    if battery.has_battery {
        if let Some(capacity) = battery.capacity {
            consumed_from_battery =
                energy_stored_in_battery(capacity, generated, consumed_from_solar, period)?;
        }
    }

    let exported_to_grid = generated - consumed_from_battery - consumed_from_solar;

    let mut needs_remaining = 0.;
    for (&allocated, category) in allocation.iter().zip(MACHINE_CATEGORIES) {
        needs_remaining += energy_needs.electricity(category) - allocated;
    }
    let consumed_from_grid = max_of_2(0., needs_remaining - consumed_from_battery);

    Ok(ElectricityConsumption {
        consumed_from_solar,
        consumed_from_battery,
        consumed_from_grid,
        exported_to_grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energy::needs::total_energy_needs;
    use crate::core::household::electrify_household;
    use crate::input::Household;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn household() -> Household {
        Household::default_for(Region::NewSouthWales)
    }

    #[rstest]
    #[case(Solar { has_solar: true, size: Some(7.), install_solar: None }, 9304.155609839998)]
    #[case(Solar { has_solar: false, size: Some(7.), install_solar: Some(true) }, 0.)]
    #[case(Solar { has_solar: true, size: None, install_solar: None }, 0.)]
    #[case(Solar { has_solar: true, size: Some(0.), install_solar: None }, 0.)]
    fn should_calc_yearly_solar_generation(#[case] solar: Solar, #[case] expected: f64) {
        assert_relative_eq!(
            energy_generated_from_solar(&solar, Region::NewSouthWales, Period::Yearly),
            expected
        );
    }

    #[rstest]
    fn should_pass_all_demand_to_grid_without_solar(household: Household) {
        let needs = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales).unwrap();
        let consumption = electricity_consumption(
            &needs,
            &household.solar,
            &household.battery,
            Region::NewSouthWales,
            Period::Yearly,
        )
        .unwrap();

        assert_abs_diff_eq!(consumption.consumed_from_solar, 0., epsilon = 1e-9);
        assert_eq!(consumption.consumed_from_battery, 0.);
        assert_relative_eq!(consumption.consumed_from_grid, 6016.653675);
        assert_abs_diff_eq!(consumption.exported_to_grid, 0., epsilon = 1e-9);
    }

    #[rstest]
    fn should_split_consumption_across_solar_battery_and_grid(household: Household) {
        let electrified = electrify_household(&household);
        let needs =
            total_energy_needs(&electrified, Period::Yearly, Region::NewSouthWales).unwrap();
        let consumption = electricity_consumption(
            &needs,
            &electrified.solar,
            &electrified.battery,
            Region::NewSouthWales,
            Period::Yearly,
        )
        .unwrap();

        assert_relative_eq!(consumption.consumed_from_solar, 5859.504948983819);
        assert_relative_eq!(consumption.consumed_from_battery, 2545.8472875);
        assert_relative_eq!(consumption.consumed_from_grid, 3313.657661483819);
        assert_relative_eq!(consumption.exported_to_grid, 898.8033733561779);

        let generated =
            energy_generated_from_solar(&electrified.solar, Region::NewSouthWales, Period::Yearly);
        assert_relative_eq!(
            consumption.consumed_from_solar
                + consumption.consumed_from_battery
                + consumption.exported_to_grid,
            generated,
            max_relative = 1e-12
        );
    }

    #[rstest]
    fn should_absorb_all_generation_when_panels_are_undersized(household: Household) {
        let needs = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales).unwrap();
        let solar = Solar {
            has_solar: true,
            size: Some(3.),
            install_solar: None,
        };
        let consumption = electricity_consumption(
            &needs,
            &solar,
            &household.battery,
            Region::NewSouthWales,
            Period::Yearly,
        )
        .unwrap();

        let generated = energy_generated_from_solar(&solar, Region::NewSouthWales, Period::Yearly);
        assert_relative_eq!(consumption.consumed_from_solar, generated, max_relative = 1e-9);
        assert_abs_diff_eq!(consumption.exported_to_grid, 0., epsilon = 1e-9);
    }

    #[test]
    fn should_cap_stored_energy_at_degraded_battery_throughput() {
        let stored = energy_stored_in_battery(11., 10_000., 1_000., Period::Yearly).unwrap();

        assert_relative_eq!(stored, 2545.8472875);
    }

    #[test]
    fn should_store_whole_surplus_when_battery_outsizes_it() {
        let stored = energy_stored_in_battery(100., 50., 20., Period::Yearly).unwrap();

        assert_eq!(stored, 30.);
    }

    #[test]
    fn should_reject_storage_when_consumption_exceeds_generation() {
        let result = energy_stored_in_battery(11., 10., 20., Period::Daily);

        assert_eq!(
            result,
            Err(DataIntegrityError::SolarConsumptionExceedsGeneration {
                consumed: 20.,
                generated: 10.,
            })
        );
    }

    #[rstest]
    fn should_report_integrity_error_for_battery_without_generation(household: Household) {
        let needs = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales).unwrap();
        let battery = Battery {
            has_battery: true,
            capacity: Some(11.),
            install_battery: None,
        };

        let result = electricity_consumption(
            &needs,
            &household.solar,
            &battery,
            Region::NewSouthWales,
            Period::Yearly,
        );

        assert!(matches!(
            result,
            Err(DataIntegrityError::SolarConsumptionExceedsGeneration { .. })
        ));
    }
}
