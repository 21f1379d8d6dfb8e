use crate::core::energy::dispatch::electricity_consumption;
use crate::core::energy::needs::{other_energy_consumption, total_energy_needs};
use crate::core::energy::FuelDict;
use crate::core::reference::prices::{
    annual_supply_charge, fuel_volume_rate, grid_off_peak_rate_today, grid_volume_rate, PriceBasis,
};
use crate::core::reference::solar::{FEED_IN_TARIFF_15_YEARS, FEED_IN_TARIFF_TODAY};
use crate::core::units::{scale_daily_to_period, DAYS_PER_YEAR};
use crate::errors::DataIntegrityError;
use crate::input::{Cooktop, FuelType, Household, Period, Region, SpaceHeating, WaterHeating};
use itertools::Itertools;
use serde::Serialize;

/// Yearly running costs of one household, itemised the way they land on a
/// bill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpexBreakdown {
    pub grid_volume_costs: f64,
    pub other_energy_costs: f64,
    pub other_energy_costs_by_fuel_type: OtherEnergyCostsByFuel,
    pub fixed_costs: f64,
    pub fixed_costs_by_fuel_type: FixedCostsByFuel,
    pub revenue_from_solar_export: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OtherEnergyCostsByFuel {
    pub gas: f64,
    pub lpg: f64,
    pub wood: f64,
    pub petrol: f64,
    pub diesel: f64,
}

/// Supply charges are only itemised for fuels the household is connected
/// to, electricity always being one of them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FixedCostsByFuel {
    pub electricity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpg: Option<f64>,
}

/// The $/kWh actually paid for grid draw. Batteries shift grid charging into
/// off-peak windows, so any stored energy blends the off-peak rate in at
/// today's prices.
pub(crate) fn effective_grid_price(
    consumed_from_grid: f64,
    consumed_from_battery: f64,
    period: Period,
    region: Region,
) -> f64 {
    let mut grid_price = grid_volume_rate(PriceBasis::for_period(period), region);

    if consumed_from_battery > 0. {
        grid_price = if consumed_from_battery >= consumed_from_grid {
            grid_off_peak_rate_today(region)
        } else {
            let percent_from_battery = consumed_from_battery / consumed_from_grid;
            grid_off_peak_rate_today(region) * percent_from_battery
                + grid_volume_rate(PriceBasis::Today, region) * (1. - percent_from_battery)
        };
    }
    grid_price
}

pub(crate) fn grid_volume_cost(
    consumed_from_grid: f64,
    consumed_from_battery: f64,
    period: Period,
    region: Region,
) -> f64 {
    let grid_price =
        effective_grid_price(consumed_from_grid, consumed_from_battery, period, region);
    consumed_from_grid * grid_price
}

pub(crate) fn solar_export_revenue(exported_to_grid: f64, period: Period, region: Region) -> f64 {
    if period == Period::OperationalLifetime {
        return exported_to_grid * FEED_IN_TARIFF_15_YEARS.get(region);
    }
    exported_to_grid * FEED_IN_TARIFF_TODAY
}

pub(crate) fn other_energy_costs(
    other_consumption: &FuelDict,
    period: Period,
    region: Region,
) -> Result<f64, DataIntegrityError> {
    let basis = PriceBasis::for_period(period);
    other_consumption
        .iter()
        .map(|(&fuel, &energy)| Ok(energy * fuel_volume_rate(fuel, basis, region)?))
        .process_results(|costs| costs.sum())
}

fn fuel_cost(
    other_consumption: &FuelDict,
    fuel: FuelType,
    basis: PriceBasis,
    region: Region,
) -> Result<f64, DataIntegrityError> {
    let energy = other_consumption.get(&fuel).copied().unwrap_or(0.);
    Ok(energy * fuel_volume_rate(fuel, basis, region)?)
}

pub(crate) fn other_energy_costs_by_fuel(
    other_consumption: &FuelDict,
    period: Period,
    region: Region,
) -> Result<OtherEnergyCostsByFuel, DataIntegrityError> {
    let basis = PriceBasis::for_period(period);
    Ok(OtherEnergyCostsByFuel {
        gas: fuel_cost(other_consumption, FuelType::NaturalGas, basis, region)?,
        lpg: fuel_cost(other_consumption, FuelType::Lpg, basis, region)?,
        wood: fuel_cost(other_consumption, FuelType::Wood, basis, region)?,
        petrol: fuel_cost(other_consumption, FuelType::Petrol, basis, region)?,
        diesel: fuel_cost(other_consumption, FuelType::Diesel, basis, region)?,
    })
}

fn daily_supply_cost(
    fuel: FuelType,
    period: Period,
    region: Region,
) -> Result<f64, DataIntegrityError> {
    Ok(annual_supply_charge(fuel, PriceBasis::for_period(period), region)? / DAYS_PER_YEAR)
}

fn uses_natural_gas(household: &Household) -> bool {
    household.space_heating == SpaceHeating::Gas
        || household.water_heating == WaterHeating::Gas
        || household.cooktop == Cooktop::Gas
}

fn uses_lpg(household: &Household) -> bool {
    household.space_heating == SpaceHeating::Lpg
        || household.water_heating == WaterHeating::Lpg
        || household.cooktop == Cooktop::Lpg
}

/// Annual supply charges for every connected fuel, summed daily and then
/// scaled out to the period.
pub(crate) fn fixed_costs(
    household: &Household,
    period: Period,
) -> Result<f64, DataIntegrityError> {
    let region = household.location;
    let mut daily_costs = daily_supply_cost(FuelType::Electricity, period, region)?;

    if uses_natural_gas(household) {
        daily_costs += daily_supply_cost(FuelType::NaturalGas, period, region)?;
    }
    if uses_lpg(household) {
        daily_costs += daily_supply_cost(FuelType::Lpg, period, region)?;
    }
    Ok(scale_daily_to_period(daily_costs, period))
}

pub(crate) fn fixed_costs_by_fuel(
    household: &Household,
    period: Period,
) -> Result<FixedCostsByFuel, DataIntegrityError> {
    let region = household.location;
    let electricity =
        scale_daily_to_period(daily_supply_cost(FuelType::Electricity, period, region)?, period);

    let gas = if uses_natural_gas(household) {
        Some(scale_daily_to_period(
            daily_supply_cost(FuelType::NaturalGas, period, region)?,
            period,
        ))
    } else {
        None
    };
    let lpg = if uses_lpg(household) {
        Some(scale_daily_to_period(
            daily_supply_cost(FuelType::Lpg, period, region)?,
            period,
        ))
    } else {
        None
    };

    Ok(FixedCostsByFuel {
        electricity,
        gas,
        lpg,
    })
}

/// The household's total bills over the period: grid draw plus other fuels
/// plus supply charges, less feed-in revenue.
pub(crate) fn total_opex(household: &Household, period: Period) -> Result<f64, DataIntegrityError> {
    let region = household.location;
    let energy_needs = total_energy_needs(household, period, region)?;
    let consumption = electricity_consumption(
        &energy_needs,
        &household.solar,
        &household.battery,
        region,
        period,
    )?;
    let other_consumption = other_energy_consumption(&energy_needs);

    let grid_volume_costs = grid_volume_cost(
        consumption.consumed_from_grid,
        consumption.consumed_from_battery,
        period,
        region,
    );
    let other_costs = other_energy_costs(&other_consumption, period, region)?;
    let fixed = fixed_costs(household, period)?;
    let export_revenue = solar_export_revenue(consumption.exported_to_grid, period, region);

    Ok(grid_volume_costs + other_costs + fixed - export_revenue)
}

/// Unrounded yearly bill components, reported for both the current and the
/// electrified household.
pub(crate) fn raw_opex(household: &Household) -> Result<OpexBreakdown, DataIntegrityError> {
    let region = household.location;
    let energy_needs = total_energy_needs(household, Period::Yearly, region)?;
    let consumption = electricity_consumption(
        &energy_needs,
        &household.solar,
        &household.battery,
        region,
        Period::Yearly,
    )?;
    let other_consumption = other_energy_consumption(&energy_needs);

    Ok(OpexBreakdown {
        grid_volume_costs: grid_volume_cost(
            consumption.consumed_from_grid,
            consumption.consumed_from_battery,
            Period::Yearly,
            region,
        ),
        other_energy_costs: other_energy_costs(&other_consumption, Period::Yearly, region)?,
        other_energy_costs_by_fuel_type: other_energy_costs_by_fuel(
            &other_consumption,
            Period::Yearly,
            region,
        )?,
        fixed_costs: fixed_costs(household, Period::Yearly)?,
        fixed_costs_by_fuel_type: fixed_costs_by_fuel(household, Period::Yearly)?,
        revenue_from_solar_export: solar_export_revenue(
            consumption.exported_to_grid,
            Period::Yearly,
            region,
        ),
    })
}
