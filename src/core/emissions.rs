use crate::core::reference::factors::emissions_factor;
use crate::core::reference::machines::{
    cooktop_profiles, other_machines_kwh_per_day, space_heating_profiles, vehicle_profiles,
    water_heating_profiles, MachineProfile, VEHICLE_AVG_KMS_PER_WEEK,
};
use crate::core::units::{scale_daily_to_period, scale_energy_by_occupancy};
use crate::errors::DataIntegrityError;
use crate::input::{FuelType, Household, Period, Region, Vehicle};

fn appliance_emissions(
    profiles: &[MachineProfile],
    region: Region,
    occupancy: Option<u32>,
    period: Period,
) -> Result<f64, DataIntegrityError> {
    let mut daily = 0.;
    for profile in profiles {
        let energy = scale_energy_by_occupancy(profile.kwh_per_day.get(region), occupancy)?;
        daily += energy * emissions_factor(profile.fuel_type, region);
    }
    Ok(scale_daily_to_period(daily, period))
}

/// Driving emissions weighted by each vehicle's distance relative to the
/// regional average. Hybrids emit through both of their fuels.
pub(crate) fn vehicle_emissions(vehicles: &[Vehicle], region: Region, period: Period) -> f64 {
    let mut total = 0.;
    for vehicle in vehicles {
        let mut average_daily = 0.;
        for profile in vehicle_profiles(vehicle.fuel_type) {
            average_daily +=
                profile.kwh_per_day.get(region) * emissions_factor(profile.fuel_type, region);
        }
        let weighting_factor =
            vehicle.kms_per_week.unwrap_or(0.) / VEHICLE_AVG_KMS_PER_WEEK.get(region);
        total += scale_daily_to_period(average_daily * weighting_factor, period);
    }
    total
}

fn other_appliance_emissions(
    region: Region,
    occupancy: Option<u32>,
    period: Period,
) -> Result<f64, DataIntegrityError> {
    let energy = scale_energy_by_occupancy(other_machines_kwh_per_day(region), occupancy)?;
    let daily = energy * emissions_factor(FuelType::Electricity, region);
    Ok(scale_daily_to_period(daily, period))
}

/// Total household emissions in kg of CO2-equivalent over the period.
pub(crate) fn total_emissions(
    household: &Household,
    period: Period,
) -> Result<f64, DataIntegrityError> {
    let region = household.location;
    let appliances = appliance_emissions(
        space_heating_profiles(household.space_heating),
        region,
        household.occupancy,
        period,
    )? + appliance_emissions(
        water_heating_profiles(household.water_heating),
        region,
        household.occupancy,
        period,
    )? + appliance_emissions(
        cooktop_profiles(household.cooktop),
        region,
        household.occupancy,
        period,
    )?;
    let vehicles = vehicle_emissions(&household.vehicles, region, period);
    let other = other_appliance_emissions(region, household.occupancy, period)?;

    Ok(appliances + vehicles + other)
}
