use super::{FuelDict, MachineEnergyNeeds, MACHINE_CATEGORIES};
use crate::core::reference::machines::{
    cooktop_profiles, other_machines_kwh_per_day, space_heating_profiles, vehicle_profiles,
    water_heating_profiles, MachineProfile, VEHICLE_AVG_KMS_PER_WEEK,
};
use crate::core::units::{scale_daily_to_period, scale_energy_by_occupancy};
use crate::errors::DataIntegrityError;
use crate::input::{FuelType, Household, Period, Region, Vehicle};
use strum::IntoEnumIterator;

/// Everything the household draws over a period, split by demand category
/// and fuel.
pub(crate) fn total_energy_needs(
    household: &Household,
    period: Period,
    region: Region,
) -> Result<MachineEnergyNeeds, DataIntegrityError> {
    Ok(MachineEnergyNeeds {
        appliances: total_appliance_energy(household, period, region)?,
        vehicles: vehicle_energy(&household.vehicles, region, period),
        other_appliances: other_appliances_energy(region, household.occupancy, period)?,
    })
}

fn energy_per_day(
    profiles: &[MachineProfile],
    region: Region,
    occupancy: Option<u32>,
) -> Result<FuelDict, DataIntegrityError> {
    let mut energy = FuelDict::default();
    for profile in profiles {
        energy.insert(
            profile.fuel_type,
            scale_energy_by_occupancy(profile.kwh_per_day.get(region), occupancy)?,
        );
    }
    Ok(energy)
}

fn energy_per_period(
    profiles: &[MachineProfile],
    region: Region,
    occupancy: Option<u32>,
    period: Period,
) -> Result<FuelDict, DataIntegrityError> {
    let mut energy = energy_per_day(profiles, region, occupancy)?;
    for value in energy.values_mut() {
        *value = scale_daily_to_period(*value, period);
    }
    Ok(energy)
}

/// Space heating, water heating and cooking demand combined, keyed by every
/// purchasable fuel so downstream totals see explicit zeroes.
fn total_appliance_energy(
    household: &Household,
    period: Period,
    region: Region,
) -> Result<FuelDict, DataIntegrityError> {
    let space_heating_energy = energy_per_period(
        space_heating_profiles(household.space_heating),
        region,
        household.occupancy,
        period,
    )?;
    let water_heating_energy = energy_per_period(
        water_heating_profiles(household.water_heating),
        region,
        household.occupancy,
        period,
    )?;
    let cooktop_energy = energy_per_period(
        cooktop_profiles(household.cooktop),
        region,
        household.occupancy,
        period,
    )?;

    let mut energy_needs = FuelDict::default();
    for fuel in FuelType::iter() {
        if matches!(fuel, FuelType::Solar | FuelType::None) {
            continue;
        }
        let energy = space_heating_energy.get(&fuel).copied().unwrap_or(0.)
            + water_heating_energy.get(&fuel).copied().unwrap_or(0.)
            + cooktop_energy.get(&fuel).copied().unwrap_or(0.);
        energy_needs.insert(fuel, energy);
    }
    Ok(energy_needs)
}

/// Vehicle demand weighted by how far each vehicle drives relative to the
/// regional average. Occupancy does not apply to driving.
pub(crate) fn vehicle_energy(vehicles: &[Vehicle], region: Region, period: Period) -> FuelDict {
    let mut total_energy = FuelDict::default();
    for vehicle in vehicles {
        let weighting_factor =
            vehicle.kms_per_week.unwrap_or(0.) / VEHICLE_AVG_KMS_PER_WEEK.get(region);
        for profile in vehicle_profiles(vehicle.fuel_type) {
            let weighted_energy = profile.kwh_per_day.get(region) * weighting_factor;
            *total_energy.entry(profile.fuel_type).or_insert(0.) +=
                scale_daily_to_period(weighted_energy, period);
        }
    }
    total_energy
}

fn other_appliances_energy(
    region: Region,
    occupancy: Option<u32>,
    period: Period,
) -> Result<FuelDict, DataIntegrityError> {
    let daily = scale_energy_by_occupancy(other_machines_kwh_per_day(region), occupancy)?;
    Ok(FuelDict::from_iter([(
        FuelType::Electricity,
        scale_daily_to_period(daily, period),
    )]))
}

/// Collapses every non-electric draw across the categories into one dict,
/// keeping the order fuels were first seen in.
pub(crate) fn other_energy_consumption(energy_needs: &MachineEnergyNeeds) -> FuelDict {
    let mut other_energy = FuelDict::default();
    for category in MACHINE_CATEGORIES {
        for (&fuel, &energy) in energy_needs.category(category) {
            if fuel == FuelType::Electricity {
                continue;
            }
            *other_energy.entry(fuel).or_insert(0.) += energy;
        }
    }
    other_energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::household::electrify_household;
    use crate::input::{SpaceHeating, VehicleFuelType};
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn household() -> Household {
        Household::default_for(Region::NewSouthWales)
    }

    #[rstest]
    fn should_calc_energy_needs_for_default_household(household: Household) {
        let needs = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales).unwrap();

        let appliance_fuels = needs.appliances.keys().copied().collect_vec();
        assert_eq!(
            appliance_fuels,
            vec![
                FuelType::Electricity,
                FuelType::NaturalGas,
                FuelType::Lpg,
                FuelType::Wood,
                FuelType::Petrol,
                FuelType::Diesel
            ]
        );
        assert_relative_eq!(needs.appliances[&FuelType::Electricity], 2897.053425);
        assert_relative_eq!(needs.appliances[&FuelType::NaturalGas], 726.48225);
        assert_eq!(needs.appliances[&FuelType::Wood], 0.);

        let vehicle_fuels = needs.vehicles.keys().copied().collect_vec();
        assert_eq!(vehicle_fuels, vec![FuelType::Petrol]);
        assert_relative_eq!(needs.vehicles[&FuelType::Petrol], 21159.70797158642);

        assert_relative_eq!(needs.other_appliances[&FuelType::Electricity], 3119.60025);
    }

    #[rstest]
    fn should_calc_energy_needs_for_electrified_household(household: Household) {
        let electrified = electrify_household(&household);
        let needs =
            total_energy_needs(&electrified, Period::Yearly, Region::NewSouthWales).unwrap();

        assert_relative_eq!(needs.appliances[&FuelType::Electricity], 3179.756925);
        assert_eq!(needs.appliances[&FuelType::NaturalGas], 0.);
        assert_relative_eq!(needs.vehicles[&FuelType::Electricity], 5419.652722967639);
        assert_relative_eq!(needs.other_appliances[&FuelType::Electricity], 3119.60025);
    }

    #[test]
    fn should_split_hybrid_energy_between_petrol_and_electricity() {
        let vehicle = Vehicle {
            fuel_type: VehicleFuelType::Hybrid,
            kms_per_week: Some(150.),
            switch_to_ev: None,
        };
        let energy = vehicle_energy(&[vehicle], Region::Victoria, Period::Weekly);

        let fuels = energy.keys().copied().collect_vec();
        assert_eq!(fuels, vec![FuelType::Petrol, FuelType::Electricity]);
        assert_relative_eq!(energy[&FuelType::Petrol], 99.19736842105263);
        assert_relative_eq!(energy[&FuelType::Electricity], 10.894736842105262);
    }

    #[test]
    fn should_treat_missing_kms_as_zero_driving() {
        let vehicle = Vehicle {
            fuel_type: VehicleFuelType::Electric,
            kms_per_week: None,
            switch_to_ev: None,
        };
        let energy = vehicle_energy(&[vehicle], Region::Tasmania, Period::Yearly);

        assert_eq!(energy[&FuelType::Electricity], 0.);
    }

    #[rstest]
    fn should_skip_space_heating_when_household_has_none(mut household: Household) {
        household.space_heating = SpaceHeating::None;
        let needs = total_energy_needs(&household, Period::Daily, Region::NewSouthWales).unwrap();

        let gas_cooktop = needs.appliances[&FuelType::NaturalGas];
        assert_relative_eq!(gas_cooktop, 2.21 * 0.9);
    }

    #[rstest]
    fn should_report_unvalidated_occupancy(mut household: Household) {
        household.occupancy = Some(0);

        let result = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales);

        assert_eq!(result, Err(DataIntegrityError::OccupancyNotValidated));
    }

    #[rstest]
    fn should_collect_non_electric_fuels_in_first_seen_order(household: Household) {
        let needs = total_energy_needs(&household, Period::Yearly, Region::NewSouthWales).unwrap();
        let other = other_energy_consumption(&needs);

        let fuels = other.keys().copied().collect_vec();
        assert_eq!(
            fuels,
            vec![
                FuelType::NaturalGas,
                FuelType::Lpg,
                FuelType::Wood,
                FuelType::Petrol,
                FuelType::Diesel
            ]
        );
        assert_relative_eq!(other[&FuelType::NaturalGas], 726.48225);
        assert_relative_eq!(other[&FuelType::Petrol], 21159.70797158642);
    }
}
