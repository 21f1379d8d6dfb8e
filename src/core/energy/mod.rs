pub(crate) mod dispatch;
pub(crate) mod needs;

use crate::input::FuelType;
use indexmap::IndexMap;

/// Energy per fuel in kWh over some period, iterated in insertion order.
pub type FuelDict = IndexMap<FuelType, f64>;

/// The demand groupings rooftop generation is shared across.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MachineCategory {
    Appliances,
    Vehicles,
    OtherAppliances,
}

pub(crate) const MACHINE_CATEGORIES: [MachineCategory; 3] = [
    MachineCategory::Appliances,
    MachineCategory::Vehicles,
    MachineCategory::OtherAppliances,
];

/// A household's total energy demand, split by demand category and fuel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MachineEnergyNeeds {
    pub appliances: FuelDict,
    pub vehicles: FuelDict,
    pub other_appliances: FuelDict,
}

impl MachineEnergyNeeds {
    pub(crate) fn category(&self, category: MachineCategory) -> &FuelDict {
        match category {
            MachineCategory::Appliances => &self.appliances,
            MachineCategory::Vehicles => &self.vehicles,
            MachineCategory::OtherAppliances => &self.other_appliances,
        }
    }

    /// Electricity one category needs, zero when the category runs on other
    /// fuels entirely.
    pub(crate) fn electricity(&self, category: MachineCategory) -> f64 {
        self.category(category)
            .get(&FuelType::Electricity)
            .copied()
            .unwrap_or(0.)
    }
}

/// Where the electricity a household needs actually comes from, and where
/// surplus generation ends up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElectricityConsumption {
    pub consumed_from_solar: f64,
    pub consumed_from_battery: f64,
    pub consumed_from_grid: f64,
    pub exported_to_grid: f64,
}
