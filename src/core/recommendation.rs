use crate::core::household::{
    electrify_cooktop, electrify_space_heating, electrify_vehicle, electrify_water_heating,
    should_electrify, Installable,
};
use crate::input::{Household, Vehicle, VehicleFuelType};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    SpaceHeating,
    WaterHeating,
    Cooking,
    Vehicle,
    Solar,
    Battery,
    FullyElectrified,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: RecommendedAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

fn next_step_url(action: RecommendedAction) -> Option<&'static str> {
    match action {
        RecommendedAction::SpaceHeating => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-space-heating")
        }
        RecommendedAction::WaterHeating => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-water-heating")
        }
        RecommendedAction::Cooking => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-cooktops")
        }
        RecommendedAction::Vehicle => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-electric-vehicles")
        }
        RecommendedAction::Solar => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-solar")
        }
        RecommendedAction::Battery => {
            Some("https://www.rewiringaustralia.org/report/factsheet-for-home-batteries")
        }
        RecommendedAction::FullyElectrified => None,
    }
}

fn ev_count(vehicles: &[Vehicle]) -> usize {
    vehicles
        .iter()
        .filter(|vehicle| vehicle.fuel_type == VehicleFuelType::Electric)
        .count()
}

fn vehicles_to_electrify(vehicles: &[Vehicle]) -> usize {
    vehicles
        .iter()
        .filter(|vehicle| electrify_vehicle(vehicle).fuel_type != vehicle.fuel_type)
        .count()
}

/// Picks the single next step with the best payoff for this household.
/// Rooftop solar comes first, then a first EV, then swapping out fossil
/// appliances, with a battery and any further EVs trailing.
pub(crate) fn recommend_next_action(household: &Household) -> Recommendation {
    let vehicles = &household.vehicles;

    let action = if household.solar.should_install() {
        RecommendedAction::Solar
    } else if vehicles_to_electrify(vehicles) > 0 && ev_count(vehicles) == 0 {
        RecommendedAction::Vehicle
    } else if should_electrify(household.space_heating, electrify_space_heating) {
        RecommendedAction::SpaceHeating
    } else if should_electrify(household.water_heating, electrify_water_heating) {
        RecommendedAction::WaterHeating
    } else if should_electrify(household.cooktop, electrify_cooktop) {
        RecommendedAction::Cooking
    } else if household.battery.should_install() {
        RecommendedAction::Battery
    } else if vehicles_to_electrify(vehicles) > 0 {
        RecommendedAction::Vehicle
    } else {
        RecommendedAction::FullyElectrified
    };

    Recommendation {
        action,
        url: next_step_url(action),
    }
}
