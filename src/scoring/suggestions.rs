use serde::{Serialize, Serializer};
use std::fmt;

use super::rules::RangeOp;
use crate::profile::{BuildingProfile, Ventilation};

/// Shown instead of an empty suggestion list.
pub const PERFORMS_WELL_MESSAGE: &str = "Your house performs very well across all categories!";

/// Daylight below this percentage triggers a suggestion.
const LOW_DAYLIGHT: RangeOp = RangeOp::LessThan(40.0);
/// Transport stops further than this many meters trigger a suggestion.
const FAR_TRANSPORT: RangeOp = RangeOp::GreaterThan(800.0);

/// A static improvement message. Variants are declared in the order they are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suggestion {
    InstallSolar,
    AddRainwaterHarvesting,
    UpgradeVentilation,
    IncreaseDaylight,
    ImproveTransportAccess,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::InstallSolar => {
                "Consider installing a solar PV system to reduce energy use."
            }
            Suggestion::AddRainwaterHarvesting => {
                "Add a rainwater harvesting system for water efficiency."
            }
            Suggestion::UpgradeVentilation => {
                "Mechanical or HRV ventilation can improve indoor comfort."
            }
            Suggestion::IncreaseDaylight => {
                "Increase natural lighting with larger or better-placed windows."
            }
            Suggestion::ImproveTransportAccess => {
                "Consider improving transport accessibility for residents."
            }
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Every suggestion whose condition holds, in fixed order:
/// solar, rainwater, ventilation, daylight, transport.
pub fn suggestions_for(profile: &BuildingProfile) -> Vec<Suggestion> {
    let checks = [
        (!profile.has_solar_pv, Suggestion::InstallSolar),
        (!profile.has_rainwater_harvesting, Suggestion::AddRainwaterHarvesting),
        (profile.ventilation == Ventilation::Natural, Suggestion::UpgradeVentilation),
        (LOW_DAYLIGHT.matches(profile.natural_light_pct), Suggestion::IncreaseDaylight),
        (FAR_TRANSPORT.matches(profile.transport_distance_m), Suggestion::ImproveTransportAccess),
    ];

    checks
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, suggestion)| suggestion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Insulation;

    fn good_profile() -> BuildingProfile {
        BuildingProfile {
            floor_area: 100.0,
            insulation: Insulation::Standard,
            has_solar_pv: true,
            has_rainwater_harvesting: true,
            has_dual_flush_toilet: false,
            has_double_glazing: false,
            ventilation: Ventilation::Mechanical,
            natural_light_pct: 40.0,
            wheelchair_access: false,
            waste_sorting: false,
            transport_distance_m: 800.0,
        }
    }

    #[test]
    fn test_no_suggestions_at_boundaries() {
        // 40% daylight and 800m are both acceptable
        assert!(suggestions_for(&good_profile()).is_empty());
    }

    #[test]
    fn test_all_suggestions_in_order() {
        let mut profile = good_profile();
        profile.has_solar_pv = false;
        profile.has_rainwater_harvesting = false;
        profile.ventilation = Ventilation::Natural;
        profile.natural_light_pct = 39.9;
        profile.transport_distance_m = 800.1;

        assert_eq!(
            suggestions_for(&profile),
            vec![
                Suggestion::InstallSolar,
                Suggestion::AddRainwaterHarvesting,
                Suggestion::UpgradeVentilation,
                Suggestion::IncreaseDaylight,
                Suggestion::ImproveTransportAccess,
            ]
        );
    }

    #[test]
    fn test_subset_keeps_order() {
        let mut profile = good_profile();
        profile.transport_distance_m = 2000.0;
        profile.has_solar_pv = false;
        assert_eq!(
            suggestions_for(&profile),
            vec![Suggestion::InstallSolar, Suggestion::ImproveTransportAccess]
        );

        let mut profile = good_profile();
        profile.natural_light_pct = 10.0;
        profile.ventilation = Ventilation::Natural;
        assert_eq!(
            suggestions_for(&profile),
            vec![Suggestion::UpgradeVentilation, Suggestion::IncreaseDaylight]
        );
    }

    #[test]
    fn test_hrv_does_not_suggest_ventilation() {
        let mut profile = good_profile();
        profile.ventilation = Ventilation::Hrv;
        assert!(suggestions_for(&profile).is_empty());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&Suggestion::AddRainwaterHarvesting).unwrap();
        assert_eq!(
            json,
            "\"Add a rainwater harvesting system for water efficiency.\""
        );
    }
}
