use super::types::{BuildingProfile, Insulation, Ventilation};

/// A partially collected profile, one `Option` per question.
///
/// Command-line flags fill a draft. A draft is either laid over a profile
/// loaded from disk ([`ProfileDraft::apply_to`]) or must stand on its own
/// ([`ProfileDraft::complete`]), in which case the questions without an
/// obvious answer have to be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub floor_area: Option<f64>,
    pub insulation: Option<Insulation>,
    pub has_solar_pv: Option<bool>,
    pub has_rainwater_harvesting: Option<bool>,
    pub has_dual_flush_toilet: Option<bool>,
    pub has_double_glazing: Option<bool>,
    pub ventilation: Option<Ventilation>,
    pub natural_light_pct: Option<f64>,
    pub wheelchair_access: Option<bool>,
    pub waste_sorting: Option<bool>,
    pub transport_distance_m: Option<f64>,
}

impl ProfileDraft {
    /// Override the fields of `base` that this draft sets.
    pub fn apply_to(&self, base: BuildingProfile) -> BuildingProfile {
        BuildingProfile {
            floor_area: self.floor_area.unwrap_or(base.floor_area),
            insulation: self.insulation.unwrap_or(base.insulation),
            has_solar_pv: self.has_solar_pv.unwrap_or(base.has_solar_pv),
            has_rainwater_harvesting: self
                .has_rainwater_harvesting
                .unwrap_or(base.has_rainwater_harvesting),
            has_dual_flush_toilet: self
                .has_dual_flush_toilet
                .unwrap_or(base.has_dual_flush_toilet),
            has_double_glazing: self.has_double_glazing.unwrap_or(base.has_double_glazing),
            ventilation: self.ventilation.unwrap_or(base.ventilation),
            natural_light_pct: self.natural_light_pct.unwrap_or(base.natural_light_pct),
            wheelchair_access: self.wheelchair_access.unwrap_or(base.wheelchair_access),
            waste_sorting: self.waste_sorting.unwrap_or(base.waste_sorting),
            transport_distance_m: self
                .transport_distance_m
                .unwrap_or(base.transport_distance_m),
        }
    }

    /// Turn the draft into a full profile without a base.
    ///
    /// Yes/no answers left unset mean "no" and floor area defaults to 0.
    /// Insulation, ventilation, daylight and transport distance are required;
    /// every missing one is reported.
    pub fn complete(&self) -> Result<BuildingProfile, Vec<String>> {
        let mut missing = Vec::new();

        if self.insulation.is_none() {
            missing.push("insulation: required (none, standard or high-performance)".to_string());
        }
        if self.ventilation.is_none() {
            missing.push("ventilation: required (natural, mechanical or hrv)".to_string());
        }
        if self.natural_light_pct.is_none() {
            missing.push("natural_light_pct: required (percentage 0-100)".to_string());
        }
        if self.transport_distance_m.is_none() {
            missing.push("transport_distance_m: required (meters)".to_string());
        }

        match (
            self.insulation,
            self.ventilation,
            self.natural_light_pct,
            self.transport_distance_m,
        ) {
            (Some(insulation), Some(ventilation), Some(natural_light_pct), Some(transport_distance_m)) => {
                Ok(BuildingProfile {
                    floor_area: self.floor_area.unwrap_or(0.0),
                    insulation,
                    has_solar_pv: self.has_solar_pv.unwrap_or(false),
                    has_rainwater_harvesting: self.has_rainwater_harvesting.unwrap_or(false),
                    has_dual_flush_toilet: self.has_dual_flush_toilet.unwrap_or(false),
                    has_double_glazing: self.has_double_glazing.unwrap_or(false),
                    ventilation,
                    natural_light_pct,
                    wheelchair_access: self.wheelchair_access.unwrap_or(false),
                    waste_sorting: self.waste_sorting.unwrap_or(false),
                    transport_distance_m,
                })
            }
            _ => Err(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_only() -> ProfileDraft {
        ProfileDraft {
            insulation: Some(Insulation::Standard),
            ventilation: Some(Ventilation::Mechanical),
            natural_light_pct: Some(45.0),
            transport_distance_m: Some(500.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_with_required_fields() {
        let profile = required_only().complete().unwrap();
        assert_eq!(profile.insulation, Insulation::Standard);
        assert_eq!(profile.ventilation, Ventilation::Mechanical);
        assert_eq!(profile.natural_light_pct, 45.0);
        assert_eq!(profile.transport_distance_m, 500.0);
        assert_eq!(profile.floor_area, 0.0);
        assert!(!profile.has_solar_pv);
        assert!(!profile.has_rainwater_harvesting);
        assert!(!profile.has_dual_flush_toilet);
        assert!(!profile.has_double_glazing);
        assert!(!profile.wheelchair_access);
        assert!(!profile.waste_sorting);
    }

    #[test]
    fn test_complete_reports_all_missing() {
        let errors = ProfileDraft::default().complete().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("insulation"));
        assert!(errors[1].starts_with("ventilation"));
        assert!(errors[2].starts_with("natural_light_pct"));
        assert!(errors[3].starts_with("transport_distance_m"));
    }

    #[test]
    fn test_complete_reports_single_missing() {
        let mut draft = required_only();
        draft.ventilation = None;
        let errors = draft.complete().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("ventilation"));
    }

    #[test]
    fn test_complete_keeps_set_booleans() {
        let mut draft = required_only();
        draft.has_solar_pv = Some(true);
        draft.waste_sorting = Some(true);
        let profile = draft.complete().unwrap();
        assert!(profile.has_solar_pv);
        assert!(profile.waste_sorting);
        assert!(!profile.wheelchair_access);
    }

    #[test]
    fn test_apply_to_overrides_only_set_fields() {
        let base = BuildingProfile::form_defaults();
        let draft = ProfileDraft {
            has_solar_pv: Some(false),
            transport_distance_m: Some(1200.0),
            ..Default::default()
        };
        let profile = draft.apply_to(base.clone());
        assert!(!profile.has_solar_pv);
        assert_eq!(profile.transport_distance_m, 1200.0);
        // Untouched fields come from the base
        assert_eq!(profile.insulation, base.insulation);
        assert_eq!(profile.natural_light_pct, base.natural_light_pct);
        assert!(profile.has_rainwater_harvesting);
    }

    #[test]
    fn test_empty_draft_leaves_base_unchanged() {
        let base = BuildingProfile::form_defaults();
        assert_eq!(ProfileDraft::default().apply_to(base.clone()), base);
    }
}
