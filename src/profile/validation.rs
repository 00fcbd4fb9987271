use super::types::BuildingProfile;

/// Validate a building profile before it is scored.
/// Returns all validation errors at once (not just the first).
///
/// The scoring engine does no bounds checking of its own, so anything that
/// gets past this point is scored as-is.
pub fn validate_profile(profile: &BuildingProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !profile.floor_area.is_finite() {
        errors.push(format!(
            "floor_area: must be a number (got {})",
            profile.floor_area
        ));
    } else if profile.floor_area < 0.0 {
        errors.push(format!(
            "floor_area: must be non-negative (got {})",
            profile.floor_area
        ));
    }

    if !profile.natural_light_pct.is_finite() {
        errors.push(format!(
            "natural_light_pct: must be a number (got {})",
            profile.natural_light_pct
        ));
    } else if !(0.0..=100.0).contains(&profile.natural_light_pct) {
        errors.push(format!(
            "natural_light_pct: must be between 0 and 100 (got {})",
            profile.natural_light_pct
        ));
    }

    if !profile.transport_distance_m.is_finite() {
        errors.push(format!(
            "transport_distance_m: must be a number (got {})",
            profile.transport_distance_m
        ));
    } else if profile.transport_distance_m < 0.0 {
        errors.push(format!(
            "transport_distance_m: must be non-negative (got {})",
            profile.transport_distance_m
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
