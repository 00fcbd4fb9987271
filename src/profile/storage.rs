use super::types::BuildingProfile;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/house-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("house-score"))
}

/// Get the default profile path (~/.config/house-score/profile.yaml)
pub fn default_profile_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("profile.yaml"))
}

/// Load a building profile from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The profile file does not exist
/// - The profile file cannot be read
/// - The YAML cannot be parsed, names an unknown field, or misses a required one
pub fn load_profile(path: &Path) -> Result<BuildingProfile> {
    if !path.exists() {
        anyhow::bail!("Profile file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file at {}", path.display()))?;

    let profile: BuildingProfile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse profile: invalid YAML in {}", path.display()))?;

    Ok(profile)
}

/// Render a profile as YAML
pub fn profile_to_yaml(profile: &BuildingProfile) -> Result<String> {
    serde_saphyr::to_string(profile).context("Failed to serialize building profile")
}

/// Save a building profile to a YAML file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_profile(path: &Path, profile: &BuildingProfile) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let yaml = profile_to_yaml(profile)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write profile to {}", path.display()))?;
    file.commit().context("Failed to save profile")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Insulation, Ventilation};
    use std::env;

    #[test]
    fn test_default_profile_path_under_config_dir() {
        if let Ok(path) = default_profile_path() {
            assert!(path.ends_with(".config/house-score/profile.yaml"));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp_path = env::temp_dir().join("house_score_test_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_profile(&temp_path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_path = env::temp_dir().join("house_score_test_invalid.yaml");
        fs::write(&temp_path, "insulation: [not, an, enum]\n").unwrap();

        let err = load_profile(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse profile"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = env::temp_dir().join("house_score_test_roundtrip");
        let temp_path = dir.join("profile.yaml");
        let _ = fs::remove_dir_all(&dir);

        let mut profile = BuildingProfile::form_defaults();
        profile.floor_area = 142.5;
        profile.insulation = Insulation::Standard;
        profile.ventilation = Ventilation::Mechanical;
        profile.has_solar_pv = false;
        profile.natural_light_pct = 37.5;
        profile.transport_distance_m = 640.0;

        // Parent directory is created on save
        save_profile(&temp_path, &profile).unwrap();
        let loaded = load_profile(&temp_path).unwrap();
        assert_eq!(loaded, profile);

        let _ = fs::remove_dir_all(&dir);
    }
}
