pub mod draft;
pub mod storage;
pub mod types;
pub mod validation;
pub mod wizard;

pub use draft::ProfileDraft;
pub use storage::{default_profile_path, get_config_dir, load_profile, profile_to_yaml, save_profile};
pub use types::{BuildingProfile, Insulation, Ventilation};
pub use validation::validate_profile;
pub use wizard::Questionnaire;
