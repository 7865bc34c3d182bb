pub mod profiles;
pub mod settings;

pub use profiles::{
    WeightProfile, active_profile_name, apply_profile, get_profile, list_profiles,
};
pub use settings::{AnalysisSettings, AppConfig, ScoringSettings};
