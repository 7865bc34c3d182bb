use super::settings::ScoringSettings;
use crate::scoring::Weights;

pub const DEFAULT_PROFILE: &str = "balanced";
pub const CUSTOM_PROFILE: &str = "custom";

/// Named preset of opportunity weights
#[derive(Debug, Clone, PartialEq)]
pub struct WeightProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weights: Weights,
}

static PROFILES: [WeightProfile; 4] = [
    WeightProfile {
        key: "exploration",
        name: "Exploration",
        description: "Discover new niches and emerging trends",
        weights: Weights::new(0.30, 0.20, 0.35, 0.10, 0.25),
    },
    WeightProfile {
        key: "evergreen",
        name: "Evergreen",
        description: "Focus on timeless, high-quality content",
        weights: Weights::new(0.25, 0.40, 0.10, 0.20, 0.05),
    },
    WeightProfile {
        key: "trending",
        name: "Trending",
        description: "Catch viral content and momentum",
        weights: Weights::new(0.50, 0.15, 0.20, 0.05, 0.30),
    },
    WeightProfile {
        key: DEFAULT_PROFILE,
        name: "Balanced",
        description: "Default balanced approach",
        weights: Weights::new(0.45, 0.25, 0.20, 0.30, 0.15),
    },
];

pub fn list_profiles() -> &'static [WeightProfile] {
    &PROFILES
}

/// Profile by key (case-insensitive), falling back to `balanced`
pub fn get_profile(name: &str) -> &'static WeightProfile {
    find_profile(name).unwrap_or_else(default_profile)
}

pub fn find_profile(name: &str) -> Option<&'static WeightProfile> {
    let name = name.trim();
    PROFILES.iter().find(|p| p.key.eq_ignore_ascii_case(name))
}

pub fn default_profile() -> &'static WeightProfile {
    &PROFILES[PROFILES.len() - 1]
}

/// Copy the named profile's weights into `settings`
pub fn apply_profile(settings: &mut ScoringSettings, name: &str) {
    settings.weights = get_profile(name).weights;
}

/// Key of the profile matching all five weights exactly, or `custom`
pub fn active_profile_name(settings: &ScoringSettings) -> &'static str {
    PROFILES
        .iter()
        .find(|p| p.weights == settings.weights)
        .map(|p| p.key)
        .unwrap_or(CUSTOM_PROFILE)
}
