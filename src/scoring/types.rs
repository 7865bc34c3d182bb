use serde::{Deserialize, Serialize};

/// Contribution of each signal to the opportunity score.
///
/// `sat` is a penalty magnitude: saturation is always subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weights {
    pub vpd: f64,
    pub like: f64,
    pub fresh: f64,
    pub sat: f64,
    pub slope: f64,
}

impl Weights {
    pub const fn new(vpd: f64, like: f64, fresh: f64, sat: f64, slope: f64) -> Self {
        Self {
            vpd,
            like,
            fresh,
            sat,
            slope,
        }
    }
}

/// Raw per-video signals, recomputed on every scoring run
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub age_days: i64,
    pub vpd: f64,
    pub vpd7: f64,
    pub vpd30: f64,
    pub slope: f64,
    pub like_rate_per_k: f64,
    pub primary_token: String,
}

/// A ranked video with the raw values behind its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityItem {
    pub title: String,
    pub channel: String,
    pub url: String,
    pub score: f64,
    pub vpd: f64,
    pub vpd7: f64,
    pub vpd30: f64,
    pub slope: f64,
    pub like_rate: f64,
    pub age_days: i64,
    pub saturation: f64,
    pub reasons: Vec<String>,
}
