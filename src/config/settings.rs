use anyhow::{Context, Result};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use super::profiles::{apply_profile, default_profile};
use crate::errors::{read_context, write_context};
use crate::scoring::Weights;

pub const ENV_PROFILE: &str = "YTMINER_PROFILE";
pub const ENV_WEIGHT_VPD: &str = "YTMINER_OPP_W_VPD";
pub const ENV_WEIGHT_LIKE: &str = "YTMINER_OPP_W_LIKE";
pub const ENV_WEIGHT_FRESH: &str = "YTMINER_OPP_W_FRESH";
pub const ENV_WEIGHT_SAT: &str = "YTMINER_OPP_W_SAT";
pub const ENV_WEIGHT_SLOPE: &str = "YTMINER_OPP_W_SLOPE";
pub const ENV_RISING_STAR_MULTIPLIER: &str = "YTMINER_RISING_STAR_MULTIPLIER";
pub const ENV_LONG_TAIL_MIN_ENGAGEMENT: &str = "YTMINER_LONG_TAIL_MIN_ENGAGEMENT";
pub const ENV_LONG_TAIL_MAX_FREQ: &str = "YTMINER_LONG_TAIL_MAX_FREQ";

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    pub weights: Weights,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: default_profile().weights,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub rising_star_multiplier: f64,
    pub long_tail_min_engagement: f64,
    pub long_tail_max_freq: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            rising_star_multiplier: 1.5,
            long_tail_min_engagement: 5.0, // percent
            long_tail_max_freq: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub analysis: AnalysisSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then `.env` (if present), then the process environment
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Invalid values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::new();

        if let Some(profile) = read(ENV_PROFILE) {
            apply_profile(&mut config.scoring, &profile);
        }

        let weights = &mut config.scoring.weights;
        override_value(&read, ENV_WEIGHT_VPD, &mut weights.vpd, |v| *v >= 0.0);
        override_value(&read, ENV_WEIGHT_LIKE, &mut weights.like, |v| *v >= 0.0);
        override_value(&read, ENV_WEIGHT_FRESH, &mut weights.fresh, |v| *v >= 0.0);
        override_value(&read, ENV_WEIGHT_SAT, &mut weights.sat, |v| *v >= 0.0);
        override_value(&read, ENV_WEIGHT_SLOPE, &mut weights.slope, |v| *v >= 0.0);

        let analysis = &mut config.analysis;
        override_value(
            &read,
            ENV_RISING_STAR_MULTIPLIER,
            &mut analysis.rising_star_multiplier,
            |v| *v > 0.0,
        );
        override_value(
            &read,
            ENV_LONG_TAIL_MIN_ENGAGEMENT,
            &mut analysis.long_tail_min_engagement,
            |v| *v >= 0.0,
        );
        override_value(
            &read,
            ENV_LONG_TAIL_MAX_FREQ,
            &mut analysis.long_tail_max_freq,
            |v| *v >= 1,
        );

        config
    }

    /// Render the persisted settings as `.env` lines
    pub fn to_env_string(&self) -> String {
        self.env_entries()
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    }

    /// Rewrite the keys this config owns inside an existing `.env` body.
    /// Other lines are kept as they are; owned keys not yet present are appended.
    pub fn merge_env(&self, existing: &str) -> String {
        let entries = self.env_entries();
        let mut written = vec![false; entries.len()];
        let mut merged = String::new();

        for line in existing.lines() {
            match entries.iter().position(|(key, _)| env_key(line) == Some(*key)) {
                Some(index) if written[index] => {}
                Some(index) => {
                    let (key, value) = &entries[index];
                    merged.push_str(&format!("{key}={value}\n"));
                    written[index] = true;
                }
                None => {
                    merged.push_str(line);
                    merged.push('\n');
                }
            }
        }

        for ((key, value), done) in entries.iter().zip(written) {
            if !done {
                merged.push_str(&format!("{key}={value}\n"));
            }
        }
        merged
    }

    pub fn save_env(&self, path: &Path) -> Result<()> {
        let existing = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e).with_context(|| read_context(&path.display().to_string())),
        };

        std::fs::write(path, self.merge_env(&existing))
            .with_context(|| write_context(&path.display().to_string()))?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    fn env_entries(&self) -> [(&'static str, String); 8] {
        let w = &self.scoring.weights;
        let a = &self.analysis;
        [
            (ENV_WEIGHT_VPD, w.vpd.to_string()),
            (ENV_WEIGHT_LIKE, w.like.to_string()),
            (ENV_WEIGHT_FRESH, w.fresh.to_string()),
            (ENV_WEIGHT_SAT, w.sat.to_string()),
            (ENV_WEIGHT_SLOPE, w.slope.to_string()),
            (ENV_RISING_STAR_MULTIPLIER, a.rising_star_multiplier.to_string()),
            (ENV_LONG_TAIL_MIN_ENGAGEMENT, a.long_tail_min_engagement.to_string()),
            (ENV_LONG_TAIL_MAX_FREQ, a.long_tail_max_freq.to_string()),
        ]
    }
}

/// Variable name of a `KEY=value` or `export KEY=value` line
fn env_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let (key, _) = line.split_once('=')?;
    let key = key.trim();
    Some(key.strip_prefix("export ").map(str::trim).unwrap_or(key))
}

fn override_value<T, R, V>(read: &R, key: &str, target: &mut T, valid: V)
where
    T: FromStr,
    R: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let Some(raw) = read(key) else {
        return;
    };

    match raw.parse::<T>() {
        Ok(value) if valid(&value) => *target = value,
        _ => warn!("Ignoring invalid value {:?} for {}", raw, key),
    }
}
