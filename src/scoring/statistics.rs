use ndarray::Array1;
use std::collections::HashMap;

use super::types::FeatureVector;

/// Mean and population standard deviation of one feature channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl FeatureStats {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { mean: 0.0, std_dev: 0.0 };
        }

        let array = Array1::from(values.to_vec());
        let mean = array.mean().unwrap_or(0.0);
        let std_dev = array.std(0.0);

        Self { mean, std_dev }
    }

    /// Z-score of `value`; a flat distribution carries no signal and yields 0
    pub fn z_score(&self, value: f64) -> f64 {
        if self.std_dev == 0.0 || !self.std_dev.is_finite() {
            return 0.0;
        }
        (value - self.mean) / self.std_dev
    }
}

/// Cohort statistics for one scoring call, built from scratch every time
#[derive(Debug, Clone)]
pub struct SampleStatistics {
    pub vpd: FeatureStats,
    pub like_rate: FeatureStats,
    pub slope: FeatureStats,
    pub ages: Vec<f64>,
    pub token_frequency: HashMap<String, usize>,
    pub sample_size: usize,
}

impl SampleStatistics {
    pub fn from_features(features: &[FeatureVector]) -> Self {
        let vpd = collect_channel(features, |f| f.vpd);
        let like_rate = collect_channel(features, |f| f.like_rate_per_k);
        let slope = collect_channel(features, |f| f.slope);
        let ages = collect_channel(features, |f| f.age_days as f64);

        Self {
            vpd: FeatureStats::from_values(&vpd),
            like_rate: FeatureStats::from_values(&like_rate),
            slope: FeatureStats::from_values(&slope),
            ages,
            token_frequency: count_tokens(features),
            sample_size: features.len(),
        }
    }

    pub fn token_count(&self, token: &str) -> usize {
        self.token_frequency.get(token).copied().unwrap_or(0)
    }
}

fn collect_channel(features: &[FeatureVector], channel: impl Fn(&FeatureVector) -> f64) -> Vec<f64> {
    features.iter().map(channel).collect()
}

fn count_tokens(features: &[FeatureVector]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for feature in features {
        *counts.entry(feature.primary_token.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_population_std_dev() {
        let stats = FeatureStats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_close(stats.mean, 5.0);
        assert_close(stats.std_dev, 2.0);
        assert_close(stats.z_score(9.0), 2.0);
        assert_close(stats.z_score(3.0), -1.0);
    }

    #[test]
    fn test_flat_distribution_has_zero_z_scores() {
        let stats = FeatureStats::from_values(&[500.0, 500.0, 500.0]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.z_score(500.0), 0.0);
        assert_eq!(stats.z_score(10_000.0), 0.0);
    }

    #[test]
    fn test_empty_channel() {
        let stats = FeatureStats::from_values(&[]);
        assert_eq!(stats, FeatureStats { mean: 0.0, std_dev: 0.0 });
        assert_eq!(stats.z_score(1.0), 0.0);
    }

    #[test]
    fn test_sample_statistics_counts_tokens() {
        let feature = |token: &str, vpd: f64| FeatureVector {
            age_days: 1,
            vpd,
            vpd7: vpd,
            vpd30: vpd,
            slope: 0.0,
            like_rate_per_k: 0.0,
            primary_token: token.to_string(),
        };
        let features = vec![feature("alpha", 1.0), feature("beta", 2.0), feature("alpha", 3.0)];

        let stats = SampleStatistics::from_features(&features);

        assert_eq!(stats.sample_size, 3);
        assert_eq!(stats.token_count("alpha"), 2);
        assert_eq!(stats.token_count("beta"), 1);
        assert_eq!(stats.token_count("gamma"), 0);
        assert_close(stats.vpd.mean, 2.0);
        assert_eq!(stats.ages, vec![1.0, 1.0, 1.0]);
    }
}
