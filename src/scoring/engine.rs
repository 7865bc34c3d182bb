use chrono::{DateTime, Utc};
use log::debug;
use std::cmp::Ordering;

use super::features::extract_features;
use super::statistics::SampleStatistics;
use super::types::{FeatureVector, OpportunityItem, Weights};
use crate::display::format::format_vpd;
use crate::domain::Video;
use crate::metrics;

pub const MAX_OPPORTUNITIES: usize = 20;

/// Ranks videos by opportunity score.
///
/// Pure and deterministic for a given `(videos, weights, now)`. Features are
/// standardized against this sample only. Equal scores keep input order.
pub fn compute(videos: &[Video], weights: &Weights, now: DateTime<Utc>) -> Vec<OpportunityItem> {
    if videos.is_empty() {
        return Vec::new();
    }

    // 1. Raw per-video features
    let features: Vec<FeatureVector> = videos.iter().map(|v| extract_features(v, now)).collect();

    // 2. Cohort statistics over the whole sample
    let stats = SampleStatistics::from_features(&features);
    debug!(
        "Scoring {} videos (vpd mean {:.2}, sd {:.2}; {} distinct primary tokens)",
        stats.sample_size,
        stats.vpd.mean,
        stats.vpd.std_dev,
        stats.token_frequency.len()
    );

    // 3. Standardize, combine and explain
    let mut items: Vec<OpportunityItem> = videos
        .iter()
        .zip(&features)
        .map(|(video, feature)| build_item(video, feature, &stats, weights))
        .collect();

    // 4. Rank (stable) and cap
    items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    items.truncate(MAX_OPPORTUNITIES);
    items
}

fn build_item(
    video: &Video,
    feature: &FeatureVector,
    stats: &SampleStatistics,
    weights: &Weights,
) -> OpportunityItem {
    let freshness = metrics::freshness_from_ages(&stats.ages, feature.age_days);
    let saturation = metrics::normalize_saturation(
        stats.token_count(&feature.primary_token),
        stats.sample_size,
    );
    let score = combine(feature, stats, weights, freshness, saturation);

    OpportunityItem {
        title: video.title.clone(),
        channel: video.channel.clone(),
        url: video.url.clone(),
        score,
        vpd: feature.vpd,
        vpd7: feature.vpd7,
        vpd30: feature.vpd30,
        slope: feature.slope,
        like_rate: feature.like_rate_per_k,
        age_days: feature.age_days,
        saturation,
        reasons: build_reasons(feature, saturation),
    }
}

fn combine(
    feature: &FeatureVector,
    stats: &SampleStatistics,
    weights: &Weights,
    freshness: f64,
    saturation: f64,
) -> f64 {
    weights.vpd * stats.vpd.z_score(feature.vpd)
        + weights.like * stats.like_rate.z_score(feature.like_rate_per_k)
        + weights.fresh * freshness
        - weights.sat.abs() * saturation
        + weights.slope * stats.slope.z_score(feature.slope)
}

fn build_reasons(feature: &FeatureVector, saturation: f64) -> Vec<String> {
    vec![
        format!("VPD={}", format_vpd(feature.vpd)),
        format!("VPD7={}", format_vpd(feature.vpd7)),
        format!("VPD30={}", format_vpd(feature.vpd30)),
        format!("Slope={:.2}", feature.slope),
        format!("LikeRate={:.2}/1k", feature.like_rate_per_k),
        format!("Age={}d", feature.age_days),
        format!("Saturation={:.2}", saturation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn video(title: &str, views: u64, likes: u64, age_days: i64) -> Video {
        Video {
            id: title.to_lowercase(),
            title: title.to_string(),
            channel: format!("{title} channel"),
            channel_id: title.to_lowercase(),
            published_at: now() - Duration::days(age_days),
            views,
            likes,
            comments: 0,
            duration: None,
            url: format!("http://x/{}", title.to_lowercase()),
            description: None,
        }
    }

    fn titles(items: &[OpportunityItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn scenario() -> Vec<Video> {
        vec![
            video("alpha", 10_000, 200, 5),
            video("beta", 5_000, 150, 10),
            video("gamma", 8_000, 80, 2),
        ]
    }

    fn only(f: impl FnOnce(&mut Weights)) -> Weights {
        let mut weights = Weights::default();
        f(&mut weights);
        weights
    }

    #[test]
    fn test_empty_sample_yields_empty_ranking() {
        assert!(compute(&[], &Weights::new(1.0, 1.0, 1.0, 1.0, 1.0), now()).is_empty());
    }

    #[test]
    fn test_vpd_only_ranking() {
        let items = compute(&scenario(), &only(|w| w.vpd = 1.0), now());
        assert_eq!(titles(&items), vec!["gamma", "alpha", "beta"]);
        assert_eq!(items[0].vpd, 4000.0);
        assert_eq!(items[1].vpd, 2000.0);
        assert_eq!(items[2].vpd, 500.0);
    }

    #[test]
    fn test_like_rate_only_ranking() {
        let items = compute(&scenario(), &only(|w| w.like = 1.0), now());
        assert_eq!(titles(&items), vec!["beta", "alpha", "gamma"]);
        assert_eq!(items[0].like_rate, 30.0);
    }

    #[test]
    fn test_freshness_only_ranking() {
        let items = compute(&scenario(), &only(|w| w.fresh = 1.0), now());
        assert_eq!(titles(&items), vec!["gamma", "alpha", "beta"]);
        assert_eq!(items[0].score, 1.0);
        assert_eq!(items[2].score, 0.0);
    }

    #[test]
    fn test_saturation_only_prefers_rare_topics() {
        let videos = vec![
            video("alpha", 10_000, 200, 5),
            video("beta", 5_000, 150, 10),
            video("alpha guide", 8_000, 80, 2),
        ];
        let items = compute(&videos, &only(|w| w.sat = 1.0), now());
        assert_eq!(items[0].title, "beta");
        assert!((items[0].saturation - 1.0 / 3.0).abs() < 1e-12);
        assert!((items[1].saturation - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_saturation_weight_still_penalizes() {
        let videos = vec![
            video("alpha", 10_000, 200, 5),
            video("beta", 5_000, 150, 10),
            video("alpha guide", 8_000, 80, 2),
        ];
        let items = compute(&videos, &only(|w| w.sat = -1.0), now());
        assert_eq!(items[0].title, "beta");
        assert!(items.iter().all(|i| i.score <= 0.0));
    }

    #[test]
    fn test_slope_only_prefers_accelerating_videos() {
        // 40-day-old video: vpd7 far above vpd30; 3-day-old video: windows agree
        let videos = vec![video("steady", 9_000, 0, 3), video("surging", 40_000, 0, 40)];
        let items = compute(&videos, &only(|w| w.slope = 1.0), now());
        assert_eq!(items[0].title, "surging");
        assert!(items[0].slope > 0.0);
        assert_eq!(items[1].slope, 0.0);
    }

    #[test]
    fn test_identical_vpd_contributes_nothing() {
        let videos = vec![
            video("alpha", 1_000, 10, 10),
            video("beta", 1_000, 20, 10),
            video("gamma", 1_000, 30, 10),
        ];
        let items = compute(&videos, &only(|w| w.vpd = 1.0), now());
        assert!(items.iter().all(|i| i.score == 0.0));
        assert_eq!(titles(&items), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_zero_view_and_empty_title_records_degrade_gracefully() {
        let videos = vec![video("", 0, 0, 0), video("!!!", 0, 5, 0), video("real topic", 100, 1, 3)];
        let items = compute(&videos, &Weights::new(0.45, 0.25, 0.2, 0.3, 0.15), now());

        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.score.is_finite()));
        let empty = items.iter().find(|i| i.title.is_empty()).unwrap();
        assert_eq!(empty.like_rate, 0.0);
        assert_eq!(empty.vpd, 0.0);
        // both untokenizable titles share the sentinel bucket
        assert!((empty.saturation - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_is_capped() {
        let videos: Vec<Video> = (0..35)
            .map(|i| video(&format!("topic{i:02}"), 1_000 * (i + 1), 10, 5))
            .collect();
        let items = compute(&videos, &only(|w| w.vpd = 1.0), now());

        assert_eq!(items.len(), MAX_OPPORTUNITIES);
        assert_eq!(items[0].title, "topic34");
        assert!(items.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let weights = Weights::new(0.45, 0.25, 0.2, 0.3, 0.15);
        let first = compute(&scenario(), &weights, now());
        let second = compute(&scenario(), &weights, now());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_reasons_describe_raw_values() {
        let items = compute(&scenario(), &only(|w| w.vpd = 1.0), now());
        assert_eq!(
            items[0].reasons,
            vec![
                "VPD=4.0K",
                "VPD7=4.0K",
                "VPD30=4.0K",
                "Slope=0.00",
                "LikeRate=10.00/1k",
                "Age=2d",
                "Saturation=0.33",
            ]
        );
    }
}
