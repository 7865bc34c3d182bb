use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Analyzer, average};
use crate::metrics;

const TOP_PERFORMERS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthPattern {
    pub total_videos: usize,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
    /// Mean VPD across the sample
    pub niche_velocity_score: f64,
    pub top_performers: Vec<VideoPerformance>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPerformance {
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub likes: u64,
    pub engagement: f64,
    pub vpd: f64,
    pub url: String,
}

pub(super) fn analyze(analyzer: &Analyzer) -> GrowthPattern {
    let videos = analyzer.videos;
    if videos.is_empty() {
        return GrowthPattern::default();
    }

    let mut performers: Vec<VideoPerformance> = videos
        .iter()
        .map(|video| VideoPerformance {
            title: video.title.clone(),
            channel: video.channel.clone(),
            views: video.views,
            likes: video.likes,
            engagement: metrics::engagement_percent(video.views, video.likes, video.comments),
            vpd: analyzer.vpd(video),
            url: video.url.clone(),
        })
        .collect();

    let count = videos.len();
    let avg_views = average(videos.iter().map(|v| v.views as f64).sum(), count);
    let avg_likes = average(videos.iter().map(|v| v.likes as f64).sum(), count);
    let avg_comments = average(videos.iter().map(|v| v.comments as f64).sum(), count);
    let niche_velocity_score = average(performers.iter().map(|p| p.vpd).sum(), count);

    // Highest velocity first
    performers.sort_by(|a, b| b.vpd.partial_cmp(&a.vpd).unwrap_or(Ordering::Equal));
    performers.truncate(TOP_PERFORMERS);

    GrowthPattern {
        total_videos: count,
        avg_views,
        avg_likes,
        avg_comments,
        niche_velocity_score,
        top_performers: performers,
        insights: generate_insights(avg_views, avg_likes, niche_velocity_score),
    }
}

fn generate_insights(avg_views: f64, avg_likes: f64, niche_velocity: f64) -> Vec<String> {
    let views = if avg_views > 1_000_000.0 {
        "High-performing content with over 1M average views"
    } else if avg_views > 100_000.0 {
        "Good performance with 100K+ average views"
    } else {
        "Room for improvement in view counts"
    };

    let velocity = if niche_velocity > 10_000.0 {
        "Extremely high niche velocity - viral content potential"
    } else if niche_velocity > 1_000.0 {
        "Good niche velocity - positive momentum detected"
    } else if niche_velocity > 100.0 {
        "Moderate velocity - growth opportunity"
    } else {
        "Low velocity - needs more push to gain traction"
    };

    let engagement = avg_likes / avg_views.max(1.0) * 100.0;
    let engagement = if engagement > 5.0 {
        "Excellent engagement rate"
    } else if engagement > 2.0 {
        "Good engagement rate"
    } else {
        "Low engagement - consider content improvements"
    };

    vec![views.to_string(), velocity.to_string(), engagement.to_string()]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{now, sample};
    use super::*;
    use crate::config::AnalysisSettings;

    #[test]
    fn test_growth_patterns() {
        let videos = sample();
        let settings = AnalysisSettings::default();
        let growth = Analyzer::new(&videos, &settings, now()).growth_patterns();

        assert_eq!(growth.total_videos, 3);
        // VPDs: 2000, 500, 4000
        assert!((growth.niche_velocity_score - 6500.0 / 3.0).abs() < 1e-9);
        assert!((growth.avg_views - 23_000.0 / 3.0).abs() < 1e-9);
        assert_eq!(growth.top_performers[0].title, "Alpha 2024 guide");
        assert_eq!(growth.top_performers[0].vpd, 4000.0);
        assert_eq!(growth.insights[1], "Good niche velocity - positive momentum detected");
    }

    #[test]
    fn test_top_performers_are_capped() {
        let videos: Vec<_> = (0..8)
            .map(|i| super::super::fixtures::video(&format!("v{i}"), "clip", "C", 100 * (i + 1), 1, 0, 1))
            .collect();
        let settings = AnalysisSettings::default();
        let growth = Analyzer::new(&videos, &settings, now()).growth_patterns();

        assert_eq!(growth.top_performers.len(), TOP_PERFORMERS);
        assert_eq!(growth.top_performers[0].views, 800);
    }
}
