use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{Analyzer, average};
use crate::metrics;

const TOP_CHANNELS: usize = 5;
const FALLBACK_RISING_STAR_MULTIPLIER: f64 = 1.5;
const DOMINANT_SHARE_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub top_channels: Vec<ChannelStats>,
    pub rising_stars: Vec<ChannelStats>,
    /// Percent of all sampled views, keyed by channel name
    pub market_share: BTreeMap<String, f64>,
    pub opportunities: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub channel: String,
    pub channel_id: String,
    pub channel_url: String,
    pub video_count: usize,
    pub total_views: u64,
    pub avg_views: f64,
    pub avg_vpd: f64,
    /// Mean engagement percent across the channel's videos
    pub engagement: f64,
    pub is_rising_star: bool,
}

#[derive(Default)]
struct ChannelTotals {
    stats: ChannelStats,
    vpd_sum: f64,
    engagement_sum: f64,
}

pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}

pub(super) fn analyze(analyzer: &Analyzer) -> CompetitorAnalysis {
    let videos = analyzer.videos;
    if videos.is_empty() {
        return CompetitorAnalysis::default();
    }

    let mut channels: BTreeMap<&str, ChannelTotals> = BTreeMap::new();
    let mut total_views: u64 = 0;
    let mut total_vpd = 0.0;

    for video in videos {
        let vpd = analyzer.vpd(video);
        total_vpd += vpd;
        total_views = total_views.saturating_add(video.views);

        let totals = channels.entry(video.channel.as_str()).or_insert_with(|| ChannelTotals {
            stats: ChannelStats {
                channel: video.channel.clone(),
                channel_id: video.channel_id.clone(),
                channel_url: channel_url(&video.channel_id),
                ..ChannelStats::default()
            },
            ..ChannelTotals::default()
        });
        totals.stats.video_count += 1;
        totals.stats.total_views = totals.stats.total_views.saturating_add(video.views);
        totals.vpd_sum += vpd;
        totals.engagement_sum += metrics::engagement_percent(video.views, video.likes, video.comments);
    }

    let niche_avg_vpd = average(total_vpd, videos.len());
    let multiplier = if analyzer.settings.rising_star_multiplier > 0.0 {
        analyzer.settings.rising_star_multiplier
    } else {
        FALLBACK_RISING_STAR_MULTIPLIER
    };

    let mut all_channels: Vec<ChannelStats> = channels
        .into_values()
        .map(|totals| {
            let mut stats = totals.stats;
            stats.avg_views = average(stats.total_views as f64, stats.video_count);
            stats.avg_vpd = average(totals.vpd_sum, stats.video_count);
            stats.engagement = average(totals.engagement_sum, stats.video_count);
            stats.is_rising_star = stats.avg_vpd > niche_avg_vpd * multiplier;
            stats
        })
        .collect();

    // Channels come out of the map in name order, so stable sorts tie-break by name
    all_channels.sort_by(|a, b| b.total_views.cmp(&a.total_views));

    let mut rising_stars: Vec<ChannelStats> = all_channels
        .iter()
        .filter(|c| c.is_rising_star)
        .cloned()
        .collect();
    rising_stars.sort_by(|a, b| b.avg_vpd.partial_cmp(&a.avg_vpd).unwrap_or(Ordering::Equal));

    let mut top_channels = all_channels;
    top_channels.truncate(TOP_CHANNELS);

    let denominator = (total_views as f64).max(1.0);
    let market_share: BTreeMap<String, f64> = top_channels
        .iter()
        .map(|c| (c.channel.clone(), c.total_views as f64 / denominator * 100.0))
        .collect();

    CompetitorAnalysis {
        opportunities: generate_opportunities(&top_channels, &market_share),
        insights: generate_insights(&top_channels),
        top_channels,
        rising_stars,
        market_share,
    }
}

fn generate_opportunities(channels: &[ChannelStats], market_share: &BTreeMap<String, f64>) -> Vec<String> {
    let mut opportunities = Vec::new();

    if let Some(top) = channels.first() {
        let share = market_share.get(&top.channel).copied().unwrap_or_default();
        opportunities.push(format!(
            "Top channel '{}' has {:.1}% market share - opportunity to compete",
            top.channel, share
        ));
    }

    let combined: f64 = market_share.values().sum();
    if combined < DOMINANT_SHARE_PERCENT {
        opportunities.push(
            "Significant market opportunity - top channels don't dominate completely".to_string(),
        );
    }

    opportunities
}

fn generate_insights(channels: &[ChannelStats]) -> Vec<String> {
    let Some(top) = channels.first() else {
        return Vec::new();
    };

    let avg_engagement = average(channels.iter().map(|c| c.engagement).sum(), channels.len());
    vec![
        format!(
            "Top performing channel: {} with {:.0} average views",
            top.channel, top.avg_views
        ),
        format!("Average engagement rate: {avg_engagement:.2}%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{now, sample, video};
    use super::*;
    use crate::config::AnalysisSettings;

    #[test]
    fn test_channel_aggregation() {
        let videos = sample();
        let settings = AnalysisSettings::default();
        let competitors = Analyzer::new(&videos, &settings, now()).competitors();

        assert_eq!(competitors.top_channels.len(), 2);
        let c1 = &competitors.top_channels[0];
        assert_eq!(c1.channel, "C1");
        assert_eq!(c1.video_count, 2);
        assert_eq!(c1.total_views, 18_000);
        assert_eq!(c1.avg_vpd, 3000.0);
        assert_eq!(c1.channel_url, "https://www.youtube.com/channel/c1");

        assert!((competitors.market_share["C1"] - 18_000.0 / 23_000.0 * 100.0).abs() < 1e-9);
        assert_eq!(
            competitors.insights[0],
            "Top performing channel: C1 with 9000 average views"
        );
    }

    #[test]
    fn test_rising_stars_use_multiplier() {
        let videos = sample();
        // Niche average VPD is 6500 / 3; C1 averages 3000
        let mut settings = AnalysisSettings::default();
        let competitors = Analyzer::new(&videos, &settings, now()).competitors();
        assert!(competitors.rising_stars.is_empty());

        settings.rising_star_multiplier = 1.2;
        let competitors = Analyzer::new(&videos, &settings, now()).competitors();
        assert_eq!(competitors.rising_stars.len(), 1);
        assert_eq!(competitors.rising_stars[0].channel, "C1");
    }

    #[test]
    fn test_non_positive_multiplier_falls_back() {
        let videos = sample();
        let settings = AnalysisSettings {
            rising_star_multiplier: 0.0,
            ..AnalysisSettings::default()
        };
        let competitors = Analyzer::new(&videos, &settings, now()).competitors();

        assert!(competitors.rising_stars.is_empty());
    }

    #[test]
    fn test_top_channels_capped_and_share_opportunity() {
        let videos: Vec<_> = (0..7)
            .map(|i| video(&format!("v{i}"), "clip", &format!("Ch{i}"), 100, 1, 0, 1))
            .collect();
        let settings = AnalysisSettings::default();
        let competitors = Analyzer::new(&videos, &settings, now()).competitors();

        assert_eq!(competitors.top_channels.len(), TOP_CHANNELS);
        // Equal views: ordered by name
        assert_eq!(competitors.top_channels[0].channel, "Ch0");
        assert_eq!(competitors.market_share.len(), TOP_CHANNELS);
        assert_eq!(competitors.opportunities.len(), 2);
    }
}
