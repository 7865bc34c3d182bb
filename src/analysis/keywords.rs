use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{Analyzer, average};
use crate::metrics;
use crate::text;

const TOP_KEYWORDS: usize = 10;
const FALLBACK_LONG_TAIL_MAX_FREQ: usize = 2;
const FALLBACK_LONG_TAIL_MIN_ENGAGEMENT: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Highest average VPD first
    pub trending_keywords: Vec<KeywordStats>,
    /// Most frequent first
    pub core_keywords: Vec<KeywordStats>,
    pub long_tail_keywords: Vec<KeywordStats>,
    pub seo_opportunities: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub keyword: String,
    pub frequency: usize,
    pub avg_views: f64,
    pub avg_vpd: f64,
    pub engagement: f64,
}

pub(super) fn analyze(analyzer: &Analyzer) -> KeywordAnalysis {
    let videos = analyzer.videos;
    if videos.is_empty() {
        return KeywordAnalysis::default();
    }

    // Running sums per keyword; divided by frequency below
    let mut totals: BTreeMap<String, KeywordStats> = BTreeMap::new();
    for video in videos {
        let vpd = analyzer.vpd(video);
        let engagement = metrics::engagement_percent(video.views, video.likes, video.comments);

        for token in text::tokenize(&video.title) {
            let stats = totals.entry(token).or_default();
            stats.frequency += 1;
            stats.avg_views += video.views as f64;
            stats.avg_vpd += vpd;
            stats.engagement += engagement;
        }
    }

    let keywords: Vec<KeywordStats> = totals
        .into_iter()
        .map(|(keyword, sums)| KeywordStats {
            keyword,
            frequency: sums.frequency,
            avg_views: average(sums.avg_views, sums.frequency),
            avg_vpd: average(sums.avg_vpd, sums.frequency),
            engagement: average(sums.engagement, sums.frequency),
        })
        .collect();
    let unique = keywords.len();

    // `keywords` is in keyword order, so the stable sorts below tie-break alphabetically
    let mut core_keywords = keywords.clone();
    core_keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    core_keywords.truncate(TOP_KEYWORDS);

    let mut trending_keywords = keywords.clone();
    trending_keywords.sort_by(|a, b| b.avg_vpd.partial_cmp(&a.avg_vpd).unwrap_or(Ordering::Equal));
    trending_keywords.truncate(TOP_KEYWORDS);

    let settings = analyzer.settings;
    let max_freq = if settings.long_tail_max_freq >= 1 {
        settings.long_tail_max_freq
    } else {
        FALLBACK_LONG_TAIL_MAX_FREQ
    };
    let min_engagement = if settings.long_tail_min_engagement >= 0.0 {
        settings.long_tail_min_engagement
    } else {
        FALLBACK_LONG_TAIL_MIN_ENGAGEMENT
    };

    let mut long_tail_keywords: Vec<KeywordStats> = keywords
        .into_iter()
        .filter(|k| k.frequency <= max_freq && k.engagement > min_engagement)
        .collect();
    long_tail_keywords.sort_by(|a, b| b.engagement.partial_cmp(&a.engagement).unwrap_or(Ordering::Equal));

    KeywordAnalysis {
        seo_opportunities: generate_seo_opportunities(&core_keywords, &long_tail_keywords),
        insights: vec![
            format!("Analyzed {unique} unique keywords"),
            format!("Found {} long-tail opportunities", long_tail_keywords.len()),
        ],
        trending_keywords,
        core_keywords,
        long_tail_keywords,
    }
}

fn generate_seo_opportunities(core: &[KeywordStats], long_tail: &[KeywordStats]) -> Vec<String> {
    let mut opportunities = Vec::new();

    if let Some(top) = core.first() {
        opportunities.push(format!(
            "High-volume keyword: '{}' ({} mentions)",
            top.keyword, top.frequency
        ));
    }
    if let Some(top) = long_tail.first() {
        opportunities.push(format!(
            "High-engagement long-tail keyword: '{}' ({:.2}% engagement)",
            top.keyword, top.engagement
        ));
    }

    opportunities
}
