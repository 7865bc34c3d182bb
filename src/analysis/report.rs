use serde::{Deserialize, Serialize};

use super::{Analyzer, CompetitorAnalysis, GrowthPattern, KeywordAnalysis, TemporalAnalysis, TitleAnalysis};
use crate::display::format::{format_number, format_vpd};

const LOW_VELOCITY_VPD: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveReport {
    pub summary: String,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub content_strategy: Vec<String>,
    pub competitive_intel: Vec<String>,
    pub performance_benchmarks: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Everything the report is built from
struct Inputs {
    growth: GrowthPattern,
    titles: TitleAnalysis,
    competitors: CompetitorAnalysis,
    temporal: TemporalAnalysis,
    keywords: KeywordAnalysis,
}

pub(super) fn generate(analyzer: &Analyzer) -> ExecutiveReport {
    let inputs = Inputs {
        growth: analyzer.growth_patterns(),
        titles: analyzer.titles(),
        competitors: analyzer.competitors(),
        temporal: analyzer.temporal(),
        keywords: analyzer.keywords(),
    };

    ExecutiveReport {
        summary: summary(&inputs),
        key_insights: key_insights(&inputs),
        recommendations: recommendations(&inputs),
        content_strategy: content_strategy(&inputs),
        competitive_intel: competitive_intel(&inputs.competitors),
        performance_benchmarks: performance_benchmarks(&inputs),
        next_steps: [
            "Analyze top-performing content patterns",
            "Implement keyword strategy",
            "Optimize posting schedule",
            "Monitor competitor activity",
        ]
        .map(String::from)
        .to_vec(),
    }
}

fn summary(inputs: &Inputs) -> String {
    let growth = &inputs.growth;
    let competitors = &inputs.competitors;

    let mut text = format!(
        "Analysis of {} videos shows Niche Velocity Score of {} VPD with {} average views.",
        growth.total_videos,
        format_vpd(growth.niche_velocity_score),
        format_number(growth.avg_views)
    );
    if let Some(top) = competitors.top_channels.first() {
        let share = competitors.market_share.get(&top.channel).copied().unwrap_or_default();
        text.push_str(&format!(
            " Top channel '{}' leads with {:.1}% market share.",
            top.channel, share
        ));
    }
    if !competitors.rising_stars.is_empty() {
        text.push_str(&format!(
            " {} rising star channel(s) detected with high velocity.",
            competitors.rising_stars.len()
        ));
    }
    text
}

fn key_insights(inputs: &Inputs) -> Vec<String> {
    let mut insights = vec![
        format!("Average views: {}", format_number(inputs.growth.avg_views)),
        format!(
            "Niche Velocity Score: {} VPD",
            format_vpd(inputs.growth.niche_velocity_score)
        ),
    ];

    if let Some(keyword) = inputs.keywords.trending_keywords.first() {
        insights.push(format!(
            "Top trending keyword: '{}' ({} VPD)",
            keyword.keyword,
            format_vpd(keyword.avg_vpd)
        ));
    }
    if !inputs.competitors.rising_stars.is_empty() {
        insights.push(format!(
            "Rising stars detected: {} channels",
            inputs.competitors.rising_stars.len()
        ));
    }
    if let Some(hour) = inputs.temporal.best_hours.first() {
        insights.push(format!("Best posting time: {}:00", hour.hour));
    }

    insights
}

fn recommendations(inputs: &Inputs) -> Vec<String> {
    let mut recommendations = Vec::new();

    if inputs.growth.niche_velocity_score < LOW_VELOCITY_VPD {
        recommendations
            .push("Focus on trending topics and viral content to improve velocity".to_string());
    }
    if let Some(keyword) = inputs.keywords.trending_keywords.first() {
        recommendations.push(format!(
            "Target breakout keyword: '{}' ({} VPD)",
            keyword.keyword,
            format_vpd(keyword.avg_vpd)
        ));
    }
    if let Some(star) = inputs.competitors.rising_stars.first() {
        recommendations.push(format!(
            "Study rising star channel '{}' for momentum strategies",
            star.channel
        ));
    }
    if let Some(hour) = inputs.temporal.best_hours.first() {
        recommendations.push(format!("Post at {}:00 for maximum engagement", hour.hour));
    }
    if let Some(keyword) = inputs.keywords.long_tail_keywords.first() {
        recommendations.push(format!("Target long-tail keyword: '{}'", keyword.keyword));
    }

    recommendations
}

fn content_strategy(inputs: &Inputs) -> Vec<String> {
    let mut strategy = Vec::new();

    if let Some(word) = inputs.titles.common_words.first() {
        strategy.push(format!("Use common words: {}", word.word));
    }
    if let Some(pattern) = inputs.titles.patterns.first() {
        strategy.push(format!("Reuse the {pattern} in titles"));
    }
    if let Some(keyword) = inputs.keywords.trending_keywords.first() {
        strategy.push(format!("Focus on trending keyword: '{}'", keyword.keyword));
    }
    if let Some(day) = inputs.temporal.best_days.first() {
        strategy.push(format!("Schedule releases for {}", day.day));
    }

    strategy
}

fn competitive_intel(competitors: &CompetitorAnalysis) -> Vec<String> {
    let mut intel = Vec::new();

    if let Some(top) = competitors.top_channels.first() {
        intel.push(format!("Top competitor: {} ({})", top.channel, top.channel_url));
    }
    if !competitors.rising_stars.is_empty() {
        intel.push(format!(
            "Rising stars detected: {} channels",
            competitors.rising_stars.len()
        ));
        for (i, star) in competitors.rising_stars.iter().enumerate() {
            intel.push(format!(
                "Rising Star #{}: {} (VPD: {}) - {}",
                i + 1,
                star.channel,
                format_vpd(star.avg_vpd),
                star.channel_url
            ));
        }
    }

    intel
}

fn performance_benchmarks(inputs: &Inputs) -> Vec<String> {
    let mut benchmarks = vec![format!(
        "Your average: {} views",
        format_number(inputs.growth.avg_views)
    )];

    if let Some(top) = inputs.competitors.top_channels.first() {
        benchmarks.push(format!(
            "Top competitor: {} views",
            format_number(top.avg_views)
        ));
    }

    benchmarks
}
