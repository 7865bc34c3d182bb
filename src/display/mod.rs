//! Terminal rendering. Every renderer returns the text instead of printing it.

pub mod format;

use colored::Colorize;

use crate::analysis::{
    CompetitorAnalysis, ExecutiveReport, GrowthPattern, KeywordAnalysis, KeywordStats,
    TemporalAnalysis, TitleAnalysis,
};
use crate::config::WeightProfile;
use crate::scoring::OpportunityItem;
use format::{format_engagement, format_number, format_vpd, truncate};

const TITLE_WIDTH: usize = 48;
const REASONS_WIDTH: usize = 60;
const RULE_WIDTH: usize = 120;

/// Collects the lines of one rendered section
#[derive(Default)]
struct Section {
    lines: Vec<String>,
}

impl Section {
    fn new(title: &str) -> Self {
        let mut section = Self::default();
        section.line(title.bold().cyan().to_string());
        section.blank();
        section
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn header(&mut self, text: &str) {
        self.line(text.bold().to_string());
    }

    fn bullets(&mut self, header: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.header(header);
        for item in items {
            self.line(format!("• {item}"));
        }
        self.blank();
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

pub fn render_opportunities(items: &[OpportunityItem]) -> String {
    if items.is_empty() {
        return format!("{}\n", "No opportunity candidates found".yellow());
    }

    let mut section = Section::new("Opportunity Score (Top Candidates)");
    section.line(format!(
        "{:<6}  {:<48}  {:<8}  {:<8}  {:<6}  {:<10}  {}",
        "Rank", "Title", "Score", "VPD", "Age", "Like/1k", "Why"
    ));
    section.line("-".repeat(RULE_WIDTH));

    for (i, item) in items.iter().enumerate() {
        let rank = format!("#{}", i + 1);
        section.line(format!(
            "{:<6}  {:<48}  {:>8.2}  {:>8}  {:>5}d  {:>10.2}  {}",
            rank,
            truncate(&item.title, TITLE_WIDTH),
            item.score,
            format_vpd(item.vpd),
            item.age_days,
            item.like_rate,
            truncate(&item.reasons.join(", "), REASONS_WIDTH),
        ));
    }

    section.finish()
}

pub fn render_growth(growth: &GrowthPattern) -> String {
    let mut section = Section::new("Growth Pattern Analysis");
    section.line(format!("Total Videos (N={})", growth.total_videos));
    section.line(format!("Average Views: {}", format_number(growth.avg_views)));
    section.line(format!("Average Likes: {}", format_number(growth.avg_likes)));
    section.line(format!(
        "Niche Velocity Score (Avg. VPD): {}",
        format_vpd(growth.niche_velocity_score).green()
    ));
    section.blank();

    if !growth.top_performers.is_empty() {
        section.header("Highest Velocity Videos (Trending Now)");
        for video in &growth.top_performers {
            section.line(format!(
                "{:<35}  {:<12}  {:>8}  {:>8}  {:>6.2}% ({})  {}",
                truncate(&video.title, 35),
                truncate(&video.channel, 12),
                format_number(video.views as f64),
                format_vpd(video.vpd),
                video.engagement,
                format_engagement(video.engagement),
                video.url
            ));
        }
        section.blank();
    }

    section.bullets("Insights", &growth.insights);
    section.finish()
}

pub fn render_titles(titles: &TitleAnalysis) -> String {
    let mut section = Section::new("Title Pattern Analysis");

    if !titles.common_words.is_empty() {
        section.header("Most Common Words");
        for (i, word) in titles.common_words.iter().enumerate() {
            section.line(format!("{}. {} ({} times)", i + 1, word.word, word.count));
        }
        section.blank();
    }
    if !titles.common_phrases.is_empty() {
        section.header("Most Common Phrases");
        for (i, phrase) in titles.common_phrases.iter().enumerate() {
            section.line(format!("{}. {} ({} times)", i + 1, phrase.phrase, phrase.count));
        }
        section.blank();
    }
    if !titles.emojis.is_empty() {
        section.header("Emojis");
        let emojis: Vec<String> = titles
            .emojis
            .iter()
            .map(|e| format!("{} x{}", e.emoji, e.count))
            .collect();
        section.line(emojis.join("  "));
        section.blank();
    }

    section.bullets("Patterns", &titles.patterns);
    section.bullets("Insights", &titles.insights);
    section.finish()
}

pub fn render_competitors(competitors: &CompetitorAnalysis) -> String {
    let mut section = Section::new("Competitor Analysis");

    if !competitors.top_channels.is_empty() {
        section.header("Top Channels");
        for channel in &competitors.top_channels {
            let share = competitors
                .market_share
                .get(&channel.channel)
                .copied()
                .unwrap_or_default();
            let star = if channel.is_rising_star { " *" } else { "" };
            section.line(format!(
                "{:<24}  {:>3} videos  {:>8} views  {:>8} VPD  {:>5.1}% share{}",
                truncate(&channel.channel, 24),
                channel.video_count,
                format_number(channel.total_views as f64),
                format_vpd(channel.avg_vpd),
                share,
                star
            ));
        }
        section.blank();
    }

    let stars: Vec<String> = competitors
        .rising_stars
        .iter()
        .map(|c| format!("{} ({} VPD) {}", c.channel, format_vpd(c.avg_vpd), c.channel_url))
        .collect();
    section.bullets("Rising Stars", &stars);
    section.bullets("Opportunities", &competitors.opportunities);
    section.bullets("Insights", &competitors.insights);
    section.finish()
}

pub fn render_temporal(temporal: &TemporalAnalysis) -> String {
    let mut section = Section::new("Temporal Analysis");

    if temporal.best_hours.is_empty() && temporal.best_days.is_empty() {
        section.line("Not enough videos per hour or weekday to compare".yellow().to_string());
        return section.finish();
    }

    if !temporal.best_hours.is_empty() {
        section.header("Best Hours (UTC)");
        for hour in &temporal.best_hours {
            section.line(format!(
                "{:02}:00  {:>8} views  {:>5.2}% engagement",
                hour.hour,
                format_number(hour.avg_views),
                hour.engagement
            ));
        }
        section.blank();
    }
    if !temporal.best_days.is_empty() {
        section.header("Best Days");
        for day in &temporal.best_days {
            section.line(format!(
                "{:<10} {:>8} views  {:>5.2}% engagement",
                day.day,
                format_number(day.avg_views),
                day.engagement
            ));
        }
        section.blank();
    }

    section.bullets("Insights", &temporal.insights);
    section.finish()
}

pub fn render_keywords(keywords: &KeywordAnalysis) -> String {
    let mut section = Section::new("Keyword Analysis");

    keyword_table(&mut section, "Trending Keywords (by VPD)", &keywords.trending_keywords);
    keyword_table(&mut section, "Core Keywords (by frequency)", &keywords.core_keywords);
    keyword_table(&mut section, "Long-tail Keywords", &keywords.long_tail_keywords);

    section.bullets("SEO Opportunities", &keywords.seo_opportunities);
    section.bullets("Insights", &keywords.insights);
    section.finish()
}

fn keyword_table(section: &mut Section, title: &str, keywords: &[KeywordStats]) {
    if keywords.is_empty() {
        return;
    }
    section.header(title);
    for keyword in keywords {
        section.line(format!(
            "{:<20}  {:>3}x  {:>8} views  {:>8} VPD  {:>5.2}%",
            truncate(&keyword.keyword, 20),
            keyword.frequency,
            format_number(keyword.avg_views),
            format_vpd(keyword.avg_vpd),
            keyword.engagement
        ));
    }
    section.blank();
}

pub fn render_report(report: &ExecutiveReport) -> String {
    let mut section = Section::new("Executive Report");

    if !report.summary.is_empty() {
        section.header("Executive Summary");
        section.line(report.summary.clone());
        section.blank();
    }

    section.bullets("Key Insights", &report.key_insights);
    section.bullets("Strategic Recommendations", &report.recommendations);
    section.bullets("Content Strategy", &report.content_strategy);
    section.bullets("Competitive Intelligence", &report.competitive_intel);
    section.bullets("Performance Benchmarks", &report.performance_benchmarks);
    section.bullets("Next Steps", &report.next_steps);
    section.finish()
}

pub fn render_profiles(profiles: &[WeightProfile], active: &str) -> String {
    let mut section = Section::new("Weight Profiles");

    for profile in profiles {
        let marker = if profile.key == active { "*" } else { " " };
        let w = &profile.weights;
        section.line(format!(
            "{} {:<12} vpd={:.2} like={:.2} fresh={:.2} sat={:.2} slope={:.2}  {}",
            marker, profile.key, w.vpd, w.like, w.fresh, w.sat, w.slope, profile.description
        ));
    }
    section.blank();
    section.line(format!("Active: {}", active.green()));
    section.finish()
}
