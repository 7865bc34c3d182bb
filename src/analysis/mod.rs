//! Descriptive aggregations over a video sample.
//!
//! These group and count; only the opportunity ranking standardizes.

pub mod competitors;
pub mod growth;
pub mod keywords;
pub mod report;
pub mod temporal;
pub mod titles;

use chrono::{DateTime, Utc};

use crate::config::AnalysisSettings;
use crate::domain::Video;
use crate::metrics;
use crate::scoring::{self, OpportunityItem, Weights};

pub use competitors::{ChannelStats, CompetitorAnalysis};
pub use growth::{GrowthPattern, VideoPerformance};
pub use keywords::{KeywordAnalysis, KeywordStats};
pub use report::ExecutiveReport;
pub use temporal::{DayStats, HourStats, TemporalAnalysis};
pub use titles::{EmojiCount, PhraseCount, TitleAnalysis, WordCount};

pub struct Analyzer<'a> {
    videos: &'a [Video],
    settings: &'a AnalysisSettings,
    now: DateTime<Utc>,
}

impl<'a> Analyzer<'a> {
    pub fn new(videos: &'a [Video], settings: &'a AnalysisSettings, now: DateTime<Utc>) -> Self {
        Self {
            videos,
            settings,
            now,
        }
    }

    pub fn growth_patterns(&self) -> GrowthPattern {
        growth::analyze(self)
    }

    pub fn titles(&self) -> TitleAnalysis {
        titles::analyze(self.videos)
    }

    pub fn competitors(&self) -> CompetitorAnalysis {
        competitors::analyze(self)
    }

    pub fn temporal(&self) -> TemporalAnalysis {
        temporal::analyze(self.videos)
    }

    pub fn keywords(&self) -> KeywordAnalysis {
        keywords::analyze(self)
    }

    pub fn executive_report(&self) -> ExecutiveReport {
        report::generate(self)
    }

    pub fn opportunities(&self, weights: &Weights) -> Vec<OpportunityItem> {
        scoring::compute(self.videos, weights, self.now)
    }

    fn vpd(&self, video: &Video) -> f64 {
        metrics::vpd(video.views, video.published_at, self.now)
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
