use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::path::Path;

use super::to_json;
use crate::analysis::{
    Analyzer, CompetitorAnalysis, ExecutiveReport, GrowthPattern, KeywordAnalysis,
    TemporalAnalysis, TitleAnalysis,
};
use crate::cli::{AnalysisKind, OutputFormat};
use crate::config::AppConfig;
use crate::display;
use crate::domain::{self, Video};

/// Every aggregation at once, as emitted for `--kind all --format json`
#[derive(Debug, Serialize)]
pub struct FullAnalysis {
    pub growth: GrowthPattern,
    pub titles: TitleAnalysis,
    pub competitors: CompetitorAnalysis,
    pub temporal: TemporalAnalysis,
    pub keywords: KeywordAnalysis,
    pub report: ExecutiveReport,
}

pub struct AnalysisService {
    config: AppConfig,
    now: DateTime<Utc>,
}

impl AnalysisService {
    pub fn new(config: AppConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    pub fn run(&self, input: &Path, kind: AnalysisKind, format: OutputFormat) -> Result<String> {
        info!("=== Niche Analysis ({kind:?}) ===");

        let videos = domain::load_videos(input, self.now)?;
        self.render(&videos, kind, format)
    }

    pub fn render(&self, videos: &[Video], kind: AnalysisKind, format: OutputFormat) -> Result<String> {
        let analyzer = Analyzer::new(videos, &self.config.analysis, self.now);

        match (kind, format) {
            (AnalysisKind::Growth, OutputFormat::Text) => Ok(display::render_growth(&analyzer.growth_patterns())),
            (AnalysisKind::Growth, OutputFormat::Json) => to_json(&analyzer.growth_patterns()),
            (AnalysisKind::Titles, OutputFormat::Text) => Ok(display::render_titles(&analyzer.titles())),
            (AnalysisKind::Titles, OutputFormat::Json) => to_json(&analyzer.titles()),
            (AnalysisKind::Competitors, OutputFormat::Text) => {
                Ok(display::render_competitors(&analyzer.competitors()))
            }
            (AnalysisKind::Competitors, OutputFormat::Json) => to_json(&analyzer.competitors()),
            (AnalysisKind::Temporal, OutputFormat::Text) => Ok(display::render_temporal(&analyzer.temporal())),
            (AnalysisKind::Temporal, OutputFormat::Json) => to_json(&analyzer.temporal()),
            (AnalysisKind::Keywords, OutputFormat::Text) => Ok(display::render_keywords(&analyzer.keywords())),
            (AnalysisKind::Keywords, OutputFormat::Json) => to_json(&analyzer.keywords()),
            (AnalysisKind::Report, OutputFormat::Text) => {
                Ok(display::render_report(&analyzer.executive_report()))
            }
            (AnalysisKind::Report, OutputFormat::Json) => to_json(&analyzer.executive_report()),
            (AnalysisKind::All, OutputFormat::Text) => Ok(render_all(&analyzer)),
            (AnalysisKind::All, OutputFormat::Json) => to_json(&full_analysis(&analyzer)),
        }
    }
}

fn full_analysis(analyzer: &Analyzer) -> FullAnalysis {
    FullAnalysis {
        growth: analyzer.growth_patterns(),
        titles: analyzer.titles(),
        competitors: analyzer.competitors(),
        temporal: analyzer.temporal(),
        keywords: analyzer.keywords(),
        report: analyzer.executive_report(),
    }
}

fn render_all(analyzer: &Analyzer) -> String {
    let full = full_analysis(analyzer);
    [
        display::render_growth(&full.growth),
        display::render_titles(&full.titles),
        display::render_competitors(&full.competitors),
        display::render_temporal(&full.temporal),
        display::render_keywords(&full.keywords),
        display::render_report(&full.report),
    ]
    .join("\n")
}
