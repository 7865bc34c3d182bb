use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use std::path::Path;

use super::to_json;
use crate::cli::OutputFormat;
use crate::config::{AppConfig, active_profile_name};
use crate::display;
use crate::domain::{self, Video};
use crate::scoring::{self, OpportunityItem};

pub struct ScoringService {
    config: AppConfig,
    now: DateTime<Utc>,
}

impl ScoringService {
    pub fn new(config: AppConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    /// Load `input`, rank it and render the result
    pub fn run(&self, input: &Path, format: OutputFormat) -> Result<String> {
        info!("=== Opportunity Scoring ===");
        info!(
            "Profile: {}, reference time: {}",
            active_profile_name(&self.config.scoring),
            self.now.to_rfc3339()
        );

        let videos = domain::load_videos(input, self.now)?;
        let items = self.rank(&videos);
        info!("  → Ranked {} of {} videos", items.len(), videos.len());

        match format {
            OutputFormat::Text => Ok(display::render_opportunities(&items)),
            OutputFormat::Json => to_json(&items),
        }
    }

    pub fn rank(&self, videos: &[Video]) -> Vec<OpportunityItem> {
        scoring::compute(videos, &self.config.scoring.weights, self.now)
    }
}
