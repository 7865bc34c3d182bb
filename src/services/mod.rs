pub mod analysis;
pub mod scoring;

pub use analysis::AnalysisService;
pub use scoring::ScoringService;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::errors::write_context;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).with_context(|| write_context("JSON output"))?;
    json.push('\n');
    Ok(json)
}
