use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use std::fs;
use std::io::Read;
use std::path::Path;

use super::models::{Video, VideoRecord};
use crate::errors::{with_parse_context, with_read_context};

const STDIN_MARKER: &str = "-";

/// Load a JSON array of video records from a file, or from stdin for `-`
pub fn load_videos(path: &Path, now: DateTime<Utc>) -> Result<Vec<Video>> {
    let json = read_source(path)?;
    let videos = parse_videos(&json, now)?;
    info!("Loaded {} videos from {}", videos.len(), path.display());
    Ok(videos)
}

/// Parse a JSON array of video records
pub fn parse_videos(json: &str, now: DateTime<Utc>) -> Result<Vec<Video>> {
    let records: Vec<VideoRecord> = with_parse_context(serde_json::from_str(json), "video records")?;
    Ok(records.into_iter().map(|r| r.into_video(now)).collect())
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        with_read_context(std::io::stdin().read_to_string(&mut buffer), "stdin")?;
        return Ok(buffer);
    }

    with_read_context(fs::read_to_string(path), &path.display().to_string())
}
