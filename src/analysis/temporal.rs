use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::average;
use crate::domain::Video;
use crate::metrics;

/// Buckets with fewer videos than this are too noisy to report
const MIN_BUCKET_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    pub best_hours: Vec<HourStats>,
    pub best_days: Vec<DayStats>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourStats {
    pub hour: u32,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub day: String,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub engagement: f64,
}

#[derive(Default)]
struct Bucket {
    count: usize,
    views: f64,
    likes: f64,
    engagement: f64,
}

impl Bucket {
    fn add(&mut self, video: &Video) {
        self.count += 1;
        self.views += video.views as f64;
        self.likes += video.likes as f64;
        self.engagement += metrics::engagement_percent(video.views, video.likes, video.comments);
    }

    fn means(&self) -> (f64, f64, f64) {
        (
            average(self.views, self.count),
            average(self.likes, self.count),
            average(self.engagement, self.count),
        )
    }
}

pub(super) fn analyze(videos: &[Video]) -> TemporalAnalysis {
    if videos.is_empty() {
        return TemporalAnalysis::default();
    }

    let mut hours: BTreeMap<u32, Bucket> = BTreeMap::new();
    // Keyed by weekday number so ties fall back to Monday-first order
    let mut days: BTreeMap<u32, (String, Bucket)> = BTreeMap::new();

    for video in videos {
        let published = video.published_at;
        hours.entry(published.hour()).or_default().add(video);
        days.entry(published.weekday().num_days_from_monday())
            .or_insert_with(|| (published.format("%A").to_string(), Bucket::default()))
            .1
            .add(video);
    }

    let mut best_hours: Vec<HourStats> = hours
        .into_iter()
        .filter(|(_, bucket)| bucket.count >= MIN_BUCKET_SIZE)
        .map(|(hour, bucket)| {
            let (avg_views, avg_likes, engagement) = bucket.means();
            HourStats {
                hour,
                avg_views,
                avg_likes,
                engagement,
            }
        })
        .collect();
    best_hours.sort_by(|a, b| b.engagement.partial_cmp(&a.engagement).unwrap_or(Ordering::Equal));

    let mut best_days: Vec<DayStats> = days
        .into_values()
        .filter(|(_, bucket)| bucket.count >= MIN_BUCKET_SIZE)
        .map(|(day, bucket)| {
            let (avg_views, avg_likes, engagement) = bucket.means();
            DayStats {
                day,
                avg_views,
                avg_likes,
                engagement,
            }
        })
        .collect();
    best_days.sort_by(|a, b| b.engagement.partial_cmp(&a.engagement).unwrap_or(Ordering::Equal));

    let insights = generate_insights(&best_hours, &best_days);
    TemporalAnalysis {
        best_hours,
        best_days,
        insights,
    }
}

fn generate_insights(hours: &[HourStats], days: &[DayStats]) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(best) = hours.first() {
        insights.push(format!(
            "Best posting hour: {}:00 with {:.2}% engagement",
            best.hour, best.engagement
        ));
    }
    if let Some(best) = days.first() {
        insights.push(format!(
            "Best posting day: {} with {:.2}% engagement",
            best.day, best.engagement
        ));
    }

    insights
}
