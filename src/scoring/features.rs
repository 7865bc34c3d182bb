use chrono::{DateTime, Utc};

use super::types::FeatureVector;
use crate::domain::Video;
use crate::metrics;
use crate::text;

/// Saturation bucket for titles with no usable token
pub const NO_TOKEN: &str = "_na_";

const SHORT_WINDOW_DAYS: i64 = 7;
const LONG_WINDOW_DAYS: i64 = 30;

pub fn extract_features(video: &Video, now: DateTime<Utc>) -> FeatureVector {
    let vpd7 = metrics::vpd_window(video.views, video.published_at, now, SHORT_WINDOW_DAYS);
    let vpd30 = metrics::vpd_window(video.views, video.published_at, now, LONG_WINDOW_DAYS);

    FeatureVector {
        age_days: metrics::age_days(now, video.published_at),
        vpd: metrics::vpd(video.views, video.published_at, now),
        vpd7,
        vpd30,
        slope: metrics::slope_vpd(vpd7, vpd30),
        like_rate_per_k: metrics::like_rate_per_thousand(video.views, video.likes),
        primary_token: primary_token(&video.title),
    }
}

/// First keyword of the title, or `NO_TOKEN`
pub fn primary_token(title: &str) -> String {
    text::tokenize(title)
        .into_iter()
        .next()
        .unwrap_or_else(|| NO_TOKEN.to_string())
}
