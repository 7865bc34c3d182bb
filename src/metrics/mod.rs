//! Per-video momentum and engagement metrics.
//!
//! Every function is pure: all inputs are parameters, including `now`.

use chrono::{DateTime, Utc};

pub const SLOPE_LIMIT: f64 = 5.0;

/// Whole days between `published_at` and `now`, never negative.
pub fn age_days(now: DateTime<Utc>, published_at: DateTime<Utc>) -> i64 {
    let duration = now.signed_duration_since(published_at);
    (duration.num_hours() / 24).max(0)
}

/// Views per day. Content younger than a day counts as one day old.
pub fn vpd(views: u64, published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = age_days(now, published_at).max(1);
    views as f64 / days as f64
}

/// Views per day over a capped window (e.g. 7 or 30 days).
///
/// There is no per-day view history, so recent velocity is approximated by
/// dividing total views by `min(age, window)`.
pub fn vpd_window(
    views: u64,
    published_at: DateTime<Utc>,
    now: DateTime<Utc>,
    window_days: i64,
) -> f64 {
    let window = window_days.max(1);
    let days = age_days(now, published_at).min(window).max(1);
    views as f64 / days as f64
}

/// Acceleration of the short window against the long one, clamped to [-5, 5].
/// Positive means accelerating.
pub fn slope_vpd(vpd7: f64, vpd30: f64) -> f64 {
    let base = vpd30.max(1.0);
    ((vpd7 - vpd30) / base).clamp(-SLOPE_LIMIT, SLOPE_LIMIT)
}

/// Likes per thousand views.
pub fn like_rate_per_thousand(views: u64, likes: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    (likes as f64 / views as f64) * 1000.0
}

/// (likes + comments) as a percentage of views.
pub fn engagement_percent(views: u64, likes: u64, comments: u64) -> f64 {
    let interactions = likes.saturating_add(comments) as f64;
    interactions / (views.max(1) as f64) * 100.0
}

/// Inverted min-max scaling of `age_days` within the cohort: the newest
/// video gets 1, the oldest 0. Returns 0 when the cohort carries no signal.
pub fn freshness_from_ages(all_ages: &[f64], age_days: i64) -> f64 {
    let Some((min, max)) = min_max(all_ages) else {
        return 0.0;
    };
    if max == min {
        return 0.0;
    }
    let normalized = (age_days as f64 - min) / (max - min);
    1.0 - normalized
}

/// Share of the sample carrying the same primary token, in [0, 1].
pub fn normalize_saturation(freq: usize, sample_size: usize) -> f64 {
    if sample_size == 0 {
        return 0.0;
    }
    (freq as f64 / sample_size as f64).clamp(0.0, 1.0)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_age_days_floors_partial_days() {
        assert_eq!(age_days(now(), now() - Duration::hours(25)), 1);
        assert_eq!(age_days(now(), now() - Duration::hours(47)), 1);
        assert_eq!(age_days(now(), now() - Duration::days(10)), 10);
    }

    #[test]
    fn test_age_days_clamps_future_publish_time() {
        assert_eq!(age_days(now(), now() + Duration::days(3)), 0);
    }

    #[test]
    fn test_vpd_basic() {
        assert_eq!(vpd(1000, now() - Duration::days(10), now()), 100.0);
    }

    #[test]
    fn test_vpd_same_day_guard() {
        assert_eq!(vpd(1000, now(), now()), 1000.0);
        assert_eq!(vpd(1000, now() - Duration::hours(5), now()), 1000.0);
        assert_eq!(vpd(1000, now() + Duration::hours(5), now()), 1000.0);
        assert_eq!(vpd(0, now(), now()), 0.0);
    }

    #[test]
    fn test_vpd_window_caps_denominator() {
        let published = now() - Duration::days(20);
        assert_eq!(vpd_window(7000, published, now(), 7), 1000.0);
        assert_eq!(vpd_window(7000, published, now(), 30), 350.0);
    }

    #[test]
    fn test_vpd_window_non_positive_window_is_one_day() {
        let published = now() - Duration::days(20);
        assert_eq!(vpd_window(7000, published, now(), 0), 7000.0);
        assert_eq!(vpd_window(7000, published, now(), -4), 7000.0);
        assert_eq!(vpd_window(7000, now(), now(), 7), 7000.0);
    }

    #[test]
    fn test_vpd_window_non_increasing_in_window() {
        let published = now() - Duration::days(45);
        let mut previous = f64::INFINITY;
        for window in [1, 3, 7, 14, 30, 45, 90] {
            let value = vpd_window(90_000, published, now(), window);
            assert!(value <= previous, "window {window} increased velocity");
            previous = value;
        }
        assert!(vpd_window(9000, published, now(), 7) >= vpd_window(9000, published, now(), 30));
    }

    #[test]
    fn test_slope_vpd_direction() {
        assert!(slope_vpd(200.0, 100.0) > 0.0);
        assert!(slope_vpd(50.0, 100.0) < 0.0);
        assert_eq!(slope_vpd(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_slope_vpd_zero_baseline_guard() {
        assert_eq!(slope_vpd(3.0, 0.0), 3.0);
        assert_eq!(slope_vpd(0.5, 0.25), 0.25);
    }

    #[test]
    fn test_slope_vpd_is_clamped() {
        assert_eq!(slope_vpd(1e9, 1.0), 5.0);
        assert_eq!(slope_vpd(-1e9, 1.0), -5.0);
        assert_eq!(slope_vpd(f64::MAX, 0.0), 5.0);
        assert_eq!(slope_vpd(-f64::MAX, f64::MAX), -5.0);
        for (v7, v30) in [(0.0, 1e12), (1e12, 0.0), (42.0, 7.0), (-3.0, 2.0)] {
            let slope = slope_vpd(v7, v30);
            assert!((-5.0..=5.0).contains(&slope));
        }
    }

    #[test]
    fn test_like_rate_per_thousand() {
        assert_eq!(like_rate_per_thousand(0, 10), 0.0);
        assert_eq!(like_rate_per_thousand(0, 0), 0.0);
        assert_eq!(like_rate_per_thousand(1000, 100), 100.0);
        assert_eq!(like_rate_per_thousand(10_000, 200), 20.0);
    }

    #[test]
    fn test_engagement_percent_zero_views_guard() {
        assert_eq!(engagement_percent(0, 5, 5), 1000.0);
        assert_eq!(engagement_percent(1000, 40, 10), 5.0);
    }

    #[test]
    fn test_freshness_from_ages() {
        let ages = [1.0, 5.0, 10.0];
        assert_eq!(freshness_from_ages(&ages, 1), 1.0);
        assert_eq!(freshness_from_ages(&ages, 10), 0.0);
        assert!(freshness_from_ages(&ages, 5) > 0.5);
    }

    #[test]
    fn test_freshness_without_signal() {
        assert_eq!(freshness_from_ages(&[], 3), 0.0);
        assert_eq!(freshness_from_ages(&[4.0, 4.0, 4.0], 4), 0.0);
        assert_eq!(freshness_from_ages(&[7.0], 7), 0.0);
    }

    #[test]
    fn test_normalize_saturation() {
        assert_eq!(normalize_saturation(5, 0), 0.0);
        assert_eq!(normalize_saturation(0, 0), 0.0);
        assert_eq!(normalize_saturation(5, 10), 0.5);
        assert_eq!(normalize_saturation(10, 10), 1.0);
        assert_eq!(normalize_saturation(15, 10), 1.0);
    }
}
