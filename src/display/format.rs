const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Compact count: 1.2M, 3.4K, 999
pub fn format_number(value: f64) -> String {
    if value >= MILLION {
        format!("{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        format!("{:.0}", value)
    }
}

/// Compact views-per-day value; keeps one decimal below a thousand
pub fn format_vpd(vpd: f64) -> String {
    if vpd >= THOUSAND {
        format_number(vpd)
    } else {
        format!("{:.1}", vpd)
    }
}

/// Describes an engagement percentage
pub fn format_engagement(rate: f64) -> &'static str {
    if rate > 5.0 {
        "excellent"
    } else if rate > 2.0 {
        "good"
    } else {
        "low"
    }
}

/// Shortens to at most `max_chars` characters, the trailing ellipsis included
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1500.0), "1.5K");
        assert_eq!(format_number(2_340_000.0), "2.3M");
    }

    #[test]
    fn test_format_vpd() {
        assert_eq!(format_vpd(4000.0), "4.0K");
        assert_eq!(format_vpd(500.0), "500.0");
        assert_eq!(format_vpd(33.333), "33.3");
    }

    #[test]
    fn test_format_engagement() {
        assert_eq!(format_engagement(6.0), "excellent");
        assert_eq!(format_engagement(3.0), "good");
        assert_eq!(format_engagement(2.0), "low");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("pão de queijo", 4), "pão…");
    }

    #[test]
    fn test_truncate_fits_width() {
        let cut = truncate(&"x".repeat(80), 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("exactly", 7), "exactly");
    }
}
