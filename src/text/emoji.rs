use unicode_segmentation::UnicodeSegmentation;

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const EMOJI_PRESENTATION: char = '\u{FE0F}';

const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Misc Symbols and Pictographs
    (0x1F680, 0x1F6FF), // Transport & Map
    (0x1F900, 0x1F9FF), // Supplemental Symbols & Pictographs
    (0x1FA70, 0x1FAFF), // Symbols & Pictographs Extended-A
    (0x2700, 0x27BF),   // Dingbats
    (0x2600, 0x26FF),   // Misc Symbols
    (0x1F780, 0x1F7FF), // Geometric Shapes Extended
];

/// Returns every emoji in `text` as a complete grapheme cluster,
/// including flags and ZWJ sequences.
pub fn extract_emojis(text: &str) -> Vec<String> {
    text.graphemes(true)
        .filter(|cluster| is_emoji_cluster(cluster))
        .map(str::to_string)
        .collect()
}

fn is_emoji_cluster(cluster: &str) -> bool {
    is_flag(cluster)
        || cluster.contains(ZERO_WIDTH_JOINER)
        || cluster.contains(EMOJI_PRESENTATION)
        || cluster.chars().any(is_pictographic)
}

// Flags are pairs of regional indicators, kept together by grapheme segmentation.
fn is_flag(cluster: &str) -> bool {
    cluster.chars().count() == 2 && cluster.chars().all(is_regional_indicator)
}

fn is_pictographic(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_simple_emojis() {
        assert_eq!(extract_emojis("Big news 🔥 today 😀"), vec!["🔥", "😀"]);
    }

    #[test]
    fn test_plain_text_has_no_emojis() {
        assert!(extract_emojis("Rust tutorial 2024").is_empty());
    }

    #[test]
    fn test_extracts_zwj_sequence_as_one_emoji() {
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(extract_emojis(&format!("vlog {family}")), vec![family.to_string()]);
    }

    #[test]
    fn test_extracts_flags() {
        let brazil = "\u{1F1E7}\u{1F1F7}";
        assert_eq!(extract_emojis(&format!("Futebol {brazil}")), vec![brazil.to_string()]);
    }
}
