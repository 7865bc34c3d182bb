use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::Video;
use crate::text;

const TOP_WORDS: usize = 10;
const TOP_PHRASES: usize = 5;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b20\d{2}\b").expect("year pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleAnalysis {
    pub common_words: Vec<WordCount>,
    pub common_phrases: Vec<PhraseCount>,
    pub emojis: Vec<EmojiCount>,
    pub patterns: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

pub(super) fn analyze(videos: &[Video]) -> TitleAnalysis {
    if videos.is_empty() {
        return TitleAnalysis::default();
    }

    let mut words = BTreeMap::new();
    let mut phrases = BTreeMap::new();
    let mut emojis = BTreeMap::new();
    let mut patterns: Vec<String> = Vec::new();

    for video in videos {
        let tokens = text::tokenize(&video.title);

        for pair in tokens.windows(2) {
            *phrases.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
        for token in tokens {
            *words.entry(token).or_insert(0) += 1;
        }
        for emoji in text::extract_emojis(&video.title) {
            *emojis.entry(emoji).or_insert(0) += 1;
        }
        for pattern in detect_patterns(&video.title) {
            if !patterns.iter().any(|p| p == pattern) {
                patterns.push(pattern.to_string());
            }
        }
    }

    let common_words: Vec<WordCount> = ranked(words, TOP_WORDS)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    let common_phrases: Vec<PhraseCount> = ranked(phrases, TOP_PHRASES)
        .into_iter()
        .map(|(phrase, count)| PhraseCount { phrase, count })
        .collect();
    let emojis: Vec<EmojiCount> = ranked(emojis, usize::MAX)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect();

    let insights = generate_insights(&common_words, &common_phrases, &patterns);

    TitleAnalysis {
        common_words,
        common_phrases,
        emojis,
        patterns,
        insights,
    }
}

fn detect_patterns(title: &str) -> Vec<&'static str> {
    let lower = title.to_lowercase();
    let mut found = Vec::new();
    if lower.contains("tutorial") {
        found.push("Tutorial Pattern");
    }
    if lower.contains("how to") {
        found.push("How-to Pattern");
    }
    if YEAR.is_match(&lower) {
        found.push("Year Pattern");
    }
    found
}

/// Count descending, key ascending on ties
fn ranked(counts: BTreeMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // BTreeMap order is by key; a stable sort by count keeps it for ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);
    entries
}

fn generate_insights(words: &[WordCount], phrases: &[PhraseCount], patterns: &[String]) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(top) = words.first() {
        insights.push(format!("Most common word: '{}' ({} times)", top.word, top.count));
    }
    if let Some(top) = phrases.first() {
        insights.push(format!("Most common phrase: '{}' ({} times)", top.phrase, top.count));
    }
    if !patterns.is_empty() {
        insights.push(format!("Common patterns: {}", patterns.join(", ")));
    }

    insights
}
