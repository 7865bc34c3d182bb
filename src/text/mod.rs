mod emoji;
pub mod tokenizer;

pub use emoji::extract_emojis;
pub use tokenizer::{normalize_text, remove_accents, tokenize};
