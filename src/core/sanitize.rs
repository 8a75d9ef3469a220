// src/core/sanitize.rs
use std::sync::OnceLock;

use regex::Regex;

const ZERO_WIDTH_SPACE: char = '\u{200B}';

fn glued_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("static regex"))
}

/// Clean scraped cell text into a comma-separated list.
///
/// Multi-value cells come out of the wiki glued together (`"ForestDesert"`);
/// a `", "` goes wherever a lowercase letter runs straight into an uppercase
/// one. Existing spaces are kept, so `"The Hallow"` stays one entry.
pub fn normalize(raw: &str) -> String {
    let cleaned = strip_invisible(raw);
    glued_words()
        .replace_all(cleaned.trim(), "$1, $2")
        .into_owned()
}

/// Drop zero-width spaces the wiki sprinkles into link text.
pub fn strip_invisible(s: &str) -> String {
    s.chars().filter(|&c| c != ZERO_WIDTH_SPACE).collect()
}

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split a normalized cell back into its entries.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(", ")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
