//! Roster normalization
//!
//! Turns pasted text into the candidate list: one name per line, trimmed,
//! blank lines dropped. Order and duplicates are preserved.

/// Split raw multi-line text into trimmed, non-empty candidate names
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
