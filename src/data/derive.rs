use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Record;

/// Default author-count ceiling; counts above it bucket into `cap + 1`.
pub const DEFAULT_AUTHOR_CAP: u32 = 50;

/// Only PLOS ONE identifiers carry a recognizable year.
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"10\.1371/journal\.pone\.([0-9]{2})").expect("year pattern is a valid regex")
});

/// Per-row attributes computed from the whole table at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    /// Number of rows sharing this row's article key.
    pub author_count: u32,
    pub year: Option<i32>,
    /// `author_count` clamped to `cap + 1`.
    pub author_count_capped: u32,
}

pub(crate) struct Derivation {
    pub derived: Vec<Derived>,
    pub article_ids: Vec<usize>,
    pub article_count: usize,
}

/// Extract the publication year from a `10.1371/journal.pone.YY…` identifier.
pub fn extract_year(identifier: &str) -> Option<i32> {
    let digits = YEAR_PATTERN.captures(identifier)?.get(1)?.as_str();
    digits.parse::<i32>().ok().map(|yy| 2000 + yy)
}

pub fn cap_author_count(count: u32, cap: u32) -> u32 {
    if count <= cap {
        count
    } else {
        cap.saturating_add(1)
    }
}

/// Group rows by article key, count them, and broadcast the counts back.
pub(crate) fn derive_rows(records: &[Record], cap: u32) -> Derivation {
    let mut ids: HashMap<(&str, &str), usize> = HashMap::new();
    let mut counts: Vec<u32> = Vec::new();
    let mut article_ids = Vec::with_capacity(records.len());

    for record in records {
        let next = counts.len();
        let id = *ids.entry(record.article_key()).or_insert(next);
        if id == next {
            counts.push(0);
        }
        counts[id] += 1;
        article_ids.push(id);
    }

    let derived = records
        .iter()
        .zip(&article_ids)
        .map(|(record, &id)| {
            let author_count = counts[id];
            Derived {
                author_count,
                year: extract_year(&record.identifier),
                author_count_capped: cap_author_count(author_count, cap),
            }
        })
        .collect();

    Derivation {
        derived,
        article_ids,
        article_count: counts.len(),
    }
}
