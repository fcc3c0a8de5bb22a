use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::derive::{self, Derived};

// ---------------------------------------------------------------------------
// Record – one row of the input table (one author of one article)
// ---------------------------------------------------------------------------

/// A single author-article pairing as read from the input file.
///
/// Empty cells deserialize to empty strings, so every text accessor below
/// always yields a concrete `&str`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "DOI", alias = "identifier")]
    pub identifier: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Affiliation")]
    pub affiliation: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Subjects")]
    pub subjects: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Abstract")]
    pub abstract_text: String,
}

impl Record {
    /// The `(identifier, Title)` pair identifying the logical article.
    pub fn article_key(&self) -> (&str, &str) {
        (&self.identifier, &self.title)
    }
}

// ---------------------------------------------------------------------------
// Field – the searchable columns
// ---------------------------------------------------------------------------

/// A text column of [`Record`] that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Identifier,
    Title,
    Author,
    Affiliation,
    Role,
    Subjects,
    Keywords,
    Abstract,
}

impl Field {
    /// All fields, in input column order.
    pub const ALL: [Field; 8] = [
        Field::Identifier,
        Field::Title,
        Field::Author,
        Field::Affiliation,
        Field::Role,
        Field::Subjects,
        Field::Keywords,
        Field::Abstract,
    ];

    /// Header name in the input and export files.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::Identifier => "DOI",
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Affiliation => "Affiliation",
            Field::Role => "Role",
            Field::Subjects => "Subjects",
            Field::Keywords => "Keywords",
            Field::Abstract => "Abstract",
        }
    }

    /// Alternative header names accepted when loading.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Identifier => &["identifier"],
            _ => &[],
        }
    }

    pub fn value(self, record: &Record) -> &str {
        match self {
            Field::Identifier => &record.identifier,
            Field::Title => &record.title,
            Field::Author => &record.author,
            Field::Affiliation => &record.affiliation,
            Field::Role => &record.role,
            Field::Subjects => &record.subjects,
            Field::Keywords => &record.keywords,
            Field::Abstract => &record.abstract_text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// AuthorEntry – one line of an article's roster
// ---------------------------------------------------------------------------

/// The (Author, Affiliation, Role) projection shown for each article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub author: String,
    pub affiliation: String,
    pub role: String,
}

impl From<&Record> for AuthorEntry {
    fn from(record: &Record) -> Self {
        AuthorEntry {
            author: record.author.clone(),
            affiliation: record.affiliation.clone(),
            role: record.role.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// ArticleTable – the loaded, derived, read-only dataset
// ---------------------------------------------------------------------------

/// The full table with per-row derived attributes. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ArticleTable {
    records: Vec<Record>,
    /// Parallel to `records`; identical for every row of one article.
    derived: Vec<Derived>,
    /// Dense article id per row, in order of first appearance.
    article_ids: Vec<usize>,
    article_count: usize,
    /// Sorted distinct years present in the data.
    years: BTreeSet<i32>,
    author_cap: u32,
}

impl ArticleTable {
    /// Run the derivation over `records` and freeze the result.
    pub fn from_records(records: Vec<Record>, author_cap: u32) -> Self {
        let derivation = derive::derive_rows(&records, author_cap);
        let years = derivation.derived.iter().filter_map(|d| d.year).collect();
        ArticleTable {
            records,
            derived: derivation.derived,
            article_ids: derivation.article_ids,
            article_count: derivation.article_count,
            years,
            author_cap,
        }
    }

    /// Number of author rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct article keys.
    pub fn article_count(&self) -> usize {
        self.article_count
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, row: usize) -> &Record {
        &self.records[row]
    }

    pub fn derived(&self, row: usize) -> &Derived {
        &self.derived[row]
    }

    pub fn article_id(&self, row: usize) -> usize {
        self.article_ids[row]
    }

    pub fn years(&self) -> &BTreeSet<i32> {
        &self.years
    }

    pub fn author_cap(&self) -> u32 {
        self.author_cap
    }

    /// Largest capped author count, standing for "more than `author_cap`".
    pub fn capped_max(&self) -> u32 {
        self.author_cap.saturating_add(1)
    }
}
