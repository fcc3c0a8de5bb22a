/// Data layer: loading, derivation, filtering, search, grouping, export.
///
/// Architecture:
/// ```text
///   articles.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record>  (TableCache: once per file)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  author counts, year, capped count → ArticleTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │ & │  search   │  row masks
///   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  results  │  dedupe per article, cap, rosters
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  one CSV row per article
///   └──────────┘
/// ```

pub mod derive;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
pub mod results;
pub mod search;
