use regex::{Regex, RegexBuilder};

use super::error::SearchError;
use super::model::{ArticleTable, Field};

/// How the query text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring containment.
    #[default]
    Literal,
    /// Unanchored regular expression.
    Regex,
}

/// A free-text query against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: Field,
    pub mode: SearchMode,
    pub text: String,
    /// Applies to [`SearchMode::Regex`] only; literal search always ignores case.
    pub case_insensitive: bool,
}

impl SearchQuery {
    /// Queries with empty text do not constrain the result.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }
}

/// A compiled query ready to test field values.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Lower-cased needle.
    Literal(String),
    Regex(Regex),
}

impl Matcher {
    pub fn compile(query: &SearchQuery) -> Result<Self, SearchError> {
        match query.mode {
            SearchMode::Literal => Ok(Matcher::Literal(query.text.to_lowercase())),
            SearchMode::Regex => RegexBuilder::new(&query.text)
                .case_insensitive(query.case_insensitive)
                .build()
                .map(Matcher::Regex)
                .map_err(|source| SearchError::InvalidRegex {
                    pattern: query.text.clone(),
                    source,
                }),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Matcher::Literal(needle) => haystack.to_lowercase().contains(needle.as_str()),
            Matcher::Regex(regex) => regex.is_match(haystack),
        }
    }
}

/// Mask of rows whose `query.field` matches the query.
pub fn search_mask(table: &ArticleTable, query: &SearchQuery) -> Result<Vec<bool>, SearchError> {
    let matcher = Matcher::compile(query)?;
    Ok(table
        .records()
        .iter()
        .map(|record| matcher.is_match(query.field.value(record)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn table(titles: &[&str]) -> ArticleTable {
        let records = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Record {
                identifier: format!("10.1371/journal.pone.2200000{i}"),
                title: title.to_string(),
                ..Default::default()
            })
            .collect();
        ArticleTable::from_records(records, 50)
    }

    fn query(field: Field, mode: SearchMode, text: &str) -> SearchQuery {
        SearchQuery {
            field,
            mode,
            text: text.to_string(),
            case_insensitive: false,
        }
    }

    #[test]
    fn test_literal_search_ignores_case() {
        let table = table(&["lung cancer study", "heart disease", ""]);
        let mask = search_mask(&table, &query(Field::Title, SearchMode::Literal, "CANCER")).unwrap();
        assert_eq!(mask, vec![true, false, false]);
    }

    #[test]
    fn test_literal_search_treats_metacharacters_literally() {
        let table = table(&["a.b (c)", "axb c"]);
        let mask = search_mask(&table, &query(Field::Title, SearchMode::Literal, "a.b (")).unwrap();
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    fn test_regex_search_is_unanchored() {
        let table = table(&["Gene expression in mice", "Protein folding"]);
        let mask = search_mask(&table, &query(Field::Title, SearchMode::Regex, r"expr\w+")).unwrap();
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    fn test_regex_case_sensitivity_follows_flag() {
        let table = table(&["Lung Cancer"]);
        let mut q = query(Field::Title, SearchMode::Regex, "cancer");
        assert_eq!(search_mask(&table, &q).unwrap(), vec![false]);

        q.case_insensitive = true;
        assert_eq!(search_mask(&table, &q).unwrap(), vec![true]);
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let table = table(&["anything"]);
        let err = search_mask(&table, &query(Field::Title, SearchMode::Regex, "(unclosed")).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_search_targets_selected_field() {
        let table = table(&["cancer"]);
        let mask = search_mask(&table, &query(Field::Identifier, SearchMode::Literal, "cancer")).unwrap();
        assert_eq!(mask, vec![false]);
    }

    #[test]
    fn test_empty_query_is_inactive() {
        assert!(!query(Field::Title, SearchMode::Regex, "").is_active());
        assert!(query(Field::Title, SearchMode::Regex, " ").is_active());
    }
}
