use super::error::SearchError;
use super::filter::{predicate_mask, FilterCriteria};
use super::model::ArticleTable;
use super::results::{assemble, Assembly};
use super::search::{search_mask, SearchQuery};

/// Everything one search action needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub criteria: FilterCriteria,
    pub search: SearchQuery,
    pub max_results: usize,
}

#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub assembly: Assembly,
    /// Set when the search pattern was rejected; the assembly is then empty.
    pub search_error: Option<SearchError>,
}

/// Apply filters and search to `table` and group the surviving rows.
///
/// An invalid regular expression never fails the query: it is reported in
/// [`QueryOutcome::search_error`] and no row matches.
pub fn run_query(table: &ArticleTable, params: &QueryParams) -> QueryOutcome {
    let mut mask = predicate_mask(table, &params.criteria);
    let mut search_error = None;

    if params.search.is_active() {
        match search_mask(table, &params.search) {
            Ok(matches) => {
                for (m, hit) in mask.iter_mut().zip(matches) {
                    *m &= hit;
                }
            }
            Err(e) => {
                log::warn!("{e}");
                mask.fill(false);
                search_error = Some(e);
            }
        }
    }

    let assembly = assemble(table, &mask, params.max_results);
    log::debug!(
        "query on {} matched {} rows / {} articles, showing {}",
        params.search.field,
        assembly.matched_rows,
        assembly.matched_articles,
        assembly.articles.len()
    );

    QueryOutcome {
        assembly,
        search_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Field, Record};
    use crate::data::search::SearchMode;

    fn table() -> ArticleTable {
        let rows = [
            ("10.1371/journal.pone.21000001", "lung cancer study", "first author"),
            ("10.1371/journal.pone.21000001", "lung cancer study", "corresponding author"),
            ("10.1371/journal.pone.22000002", "heart study", "first author"),
            ("not-a-doi", "cancer elsewhere", "first author"),
        ];
        let records = rows
            .iter()
            .map(|(doi, title, role)| Record {
                identifier: doi.to_string(),
                title: title.to_string(),
                role: role.to_string(),
                ..Default::default()
            })
            .collect();
        ArticleTable::from_records(records, 50)
    }

    fn params(table: &ArticleTable, mode: SearchMode, text: &str) -> QueryParams {
        QueryParams {
            criteria: FilterCriteria::permissive(table),
            search: SearchQuery {
                field: Field::Title,
                mode,
                text: text.to_string(),
                case_insensitive: false,
            },
            max_results: 20,
        }
    }

    #[test]
    fn test_search_is_anded_with_filters() {
        let table = table();
        let outcome = run_query(&table, &params(&table, SearchMode::Literal, "CANCER"));

        // the yearless "cancer elsewhere" row fails the year filter
        assert_eq!(outcome.assembly.articles.len(), 1);
        assert_eq!(outcome.assembly.articles[0].roster.len(), 2);
        assert!(outcome.search_error.is_none());
    }

    #[test]
    fn test_invalid_regex_yields_no_results_and_error() {
        let table = table();
        let outcome = run_query(&table, &params(&table, SearchMode::Regex, "[a-"));
        assert!(outcome.assembly.is_empty());
        assert!(outcome.search_error.is_some());
    }

    #[test]
    fn test_empty_search_text_only_filters() {
        let table = table();
        let outcome = run_query(&table, &params(&table, SearchMode::Regex, ""));
        assert_eq!(outcome.assembly.articles.len(), 2);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let table = table();
        let p = params(&table, SearchMode::Regex, "study");
        let first = run_query(&table, &p);
        let second = run_query(&table, &p);
        assert_eq!(first.assembly, second.assembly);
    }
}
