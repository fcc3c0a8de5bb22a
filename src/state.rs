use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::config::ExplorerConfig;
use crate::data::error::ExportError;
use crate::data::export::export_to_path;
use crate::data::filter::FilterCriteria;
use crate::data::model::{ArticleTable, Field};
use crate::data::query::{run_query, QueryOutcome, QueryParams};
use crate::data::search::{SearchMode, SearchQuery};

// ---------------------------------------------------------------------------
// Search controls – the user's current selections
// ---------------------------------------------------------------------------

/// Widget values in the side panel. Only read when a search is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchControls {
    pub field: Field,
    pub mode: SearchMode,
    pub text: String,
    pub regex_case_insensitive: bool,
    pub author_min: u32,
    pub author_max: u32,
    pub selected_years: BTreeSet<i32>,
    pub selected_roles: BTreeSet<String>,
    pub max_results: usize,
}

impl SearchControls {
    /// Defaults from `config`, with every year of `table` selected.
    pub fn new(config: &ExplorerConfig, table: Option<&ArticleTable>) -> Self {
        let (author_min, author_max) = config.default_author_range;
        Self {
            field: Field::default(),
            mode: SearchMode::default(),
            text: String::new(),
            regex_case_insensitive: config.regex_case_insensitive,
            author_min,
            author_max,
            selected_years: table.map(|t| t.years().clone()).unwrap_or_default(),
            selected_roles: BTreeSet::new(),
            max_results: config.default_max_results,
        }
    }
}

// ---------------------------------------------------------------------------
// Search status
// ---------------------------------------------------------------------------

/// Outcome of the most recent search action.
#[derive(Debug, Clone, Default)]
pub enum SearchStatus {
    /// No search has been run on the current dataset.
    #[default]
    NotSearched,
    /// A search ran and nothing matched.
    NoMatch,
    Found(QueryOutcome),
}

/// Message for the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ExplorerConfig,

    /// Loaded dataset, shared read-only.
    pub dataset: Option<Arc<ArticleTable>>,

    pub controls: SearchControls,

    pub status: SearchStatus,

    /// Error or notice shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        let controls = SearchControls::new(&config, None);
        Self {
            config,
            dataset: None,
            controls,
            status: SearchStatus::NotSearched,
            status_message: None,
        }
    }

    /// Install a dataset and reset selections and results.
    pub fn set_dataset(&mut self, dataset: Arc<ArticleTable>) {
        self.controls = SearchControls::new(&self.config, Some(&dataset));
        self.dataset = Some(dataset);
        self.status = SearchStatus::NotSearched;
        self.status_message = None;
    }

    /// Role labels in configuration order, restricted to the selected ones.
    fn selected_roles(&self) -> Vec<String> {
        self.config
            .role_labels
            .iter()
            .filter(|label| self.controls.selected_roles.contains(*label))
            .cloned()
            .collect()
    }

    pub fn query_params(&self) -> QueryParams {
        let c = &self.controls;
        let (lo, hi) = (c.author_min.min(c.author_max), c.author_min.max(c.author_max));
        QueryParams {
            criteria: FilterCriteria {
                author_range: lo..=hi,
                years: c.selected_years.clone(),
                roles: self.selected_roles(),
            },
            search: SearchQuery {
                field: c.field,
                mode: c.mode,
                text: c.text.clone(),
                case_insensitive: c.regex_case_insensitive,
            },
            max_results: c.max_results,
        }
    }

    /// Run the current selections against the dataset.
    pub fn run_search(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let outcome = run_query(dataset, &self.query_params());

        self.status_message = outcome
            .search_error
            .as_ref()
            .map(|e| StatusMessage::Error(format!("Invalid regular expression: {e}")));
        self.status = if outcome.assembly.is_empty() {
            SearchStatus::NoMatch
        } else {
            log::info!(
                "Search found {} articles, showing {}",
                outcome.assembly.matched_articles,
                outcome.assembly.articles.len()
            );
            SearchStatus::Found(outcome)
        };
    }

    /// Write the displayed articles to `path`. Returns the number of rows.
    pub fn export_results(&self, path: &Path) -> Result<usize, ExportError> {
        match (&self.dataset, &self.status) {
            (Some(dataset), SearchStatus::Found(outcome)) => {
                export_to_path(dataset, &outcome.assembly.articles, path)
            }
            (Some(dataset), _) => export_to_path(dataset, &[], path),
            (None, _) => Ok(0),
        }
    }

    pub fn toggle_year(&mut self, year: i32) {
        let years = &mut self.controls.selected_years;
        if !years.remove(&year) {
            years.insert(year);
        }
    }

    pub fn select_all_years(&mut self) {
        if let Some(ds) = &self.dataset {
            self.controls.selected_years = ds.years().clone();
        }
    }

    pub fn select_no_years(&mut self) {
        self.controls.selected_years.clear();
    }

    pub fn toggle_role(&mut self, label: &str) {
        let roles = &mut self.controls.selected_roles;
        if !roles.remove(label) {
            roles.insert(label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn state() -> AppState {
        let records = vec![
            Record {
                identifier: "10.1371/journal.pone.23000123".into(),
                title: "lung cancer study".into(),
                role: "first author".into(),
                ..Default::default()
            },
            Record {
                identifier: "10.1371/journal.pone.23000123".into(),
                title: "lung cancer study".into(),
                role: "corresponding author".into(),
                ..Default::default()
            },
        ];
        let mut state = AppState::new(ExplorerConfig::default());
        state.set_dataset(Arc::new(ArticleTable::from_records(records, 50)));
        state
    }

    #[test]
    fn test_not_searched_until_run() {
        let state = state();
        assert!(matches!(state.status, SearchStatus::NotSearched));
        assert_eq!(state.controls.selected_years, BTreeSet::from([2023]));
    }

    #[test]
    fn test_search_with_no_hits_is_distinct_from_not_searched() {
        let mut state = state();
        state.controls.text = "nothing like this".into();
        state.controls.field = Field::Title;
        state.run_search();
        assert!(matches!(state.status, SearchStatus::NoMatch));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_role_selection_narrows_roster() {
        let mut state = state();
        state.toggle_role("corresponding author");
        state.run_search();
        let SearchStatus::Found(outcome) = &state.status else {
            panic!("expected results");
        };
        assert_eq!(outcome.assembly.articles[0].roster.len(), 1);
        assert_eq!(outcome.assembly.articles[0].roster[0].role, "corresponding author");
    }

    #[test]
    fn test_invalid_regex_sets_message() {
        let mut state = state();
        state.controls.mode = SearchMode::Regex;
        state.controls.text = "(".into();
        state.run_search();
        assert!(matches!(state.status, SearchStatus::NoMatch));
        assert!(matches!(
            state.status_message,
            Some(StatusMessage::Error(ref msg)) if msg.contains("Invalid regular expression")
        ));
    }

    #[test]
    fn test_year_toggles() {
        let mut state = state();
        state.toggle_year(2023);
        assert!(state.controls.selected_years.is_empty());
        state.run_search();
        assert!(matches!(state.status, SearchStatus::NoMatch));

        state.select_all_years();
        state.run_search();
        assert!(matches!(state.status, SearchStatus::Found(_)));
    }

    #[test]
    fn test_swapped_author_bounds_are_ordered() {
        let mut state = state();
        state.controls.author_min = 5;
        state.controls.author_max = 2;
        assert_eq!(state.query_params().criteria.author_range, 2..=5);
    }
}
