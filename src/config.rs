use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::derive::DEFAULT_AUTHOR_CAP;
use crate::data::export::DEFAULT_EXPORT_FILE_NAME;

/// Config file picked up from the working directory when no `--config` is given.
pub const LOCAL_CONFIG_FILE: &str = "article-explorer.json";

pub const MIN_RESULTS: usize = 5;
pub const MAX_RESULTS: usize = 100;

/// Startup settings. Every key is optional in the JSON file.
///
/// ```json
/// {
///   "data_path": "plos_all_cleaned_up_to_67600.csv",
///   "author_cap": 50,
///   "default_author_range": [1, 10],
///   "default_max_results": 20,
///   "role_labels": ["first author", "corresponding author"],
///   "regex_case_insensitive": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub data_path: PathBuf,
    /// Author counts above this are bucketed together as "cap+".
    pub author_cap: u32,
    pub default_author_range: (u32, u32),
    pub default_max_results: usize,
    /// Labels offered by the role filter, matched as substrings of `Role`.
    pub role_labels: Vec<String>,
    pub regex_case_insensitive: bool,
    pub export_file_name: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("plos_all_cleaned_up_to_67600.csv"),
            author_cap: DEFAULT_AUTHOR_CAP,
            default_author_range: (1, 10),
            default_max_results: 20,
            role_labels: vec!["first author".to_string(), "corresponding author".to_string()],
            regex_case_insensitive: false,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Load from `path`, or from [`LOCAL_CONFIG_FILE`] if it exists, or fall
    /// back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let local = Path::new(LOCAL_CONFIG_FILE);
        let source = match path {
            Some(p) => Some(p),
            None if local.exists() => Some(local),
            None => None,
        };

        let config = match source {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(config.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp values into the ranges the UI can represent.
    pub fn normalized(mut self) -> Self {
        self.author_cap = self.author_cap.clamp(1, u32::MAX - 1);
        let top = self.author_cap + 1;
        let (lo, hi) = self.default_author_range;
        let (lo, hi) = (lo.clamp(1, top), hi.clamp(1, top));
        self.default_author_range = (lo.min(hi), lo.max(hi));
        self.default_max_results = self.default_max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        if self.export_file_name.is_empty() {
            self.export_file_name = DEFAULT_EXPORT_FILE_NAME.to_string();
        }
        self
    }
}
