use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::LoadError;
use super::model::{ArticleTable, Field, Record};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and derive an article table from a CSV file.
///
/// The header must name every [`Field`] column (`DOI` may also be spelled
/// `identifier`). Additional columns are ignored.
pub fn load_file(path: &Path, author_cap: u32) -> Result<ArticleTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file, author_cap)?;
    log::info!(
        "Loaded {} author rows / {} articles from {} (years: {:?})",
        table.len(),
        table.article_count(),
        path.display(),
        table.years()
    );
    Ok(table)
}

/// Load and derive an article table from any CSV source.
pub fn load_reader<R: Read>(reader: R, author_cap: u32) -> Result<ArticleTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers().map_err(LoadError::Header)?.clone();

    for field in Field::ALL {
        let present = headers
            .iter()
            .any(|h| h == field.column_name() || field.aliases().contains(&h));
        if !present {
            return Err(LoadError::MissingColumn(field.column_name().to_string()));
        }
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| LoadError::Malformed {
            row: index + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(ArticleTable::from_records(records, author_cap))
}

// ---------------------------------------------------------------------------
// Load-once cache
// ---------------------------------------------------------------------------

/// Memoizes the derived table for one input file.
///
/// The backing file is treated as static for the lifetime of the cache, so
/// the first successful [`TableCache::get`] is returned for every later call.
#[derive(Debug)]
pub struct TableCache {
    path: PathBuf,
    author_cap: u32,
    table: OnceCell<Arc<ArticleTable>>,
}

impl TableCache {
    pub fn new(path: impl Into<PathBuf>, author_cap: u32) -> Self {
        Self {
            path: path.into(),
            author_cap,
            table: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached table, loading it on first use.
    pub fn get(&self) -> Result<Arc<ArticleTable>, LoadError> {
        self.table
            .get_or_try_init(|| load_file(&self.path, self.author_cap).map(Arc::new))
            .cloned()
    }
}
