use std::io::Write;
use std::path::Path;

use super::error::ExportError;
use super::model::{ArticleTable, Field};
use super::results::ArticleResult;

/// File name suggested in the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "plos_search_articles.csv";

const DERIVED_COLUMNS: [&str; 3] = ["AuthorCount", "Year", "AuthorCapped"];

/// Write one CSV row per article: the representative record's columns
/// followed by its derived attributes. Returns the number of rows written.
pub fn write_csv<W: Write>(
    table: &ArticleTable,
    results: &[ArticleResult],
    writer: W,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    let header = Field::ALL
        .iter()
        .map(|f| f.column_name())
        .chain(DERIVED_COLUMNS);
    writer.write_record(header)?;

    for result in results {
        let record = table.record(result.row);
        let derived = table.derived(result.row);
        let mut row: Vec<String> = Field::ALL
            .iter()
            .map(|f| f.value(record).to_string())
            .collect();
        row.push(derived.author_count.to_string());
        row.push(derived.year.map(|y| y.to_string()).unwrap_or_default());
        row.push(derived.author_count_capped.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(results.len())
}

/// Export `results` to a CSV file at `path`.
pub fn export_to_path(
    table: &ArticleTable,
    results: &[ArticleResult],
    path: &Path,
) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let written = write_csv(table, results, file)?;
    log::info!("Exported {written} articles to {}", path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use crate::data::results::assemble;

    #[test]
    fn test_one_row_per_article_with_derived_columns() {
        let records = vec![
            Record {
                identifier: "10.1371/journal.pone.23000123".into(),
                title: "Lung, cancer".into(),
                author: "Ann".into(),
                ..Default::default()
            },
            Record {
                identifier: "10.1371/journal.pone.23000123".into(),
                title: "Lung, cancer".into(),
                author: "Bob".into(),
                ..Default::default()
            },
            Record {
                identifier: "not-a-doi".into(),
                title: "Other".into(),
                author: "Cy".into(),
                ..Default::default()
            },
        ];
        let table = ArticleTable::from_records(records, 50);
        let assembly = assemble(&table, &[true, true, true], 10);

        let mut out = Vec::new();
        let written = write_csv(&table, &assembly.articles, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(written, 2);
        assert_eq!(
            lines[0],
            "DOI,Title,Author,Affiliation,Role,Subjects,Keywords,Abstract,AuthorCount,Year,AuthorCapped"
        );
        assert_eq!(lines[1], "10.1371/journal.pone.23000123,\"Lung, cancer\",Ann,,,,,,2,2023,2");
        assert_eq!(lines[2], "not-a-doi,Other,Cy,,,,,,1,,1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_into_missing_directory_reports_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let table = ArticleTable::from_records(Vec::new(), 50);

        let err = export_to_path(&table, &[], &path).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Create { path: ref p, ref source }
                if p == &path && source.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
