use std::collections::HashMap;

use super::model::{ArticleTable, AuthorEntry};

/// One surviving article: its representative row and the roster of authors
/// whose rows passed the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResult {
    /// First matching row of the article, in table order.
    pub row: usize,
    pub roster: Vec<AuthorEntry>,
}

/// Grouped result of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub articles: Vec<ArticleResult>,
    /// Distinct matching articles before truncation.
    pub matched_articles: usize,
    pub matched_rows: usize,
}

impl Assembly {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Deduplicate the masked rows to one entry per article, keep the first
/// `limit` articles, and attach each article's filtered roster.
///
/// Rosters only list rows that passed `mask`, so a role filter can hide some
/// of an article's authors.
pub fn assemble(table: &ArticleTable, mask: &[bool], limit: usize) -> Assembly {
    debug_assert_eq!(mask.len(), table.len());

    // article id -> position in `articles`, or None once past the limit
    let mut slots: HashMap<usize, Option<usize>> = HashMap::new();
    let mut articles: Vec<ArticleResult> = Vec::new();
    let mut matched_rows = 0;

    for row in mask.iter().enumerate().filter(|(_, m)| **m).map(|(row, _)| row) {
        matched_rows += 1;
        let article = table.article_id(row);
        let slot = *slots.entry(article).or_insert_with(|| {
            (articles.len() < limit).then(|| {
                articles.push(ArticleResult {
                    row,
                    roster: Vec::new(),
                });
                articles.len() - 1
            })
        });
        if let Some(index) = slot {
            articles[index].roster.push(table.record(row).into());
        }
    }

    Assembly {
        matched_articles: slots.len(),
        matched_rows,
        articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn table() -> ArticleTable {
        let rows = [
            ("d1", "A", "Ann", "first author"),
            ("d2", "B", "Bea", "first author"),
            ("d1", "A", "Al", "corresponding author"),
            ("d3", "C", "Cy", "first author"),
            ("d2", "B", "Bo", "corresponding author"),
        ];
        let records = rows
            .iter()
            .map(|(doi, title, author, role)| Record {
                identifier: doi.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                role: role.to_string(),
                ..Default::default()
            })
            .collect();
        ArticleTable::from_records(records, 50)
    }

    fn authors(result: &ArticleResult) -> Vec<&str> {
        result.roster.iter().map(|a| a.author.as_str()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let table = table();
        let assembly = assemble(&table, &[true; 5], 10);

        let rows: Vec<usize> = assembly.articles.iter().map(|a| a.row).collect();
        assert_eq!(rows, vec![0, 1, 3]);
        assert_eq!(authors(&assembly.articles[0]), vec!["Ann", "Al"]);
        assert_eq!(authors(&assembly.articles[1]), vec!["Bea", "Bo"]);
        assert_eq!(assembly.matched_articles, 3);
        assert_eq!(assembly.matched_rows, 5);
    }

    #[test]
    fn test_limit_truncates_articles_but_counts_all() {
        let table = table();
        let assembly = assemble(&table, &[true; 5], 2);

        assert_eq!(assembly.articles.len(), 2);
        assert_eq!(assembly.matched_articles, 3);
        // roster of a kept article still collects rows seen after the limit
        assert_eq!(authors(&assembly.articles[1]), vec!["Bea", "Bo"]);
    }

    #[test]
    fn test_roster_reflects_only_masked_rows() {
        let table = table();
        let mask = [false, true, true, false, false];
        let assembly = assemble(&table, &mask, 10);

        assert_eq!(assembly.articles.len(), 2);
        assert_eq!(assembly.articles[0].row, 1);
        assert_eq!(authors(&assembly.articles[0]), vec!["Bea"]);
        assert_eq!(assembly.articles[1].row, 2);
        assert_eq!(authors(&assembly.articles[1]), vec!["Al"]);
        assert_eq!(assembly.articles[1].roster[0].role, "corresponding author");
    }

    #[test]
    fn test_empty_mask_yields_empty_assembly() {
        let table = table();
        let assembly = assemble(&table, &[false; 5], 10);
        assert!(assembly.is_empty());
        assert_eq!(assembly.matched_articles, 0);
    }
}
