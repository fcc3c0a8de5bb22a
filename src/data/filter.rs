use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::ArticleTable;

// ---------------------------------------------------------------------------
// Filter criteria: author range, years, roles
// ---------------------------------------------------------------------------

/// The non-text filter selections applied on every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive bounds on the capped author count.
    pub author_range: RangeInclusive<u32>,
    /// Selected publication years. Empty selects nothing.
    pub years: BTreeSet<i32>,
    /// Role labels; a row passes if its role contains any of them.
    /// Empty disables the role filter.
    pub roles: Vec<String>,
}

impl FilterCriteria {
    /// Every year present in `table`, the full author range, no role filter.
    pub fn permissive(table: &ArticleTable) -> Self {
        Self {
            author_range: 1..=table.capped_max(),
            years: table.years().clone(),
            roles: Vec::new(),
        }
    }
}

/// Return a mask over all rows of `table`, true where the row passes every
/// criterion.
///
/// * The capped author count lies in `author_range`.
/// * The year is in `years`; rows without a year never pass, and an empty
///   year set hides everything.
/// * If `roles` is non-empty, the role text contains one of the labels.
pub fn predicate_mask(table: &ArticleTable, criteria: &FilterCriteria) -> Vec<bool> {
    (0..table.len())
        .map(|row| {
            let derived = table.derived(row);
            if !criteria.author_range.contains(&derived.author_count_capped) {
                return false;
            }
            match derived.year {
                Some(year) if criteria.years.contains(&year) => {}
                _ => return false,
            }
            criteria.roles.is_empty() || role_matches(&table.record(row).role, &criteria.roles)
        })
        .collect()
}

fn role_matches(role: &str, selected: &[String]) -> bool {
    selected.iter().any(|label| role.contains(label.as_str()))
}
