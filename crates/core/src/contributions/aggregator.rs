//! Pure aggregation of contribution rows by jar.

use std::collections::HashMap;

use super::contributions_model::ContributionRow;

/// Aggregated contributions for a single jar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JarContributions {
    /// The raw rows, in input order. Order carries no semantic weight.
    pub contributions: Vec<ContributionRow>,
    /// Sum of the coerced amounts. Malformed amounts contribute exactly 0.
    pub total: f64,
}

/// Groups contribution rows by jar id and sums per-jar totals.
///
/// Pure function over its inputs: no fetches, no side effects. Grouping is
/// stable (rows keep their input order within a group) and sums are
/// order-independent.
pub fn aggregate_by_jar(rows: Vec<ContributionRow>) -> HashMap<String, JarContributions> {
    let mut by_jar: HashMap<String, JarContributions> = HashMap::new();

    for row in rows {
        let entry = by_jar.entry(row.coinjar_id.clone()).or_default();
        entry.total += row.amount.as_f64();
        entry.contributions.push(row);
    }

    by_jar
}
