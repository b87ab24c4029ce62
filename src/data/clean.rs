use super::model::{Dataset, RawTable, SCHEMA};

// ---------------------------------------------------------------------------
// Missing values and row cleaning
// ---------------------------------------------------------------------------

/// Number of missing cells per schema column, in schema order.
pub fn missing_counts(table: &RawTable) -> Vec<(String, usize)> {
    SCHEMA
        .iter()
        .map(|(col, _)| {
            let n = table.rows.iter().filter(|r| r.is_missing(col)).count();
            (col.to_string(), n)
        })
        .collect()
}

/// Drop every row with at least one missing field, keeping file order.
pub fn drop_incomplete(table: RawTable) -> Dataset {
    let before = table.rows.len();
    let dataset = Dataset::new(table.rows.into_iter().filter_map(|r| r.complete()).collect());
    if dataset.len() < before {
        log::debug!("Dropped {} incomplete rows", before - dataset.len());
    }
    dataset
}
