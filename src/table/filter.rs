//! Search filter stage
//!
//! Reduces the full record set to the rows whose text fields contain the
//! query, ignoring case. Relative order is preserved.

use crate::types::Record;

/// Case-insensitive substring match.
///
/// Uses `unicase` for Unicode case folding (German ß, Turkish i, etc.).
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// Whether any of the record's fields matches the query.
///
/// The id is compared in its decimal form, the way the feed serves it.
pub fn record_matches(record: &Record, query: &str) -> bool {
    record
        .text_fields()
        .iter()
        .any(|field| contains_case_insensitive(field, query))
        || contains_case_insensitive(&record.id.to_string(), query)
}

/// Filter records by query. An empty query matches everything.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record_matches(record, query))
        .collect()
}
