use crate::models::BookEntry;

/// Lower-case and trim a genre or filter string so both sides compare alike.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Derive the displayed list from the authoritative list.
///
/// An empty filter returns the list unchanged. Anything else keeps the
/// entries whose normalized genre contains the normalized filter, in their
/// original order. A whitespace-only filter normalizes to `""`, which every
/// genre contains.
pub fn apply_filter(kept: &[BookEntry], filter: &str) -> Vec<BookEntry> {
    if filter.is_empty() {
        return kept.to_vec();
    }

    let needle = normalize(filter);
    kept.iter()
        .filter(|entry| normalize(&entry.genre).contains(&needle))
        .cloned()
        .collect()
}
