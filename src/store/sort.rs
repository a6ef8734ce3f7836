use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{BookEntry, SortDirection};

/// Compare two titles the way a reader expects a shelf to be ordered.
///
/// The primary key drops accents and case, so `Émile` files under `e`.
/// Ties go first to the accented spelling after the plain one, then
/// lowercase before uppercase, and finally code point order so the result is
/// total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| lowercase_first(a, b))
        .then_with(|| a.cmp(b))
}

/// Lower-cased base letters with combining marks stripped.
fn primary_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

/// Lower-cased decomposed form, marks included.
fn accent_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

fn lowercase_first(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        let rank = y.is_lowercase().cmp(&x.is_lowercase());
        if rank != Ordering::Equal {
            return rank;
        }
    }
    Ordering::Equal
}

/// Flip the direction and return a sorted copy of `list` in the new
/// direction. The input is never reordered in place.
pub fn toggle_sort(
    list: &[BookEntry],
    direction: SortDirection,
) -> (Vec<BookEntry>, SortDirection) {
    let next = direction.flipped();
    let mut sorted = list.to_vec();
    match next {
        SortDirection::Ascending => {
            sorted.sort_by(|a, b| compare_titles(&a.title, &b.title));
        }
        SortDirection::Descending => {
            sorted.sort_by(|a, b| compare_titles(&b.title, &a.title));
        }
    }
    (sorted, next)
}
