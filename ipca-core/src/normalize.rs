//! Label normalization for robust free-text matching.
//!
//! Dataset labels arrive with inconsistent casing and accents
//! ("Índice geral" vs "indice geral"). Matching is always done on the
//! normalized key; the original label is kept for display.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical matching key for a label: NFD decomposition with combining
/// marks removed, surrounding whitespace trimmed, lowercased.
pub fn normalize(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// `normalize` for possibly-absent labels. An absent label normalizes to
/// the empty key rather than failing, since upstream fields may be missing.
pub fn normalize_opt(label: Option<&str>) -> String {
    label.map(normalize).unwrap_or_default()
}
