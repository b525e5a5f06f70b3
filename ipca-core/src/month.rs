//! Calendar-month helpers.
//!
//! The dashboard works in whole calendar months: every derived series is
//! keyed by "YYYY-MM" and every hierarchy region carries a fixed 12-slot
//! month list in calendar order.

use crate::normalize::normalize;
use chrono::NaiveDate;

/// Months per calendar year; the fixed fan-out of every region node in the
/// sunburst hierarchy.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Portuguese month names in calendar order, as displayed in the sunburst.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Normalized 3-letter month prefixes, parallel to `MONTH_NAMES`.
const MONTH_PREFIXES: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Display name for a 1-based month number.
pub fn month_name(mes: u32) -> Option<&'static str> {
    MONTH_NAMES.get(mes.checked_sub(1)? as usize).copied()
}

/// Fold a free-text month label (number, full name, or abbreviation) into
/// a 1-based month number. Returns None for unrecognized labels.
pub fn month_from_label(label: &str) -> Option<u32> {
    let trimmed = label.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        return (1..=MONTHS_PER_YEAR).contains(&n).then_some(n);
    }
    let key = normalize(trimmed);
    MONTH_PREFIXES
        .iter()
        .position(|prefix| key.starts_with(prefix))
        .map(|i| i as u32 + 1)
}

/// "YYYY-MM" key for a (year, month) pair; zero-padded, sorts chronologically.
pub fn date_key(ano: i32, mes: u32) -> String {
    format!("{ano}-{mes:02}")
}

/// Calendar-month instant (first of the month). None for invalid months.
pub fn first_of_month(ano: i32, mes: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(ano, mes, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_month_from_label_numeric() {
        assert_eq!(month_from_label("3"), Some(3));
        assert_eq!(month_from_label("12"), Some(12));
        assert_eq!(month_from_label("0"), None);
        assert_eq!(month_from_label("13"), None);
    }

    #[test]
    fn test_month_from_label_text() {
        assert_eq!(month_from_label("Março"), Some(3));
        assert_eq!(month_from_label("marco"), Some(3));
        assert_eq!(month_from_label("FEV"), Some(2));
        assert_eq!(month_from_label("dezembro"), Some(12));
        assert_eq!(month_from_label("not-a-month"), None);
    }

    #[test]
    fn test_date_key_padding() {
        assert_eq!(date_key(2024, 1), "2024-01");
        assert_eq!(date_key(2024, 11), "2024-11");
        // zero-padding keeps lexicographic order chronological
        assert!(date_key(2024, 2) < date_key(2024, 10));
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(
            first_of_month(2024, 2),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(first_of_month(2024, 13), None);
    }
}
