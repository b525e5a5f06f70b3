//! Monthly headline series and KPI summaries.
//!
//! A series is the headline-group variation for one region, averaged per
//! calendar month and ordered chronologically. The national series
//! (region "Brasil") is the dashboard's baseline; a second series is
//! derived for the selected region.

use crate::aggregate::{aggregate_by, Reduce};
use chrono::NaiveDate;
use ipca_core::month;
use ipca_core::normalize::normalize;
use ipca_core::record::{IndexRecord, NATIONAL_REGION};

/// One sample of a monthly series. `date` is the calendar-month instant
/// (first of the month); `date_key` is its "YYYY-MM" label.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date_key: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// Headline series for one region, ascending by date. Months whose every
/// variation is invalid, and (year, month) pairs that don't form a valid
/// date, are dropped rather than rendered as broken samples.
pub fn region_series(records: &[IndexRecord], region: &str) -> Vec<SeriesPoint> {
    let region_key = normalize(region);
    let matching: Vec<&IndexRecord> = records
        .iter()
        .filter(|r| r.is_headline_group() && normalize(&r.regiao) == region_key)
        .collect();

    let buckets = aggregate_by(&matching, |r| (r.ano, r.mes), Reduce::Mean);
    buckets
        .into_iter()
        .filter_map(|((ano, mes), value)| {
            let value = value?;
            let date = month::first_of_month(ano, mes)?;
            Some(SeriesPoint {
                date_key: month::date_key(ano, mes),
                date,
                value,
            })
        })
        .collect()
}

/// The national baseline series.
pub fn national_series(records: &[IndexRecord]) -> Vec<SeriesPoint> {
    region_series(records, NATIONAL_REGION)
}

/// KPI summary of a series: most recent value, maximum, minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub last: f64,
    pub max: f64,
    pub min: f64,
}

/// Summarize a chronologically ordered series. None for an empty series.
pub fn summarize(series: &[SeriesPoint]) -> Option<SeriesSummary> {
    let last = series.last()?.value;
    let max = series.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let min = series.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    Some(SeriesSummary { last, max, min })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipca_core::record::records_from_json;

    #[test]
    fn test_national_series_end_to_end() {
        // The reference scenario: two headline records, one with a string
        // variation, must produce an ordered two-point series.
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":"0.5"},
            {"ano":2024,"mes":2,"grupo":"Índice geral","regiao":"Brasil","variacao":"0.8"}
        ]"#;
        let records = records_from_json(body).unwrap();
        let series = national_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date_key, "2024-01");
        assert_eq!(series[0].value, 0.5);
        assert_eq!(series[1].date_key, "2024-02");
        assert_eq!(series[1].value, 0.8);

        let summary = summarize(&series).unwrap();
        assert_eq!(summary.last, 0.8);
        assert_eq!(summary.max, 0.8);
        assert_eq!(summary.min, 0.5);
    }

    #[test]
    fn test_series_strictly_increasing_in_date() {
        let body = r#"[
            {"ano":2024,"mes":3,"grupo":"Índice geral","regiao":"Brasil","variacao":0.3},
            {"ano":2023,"mes":12,"grupo":"Índice geral","regiao":"Brasil","variacao":0.6},
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":0.4}
        ]"#;
        let records = records_from_json(body).unwrap();
        let series = national_series(&records);
        assert_eq!(series.len(), 3);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(series[0].date_key, "2023-12");
    }

    #[test]
    fn test_non_headline_and_other_regions_excluded() {
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":0.5},
            {"ano":2024,"mes":1,"grupo":"Alimentação","regiao":"Brasil","variacao":9.9},
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"São Paulo (SP)","variacao":9.9}
        ]"#;
        let records = records_from_json(body).unwrap();
        let series = national_series(&records);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 0.5);
    }

    #[test]
    fn test_region_series_matches_normalized() {
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"índice GERAL","regiao":"SÃO PAULO (SP)","variacao":0.7}
        ]"#;
        let records = records_from_json(body).unwrap();
        let series = region_series(&records, "São Paulo (SP)");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 0.7);
    }

    #[test]
    fn test_invalid_only_month_dropped() {
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":"bad"},
            {"ano":2024,"mes":2,"grupo":"Índice geral","regiao":"Brasil","variacao":0.2}
        ]"#;
        let records = records_from_json(body).unwrap();
        let series = national_series(&records);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date_key, "2024-02");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), None);
    }
}
