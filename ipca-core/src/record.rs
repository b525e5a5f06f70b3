//! The IPCA record type and its two wire formats.
//!
//! Records arrive either as the JSON array served by `/api/ipca` or as the
//! tab-separated long-format file produced by the ETL pipeline
//! (`ano`, `mes`, `grupo`, `regiao`, `variacao`). The `variacao` field is
//! tolerant: JSON numbers, strings (including comma decimals), and missing
//! values are all accepted, with unparseable values carried as `None` so
//! that aggregation can exclude them instead of coercing them to zero.

use crate::month;
use crate::normalize::normalize;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// The headline category: the overall index, as opposed to its
/// per-category breakdowns. Matched via `normalize`, never exact.
pub const HEADLINE_GROUP: &str = "Índice geral";

/// The national aggregate region, the dashboard's baseline series.
pub const NATIONAL_REGION: &str = "Brasil";

/// A single monthly index variation for one (group, region) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub ano: i32,
    pub mes: u32,
    pub grupo: String,
    pub regiao: String,
    #[serde(default, deserialize_with = "deserialize_variation")]
    pub variacao: Option<f64>,
}

impl IndexRecord {
    /// True if this record carries the overall index rather than a
    /// category breakdown.
    pub fn is_headline_group(&self) -> bool {
        normalize(&self.grupo) == normalize(HEADLINE_GROUP)
    }

    /// True if this record is for the national aggregate region.
    pub fn is_national_region(&self) -> bool {
        normalize(&self.regiao) == normalize(NATIONAL_REGION)
    }

    /// "YYYY-MM" key for this record's month.
    pub fn date_key(&self) -> String {
        month::date_key(self.ano, self.mes)
    }

    /// Calendar-month instant, None when (ano, mes) is not a valid date.
    pub fn first_of_month(&self) -> Option<NaiveDate> {
        month::first_of_month(self.ano, self.mes)
    }
}

/// Accepts a JSON number, a numeric string (comma or dot decimal), or
/// null/absent. Anything unparseable becomes `None`.
fn deserialize_variation<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Number(n)) if n.is_finite() => Some(n),
        Some(Raw::Number(_)) => None,
        Some(Raw::Text(s)) => parse_variation(&s),
        None => None,
    })
}

/// Parse a variation string, tolerating the comma decimals the ETL's raw
/// inputs use.
fn parse_variation(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse the JSON array served by the dataset endpoint.
pub fn records_from_json(body: &str) -> anyhow::Result<Vec<IndexRecord>> {
    let records: Vec<IndexRecord> =
        serde_json::from_str(body).context("failed to parse IPCA dataset JSON")?;
    Ok(records)
}

/// One row of the ETL long-format file, before variation parsing.
#[derive(Debug, Deserialize)]
struct CsvRow {
    ano: i32,
    mes: u32,
    grupo: String,
    regiao: String,
    variacao: String,
}

/// Parse the ETL's tab-separated long-format output. Malformed rows are
/// skipped with a warning; unparseable variations become `None`.
pub fn records_from_csv(body: &str) -> anyhow::Result<Vec<IndexRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for result in rdr.deserialize::<CsvRow>() {
        match result {
            Ok(row) => {
                if !(1..=month::MONTHS_PER_YEAR).contains(&row.mes) {
                    log::warn!("skipping row with invalid month {}", row.mes);
                    continue;
                }
                records.push(IndexRecord {
                    ano: row.ano,
                    mes: row.mes,
                    grupo: row.grupo.trim().to_string(),
                    regiao: row.regiao.trim().to_string(),
                    variacao: parse_variation(&row.variacao),
                });
            }
            Err(err) => {
                log::warn!("skipping malformed dataset row: {err}");
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_number_and_string_variation() {
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"Índice geral","regiao":"Brasil","variacao":0.5},
            {"ano":2024,"mes":2,"grupo":"Índice geral","regiao":"Brasil","variacao":"0.8"}
        ]"#;
        let records = records_from_json(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].variacao, Some(0.5));
        assert_eq!(records[1].variacao, Some(0.8));
    }

    #[test]
    fn test_json_invalid_variation_becomes_none() {
        let body = r#"[
            {"ano":2024,"mes":1,"grupo":"Alimentação","regiao":"Brasil","variacao":"n/a"},
            {"ano":2024,"mes":1,"grupo":"Transportes","regiao":"Brasil","variacao":null},
            {"ano":2024,"mes":1,"grupo":"Habitação","regiao":"Brasil"}
        ]"#;
        let records = records_from_json(body).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.variacao.is_none()));
    }

    #[test]
    fn test_csv_long_format() {
        let body = "ano\tmes\tgrupo\tregiao\tvariacao\n\
                    2024\t1\tÍndice geral\tBrasil\t0.5\n\
                    2024\t2\tÍndice geral\tBrasil\t0,8\n";
        let records = records_from_csv(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].variacao, Some(0.5));
        // comma decimal from the raw extract
        assert_eq!(records[1].variacao, Some(0.8));
    }

    #[test]
    fn test_csv_skips_invalid_month() {
        let body = "ano\tmes\tgrupo\tregiao\tvariacao\n\
                    2024\t13\tÍndice geral\tBrasil\t0.5\n\
                    2024\t3\tÍndice geral\tBrasil\t0.2\n";
        let records = records_from_csv(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mes, 3);
    }

    #[test]
    fn test_label_matching_is_normalized() {
        let record = IndexRecord {
            ano: 2024,
            mes: 1,
            grupo: "  índice GERAL ".to_string(),
            regiao: "BRASIL".to_string(),
            variacao: Some(0.1),
        };
        assert!(record.is_headline_group());
        assert!(record.is_national_region());
    }

    #[test]
    fn test_date_helpers() {
        let record = IndexRecord {
            ano: 2024,
            mes: 2,
            grupo: HEADLINE_GROUP.to_string(),
            regiao: NATIONAL_REGION.to_string(),
            variacao: Some(0.8),
        };
        assert_eq!(record.date_key(), "2024-02");
        assert_eq!(
            record.first_of_month(),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }
}
