//! The filter/selection tuple shared by all charts.
//!
//! `Selection` is a plain value type: the reactive wrapper with Dioxus
//! signals lives in the UI crate. `None` in any field means "no filter".
//! Year and month scope the record snapshot; the region key scopes the bar
//! chart and adds the comparison series to the line chart, but does not
//! filter the snapshot itself.

use crate::aggregate::{available_months, available_years};
use ipca_core::record::IndexRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Dataset region key as resolved from a map boundary click.
    pub region: Option<String>,
}

impl Selection {
    /// Default selection after load: most recent available year and month,
    /// no region selected.
    pub fn default_for(records: &[IndexRecord]) -> Self {
        Selection {
            year: available_years(records).last().copied(),
            month: available_months(records).last().copied(),
            region: None,
        }
    }

    /// Whether a record passes the year/month filters.
    pub fn matches(&self, record: &IndexRecord) -> bool {
        self.year.map_or(true, |y| record.ano == y)
            && self.month.map_or(true, |m| record.mes == m)
    }

    /// The filtered view of the snapshot.
    pub fn filter<'a>(&self, records: &'a [IndexRecord]) -> Vec<&'a IndexRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
