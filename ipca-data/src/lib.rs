//! Derived data for the IPCA dashboard.
//!
//! This crate turns the flat record snapshot into the per-chart inputs:
//! grouped/reduced buckets, chronological series with KPI summaries, and
//! the year/month/region selection that scopes them. Everything here is a
//! pure recomputable value; nothing is mutated after construction.

pub mod aggregate;
pub mod select;
pub mod series;
