//! Core types and dataset parsing for the IPCA dashboard.
//!
//! The IPCA (Índice de Preços ao Consumidor Amplo) dataset is a flat list of
//! monthly index variations keyed by year, month, category group, and region.
//! This crate owns the record type, the two wire formats it arrives in
//! (JSON API payload and the ETL's long-format CSV), and the label
//! normalization used to match free-text groups and regions.

pub mod month;
pub mod normalize;
pub mod record;
