//! Data derivation layer for the campaign dashboard.
//!
//! This crate turns the campaign plan into chartable data and back out
//! into reports:
//! - `generator`: randomized daily reach/engagement and stock-volume series
//! - `aggregate`: campaign-wide totals and scalar KPI rollups
//! - `project`: channel-selection re-projection of the dataset
//! - `countup`: ease-out interpolation for animated KPI values
//! - `report`: the channel-performance CSV file contract
//! - `scenario`: the reference campaign dataset

pub mod aggregate;
pub mod countup;
pub mod generator;
pub mod project;
pub mod report;
pub mod scenario;
