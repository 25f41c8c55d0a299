//! Earthquake catalogue comparison.
//!
//! Loads USGS-style CSV catalogues, projects typed columns out of them,
//! buckets magnitudes into severity categories and renders comparison charts.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
