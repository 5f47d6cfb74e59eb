//! covid-dash-rs: a multi-page COVID-19 statistics dashboard for Greece.
//!
//! This crate loads pre-aggregated CSV datasets, reshapes them into
//! chart-ready narrow tables, builds uniformly themed chart objects, and
//! composes them into static page layouts addressed by a path router.
//! Rendering is left to the embedding host; pages serialize to JSON.

pub mod chart;
pub mod core;
pub mod error;
pub mod page;
pub mod pages;
pub mod router;
pub mod telemetry;

pub use chart::{Chart, Theme, normalize, normalize_with_margin};
pub use crate::core::{Cell, Table};
pub use error::{DashError, DashResult, ParseError};
pub use page::{Block, Page};
pub use router::Route;
