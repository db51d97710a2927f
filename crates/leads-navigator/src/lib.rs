//! Succession planning around the LEADS leadership capability framework.
//!
//! [`leads`] holds the pure scoring engine; [`candidates`] stores candidate records and applies
//! assessments; [`reports`] summarizes the stored records.

pub mod candidates;
pub mod config;
pub mod error;
pub mod leads;
pub mod reports;
pub mod telemetry;
