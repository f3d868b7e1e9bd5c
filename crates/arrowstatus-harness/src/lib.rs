//! Tooling around `arrowstatus-core`.
//!
//! This crate provides:
//! - Label-style configuration from the `ARROWSTATUS_LABELS` environment variable
//! - Inspection of packed status records into explainable reports
//! - Structured JSONL logging for harness runs

#![forbid(unsafe_code)]

pub mod config;
pub mod inspect;
pub mod structured_log;

pub use config::{LABELS_ENV, label_style, resolve_label_style};
pub use inspect::{InspectError, InspectReport};
