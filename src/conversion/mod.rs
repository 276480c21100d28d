//! Conversion logic for the shift schedule converter.
//!
//! This module contains the pure transformation from decoded grids to output
//! records: shift cell classification, task code discovery in free-form
//! lookup sheets, employee lookup parsing, record extraction, and the
//! download grid layout.

mod classifier;
mod convert;
mod download;
mod employees;
mod extractor;
mod task_codes;

pub use classifier::{Cutoffs, classify};
pub use convert::{ConversionOutput, convert};
pub use download::{DOWNLOAD_HEADER, build_download_grid};
pub use employees::resolve_employees;
pub use extractor::extract_records;
pub use task_codes::{KeywordRule, default_keyword_rules, resolve_task_codes};
