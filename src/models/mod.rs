//! Core data models for the shift schedule converter.
//!
//! This module contains all the domain models used throughout the converter.

mod employee_mapping;
mod grid;
mod period;
mod record;
mod shift_bucket;
mod task_codes;

pub use employee_mapping::EmployeeMapping;
pub use grid::{Grid, cell};
pub use period::{Period, days_in_month};
pub use record::OutputRecord;
pub use shift_bucket::ShiftBucket;
pub use task_codes::{FallbackCodes, TaskCodeSet};
