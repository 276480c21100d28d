//! Shift Schedule Converter
//!
//! This crate turns a monthly shift-schedule spreadsheet into a flat list of
//! (date, employee ID, task code) records. Employee IDs and task codes come
//! from two lookup sheets fetched from shared spreadsheet links; shift times
//! are bucketed into early, middle and late shifts by configurable cutoffs.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod models;
pub mod sheets;
