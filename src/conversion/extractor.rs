//! Record extraction from the master schedule grid.
//!
//! The master grid has one employee per row (name in column 0, row 0 is the
//! header) and one day per column, with column `d` holding day `d` of the
//! month. Every cell carrying a valid shift time becomes one output record.

use crate::models::{
    EmployeeMapping, FallbackCodes, Grid, OutputRecord, Period, TaskCodeSet, cell,
};

use super::Cutoffs;

/// Extracts one record per valid shift cell in the master grid.
///
/// Records come out row-major: all of one employee's days (ascending) before
/// the next employee. Names missing from `employees` pass through as their
/// own ID, and buckets missing from `task_codes` use `fallback`.
///
/// # Arguments
///
/// * `master` - The decoded schedule sheet
/// * `employees` - Name to ID mapping from the employee lookup
/// * `task_codes` - Task codes from the task code lookup
/// * `fallback` - Codes used for buckets `task_codes` does not cover
/// * `period` - The month the schedule covers
/// * `cutoffs` - Shift time thresholds
///
/// # Example
///
/// ```
/// use shift_converter::conversion::{Cutoffs, extract_records};
/// use shift_converter::models::{EmployeeMapping, FallbackCodes, Period, TaskCodeSet};
///
/// let master = vec![
///     vec!["Name".to_string(), "1".to_string(), "2".to_string()],
///     vec!["Alice".to_string(), "930".to_string(), "休".to_string()],
/// ];
/// let records = extract_records(
///     &master,
///     &EmployeeMapping::default(),
///     &TaskCodeSet::default(),
///     &FallbackCodes::from_marker("管理", "早番", "中番", "遅番"),
///     Period::new(2024, 2).unwrap(),
///     Cutoffs::parse("1050", "1150").unwrap(),
/// );
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].date.to_string(), "2024-02-01");
/// assert_eq!(records[0].employee_id, "Alice");
/// assert_eq!(records[0].task_code, "管理早番");
/// ```
pub fn extract_records(
    master: &Grid,
    employees: &EmployeeMapping,
    task_codes: &TaskCodeSet,
    fallback: &FallbackCodes,
    period: Period,
    cutoffs: Cutoffs,
) -> Vec<OutputRecord> {
    let mut records = Vec::new();

    for row in master.iter().skip(1) {
        let name = cell(row, 0);
        if name.is_empty() {
            continue;
        }
        let employee_id = employees.id_for(name);

        let last_column = row.len().saturating_sub(1).min(period.days() as usize);
        for day in 1..=last_column {
            let Some(bucket) = cutoffs.classify(&row[day]) else {
                continue;
            };
            let Some(date) = period.date(day as u32) else {
                continue;
            };

            let task_code = task_codes
                .code_for(bucket)
                .unwrap_or_else(|| fallback.code_for(bucket));

            records.push(OutputRecord {
                date,
                employee_id: employee_id.to_string(),
                task_code: task_code.to_string(),
            });
        }
    }

    records
}
