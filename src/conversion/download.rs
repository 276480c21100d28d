//! Download grid construction.

use crate::models::{Grid, OutputRecord};

/// Header labels of the download sheet.
pub const DOWNLOAD_HEADER: [&str; 3] = ["date", "employeeId", "taskCode"];

/// Lays out records as a grid ready for encoding, header first.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::build_download_grid;
/// use shift_converter::models::OutputRecord;
/// use chrono::NaiveDate;
///
/// let records = vec![OutputRecord {
///     date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     employee_id: "E001".to_string(),
///     task_code: "T-E".to_string(),
/// }];
/// let grid = build_download_grid(&records);
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid[1], vec!["2024-02-01", "E001", "T-E"]);
/// ```
pub fn build_download_grid(records: &[OutputRecord]) -> Grid {
    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(DOWNLOAD_HEADER.iter().map(|label| label.to_string()).collect());

    grid.extend(records.iter().map(|record| {
        vec![
            record.date.format("%Y-%m-%d").to_string(),
            record.employee_id.clone(),
            record.task_code.clone(),
        ]
    }));

    grid
}
