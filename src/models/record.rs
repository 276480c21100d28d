//! Output record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee working one shift on one day.
///
/// Serialized with the camelCase keys downstream consumers expect.
///
/// # Example
///
/// ```
/// use shift_converter::models::OutputRecord;
/// use chrono::NaiveDate;
///
/// let record = OutputRecord {
///     date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
///     employee_id: "E001".to_string(),
///     task_code: "T-EARLY".to_string(),
/// };
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["date"], "2024-02-09");
/// assert_eq!(json["employeeId"], "E001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The resolved employee ID, or the display name when unmapped.
    pub employee_id: String,
    /// The task code for the shift bucket.
    pub task_code: String,
}
