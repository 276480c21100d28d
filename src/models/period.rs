//! Schedule period model.
//!
//! A schedule covers one calendar month. The [`Period`] type carries the
//! validated year and month and knows how many day columns the month has.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConverterError, ConverterResult};

/// Returns the number of days in the given month, or `None` for an invalid month.
///
/// # Example
///
/// ```
/// use shift_converter::models::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2023, 2), Some(28));
/// assert_eq!(days_in_month(2023, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next_first - first).num_days()).ok()
}

/// The calendar month a schedule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
    days: u32,
}

impl Period {
    /// Creates a period, rejecting months outside 1..=12 and years outside
    /// the supported calendar range.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_converter::models::Period;
    ///
    /// let period = Period::new(2024, 2).unwrap();
    /// assert_eq!(period.days(), 29);
    /// assert!(Period::new(2024, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> ConverterResult<Self> {
        let days =
            days_in_month(year, month).ok_or(ConverterError::InvalidPeriod { year, month })?;
        Ok(Self { year, month, days })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// The date for a 1-based day of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}
