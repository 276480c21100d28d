//! Task code models.
//!
//! [`TaskCodeSet`] is what the lookup sheet yielded, with any bucket possibly
//! missing. [`FallbackCodes`] is the complete set of textual defaults used
//! when a bucket is missing or the lookup sheet could not be fetched at all.

use serde::{Deserialize, Serialize};

use super::ShiftBucket;

/// Task codes resolved from a lookup sheet, one optional slot per bucket.
///
/// Empty strings are treated the same as missing codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCodeSet {
    /// Task code for the early shift.
    pub early: Option<String>,
    /// Task code for the middle shift.
    pub middle: Option<String>,
    /// Task code for the late shift.
    pub late: Option<String>,
}

impl TaskCodeSet {
    /// Returns the non-empty code for a bucket, if one was resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_converter::models::{ShiftBucket, TaskCodeSet};
    ///
    /// let codes = TaskCodeSet {
    ///     early: Some("T100".to_string()),
    ///     middle: Some(String::new()),
    ///     late: None,
    /// };
    /// assert_eq!(codes.code_for(ShiftBucket::Early), Some("T100"));
    /// assert_eq!(codes.code_for(ShiftBucket::Middle), None);
    /// assert_eq!(codes.code_for(ShiftBucket::Late), None);
    /// ```
    pub fn code_for(&self, bucket: ShiftBucket) -> Option<&str> {
        self.slot(bucket).as_deref().filter(|code| !code.is_empty())
    }

    /// Returns true if the bucket holds a non-empty code.
    pub fn is_set(&self, bucket: ShiftBucket) -> bool {
        self.code_for(bucket).is_some()
    }

    /// Stores a code for a bucket, replacing any previous value.
    pub fn set(&mut self, bucket: ShiftBucket, code: impl Into<String>) {
        *self.slot_mut(bucket) = Some(code.into());
    }

    /// Returns true if all three buckets hold a code.
    pub fn is_complete(&self) -> bool {
        ShiftBucket::ALL.iter().all(|bucket| self.is_set(*bucket))
    }

    fn slot(&self, bucket: ShiftBucket) -> &Option<String> {
        match bucket {
            ShiftBucket::Early => &self.early,
            ShiftBucket::Middle => &self.middle,
            ShiftBucket::Late => &self.late,
        }
    }

    fn slot_mut(&mut self, bucket: ShiftBucket) -> &mut Option<String> {
        match bucket {
            ShiftBucket::Early => &mut self.early,
            ShiftBucket::Middle => &mut self.middle,
            ShiftBucket::Late => &mut self.late,
        }
    }
}

/// Complete textual defaults, one per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCodes {
    /// Default for the early shift.
    pub early: String,
    /// Default for the middle shift.
    pub middle: String,
    /// Default for the late shift.
    pub late: String,
}

impl FallbackCodes {
    /// Builds the defaults as marker followed by each bucket's suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_converter::models::{FallbackCodes, ShiftBucket};
    ///
    /// let fallback = FallbackCodes::from_marker("CTRL", "-E", "-M", "-L");
    /// assert_eq!(fallback.code_for(ShiftBucket::Middle), "CTRL-M");
    /// ```
    pub fn from_marker(marker: &str, early: &str, middle: &str, late: &str) -> Self {
        Self {
            early: format!("{}{}", marker, early),
            middle: format!("{}{}", marker, middle),
            late: format!("{}{}", marker, late),
        }
    }

    /// Returns the default code for a bucket.
    pub fn code_for(&self, bucket: ShiftBucket) -> &str {
        match bucket {
            ShiftBucket::Early => &self.early,
            ShiftBucket::Middle => &self.middle,
            ShiftBucket::Late => &self.late,
        }
    }

    /// Converts the defaults into a fully populated [`TaskCodeSet`].
    ///
    /// Used when the task code lookup sheet could not be obtained at all.
    pub fn to_task_code_set(&self) -> TaskCodeSet {
        TaskCodeSet {
            early: Some(self.early.clone()),
            middle: Some(self.middle.clone()),
            late: Some(self.late.clone()),
        }
    }
}
