//! Shift bucket model.
//!
//! Every valid shift-time cell in a schedule falls into exactly one of three
//! buckets, and each bucket maps to one task code.

use serde::{Deserialize, Serialize};

/// The shift a schedule cell belongs to.
///
/// # Example
///
/// ```
/// use shift_converter::models::ShiftBucket;
///
/// assert_eq!(ShiftBucket::Late.to_string(), "late");
/// assert_eq!(ShiftBucket::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftBucket {
    /// Starts at or before the early cutoff.
    Early,
    /// Starts strictly between the two cutoffs.
    Middle,
    /// Starts at or after the late cutoff.
    Late,
}

impl ShiftBucket {
    /// All buckets in the order positional fallback fills them.
    pub const ALL: [ShiftBucket; 3] = [ShiftBucket::Early, ShiftBucket::Middle, ShiftBucket::Late];
}

impl std::fmt::Display for ShiftBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftBucket::Early => write!(f, "early"),
            ShiftBucket::Middle => write!(f, "middle"),
            ShiftBucket::Late => write!(f, "late"),
        }
    }
}
