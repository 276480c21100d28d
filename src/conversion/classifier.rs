//! Shift cell classification.
//!
//! A schedule cell holds a shift-time code such as `930` or `1150`. These are
//! not clock times, only ordered integers compared against two cutoffs. Any
//! cell that is not exactly three or four ASCII digits is not a shift entry.

use serde::{Deserialize, Serialize};

use crate::error::{ConverterError, ConverterResult};
use crate::models::ShiftBucket;

/// The early/late threshold pair used to bucket shift times.
///
/// No ordering between the two values is enforced. The early comparison is
/// always performed first, so under an inverted pair every value at or below
/// the early cutoff is still early.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::Cutoffs;
/// use shift_converter::models::ShiftBucket;
///
/// let cutoffs = Cutoffs::parse("1050", "1150").unwrap();
/// assert_eq!(cutoffs.classify("930"), Some(ShiftBucket::Early));
/// assert_eq!(cutoffs.classify("1100"), Some(ShiftBucket::Middle));
/// assert_eq!(cutoffs.classify("1150"), Some(ShiftBucket::Late));
/// assert_eq!(cutoffs.classify("休"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cutoffs {
    /// Values at or below this are early.
    pub early: u64,
    /// Values at or above this (and above `early`) are late.
    pub late: u64,
}

impl Cutoffs {
    /// Parses both cutoffs from decimal strings.
    pub fn parse(early: &str, late: &str) -> ConverterResult<Self> {
        Ok(Self {
            early: parse_cutoff(early)?,
            late: parse_cutoff(late)?,
        })
    }

    /// Classifies a raw cell into a shift bucket.
    ///
    /// Returns `None` for anything that is not a shift-time token.
    pub fn classify(&self, cell: &str) -> Option<ShiftBucket> {
        let value = parse_shift_time(cell)?;
        Some(self.bucket_for(value))
    }

    fn bucket_for(&self, value: u64) -> ShiftBucket {
        if value <= self.early {
            ShiftBucket::Early
        } else if value >= self.late {
            ShiftBucket::Late
        } else {
            ShiftBucket::Middle
        }
    }
}

/// Classifies a raw cell against string cutoffs.
///
/// Returns `None` when the cell is not a shift-time token or either cutoff is
/// not a decimal integer.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::classify;
/// use shift_converter::models::ShiftBucket;
///
/// assert_eq!(classify("1050", "1050", "1150"), Some(ShiftBucket::Early));
/// assert_eq!(classify("1050", "abc", "1150"), None);
/// ```
pub fn classify(cell: &str, early_cutoff: &str, late_cutoff: &str) -> Option<ShiftBucket> {
    Cutoffs::parse(early_cutoff, late_cutoff)
        .ok()?
        .classify(cell)
}

/// Parses a shift-time token: exactly three or four ASCII digits after trimming.
fn parse_shift_time(cell: &str) -> Option<u64> {
    let token = cell.trim();
    if !(3..=4).contains(&token.len()) || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_cutoff(value: &str) -> ConverterResult<u64> {
    let token = value.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConverterError::InvalidCutoff {
            value: value.to_string(),
        });
    }
    token.parse().map_err(|_| ConverterError::InvalidCutoff {
        value: value.to_string(),
    })
}
