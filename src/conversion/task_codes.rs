//! Task code discovery in free-form lookup sheets.
//!
//! The task code sheet has no fixed layout. Rows that designate a shift task
//! contain a marker substring somewhere; the code itself sits in the second
//! column (or the first, if the second is empty). Which shift a row belongs to
//! is inferred from keywords anywhere in the row, falling back to the order in
//! which unlabelled marker rows appear.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Grid, ShiftBucket, TaskCodeSet, cell};

/// Keywords that label a lookup row as belonging to one shift bucket.
///
/// Rules are tested in order and the first rule with a matching keyword wins.
/// Latin keywords match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// The bucket a matching row is assigned to.
    pub bucket: ShiftBucket,
    /// Substrings that identify the bucket.
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Creates a rule from string literals.
    pub fn new(bucket: ShiftBucket, keywords: &[&str]) -> Self {
        Self {
            bucket,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, lowered_text: &str) -> bool {
        self.keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| lowered_text.contains(&keyword.to_lowercase()))
    }
}

/// The built-in Japanese and English shift keywords.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::default_keyword_rules;
/// use shift_converter::models::ShiftBucket;
///
/// let rules = default_keyword_rules();
/// assert_eq!(rules[2].bucket, ShiftBucket::Late);
/// assert!(rules[2].keywords.contains(&"evening".to_string()));
/// ```
pub fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(ShiftBucket::Early, &["早", "朝", "morning"]),
        KeywordRule::new(ShiftBucket::Middle, &["中", "昼", "middle"]),
        KeywordRule::new(ShiftBucket::Late, &["遅", "夕", "evening", "night"]),
    ]
}

/// Scans a lookup grid for marker rows and resolves one task code per bucket.
///
/// Every cell containing `marker` is an occurrence, so a row with the marker
/// in two cells is processed twice. For each occurrence:
///
/// - the candidate code is column 1, or column 0 if column 1 is empty;
///   occurrences with no candidate are ignored
/// - if a keyword rule matches the row, the candidate overwrites that bucket
/// - otherwise it fills the first unset bucket (early, middle, late) and never
///   overwrites an existing code
///
/// Buckets that never receive a code stay `None`.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::{default_keyword_rules, resolve_task_codes};
/// use shift_converter::models::ShiftBucket;
///
/// let grid = vec![
///     vec!["管理".to_string(), "T-01".to_string()],
///     vec!["管理 evening".to_string(), "T-03".to_string()],
/// ];
/// let codes = resolve_task_codes(&grid, "管理", &default_keyword_rules());
/// assert_eq!(codes.code_for(ShiftBucket::Early), Some("T-01"));
/// assert_eq!(codes.code_for(ShiftBucket::Late), Some("T-03"));
/// assert_eq!(codes.code_for(ShiftBucket::Middle), None);
/// ```
pub fn resolve_task_codes(grid: &Grid, marker: &str, rules: &[KeywordRule]) -> TaskCodeSet {
    let mut codes = TaskCodeSet::default();
    if marker.is_empty() {
        return codes;
    }

    for (row_idx, row) in grid.iter().enumerate() {
        let occurrences = row.iter().filter(|value| value.contains(marker)).count();
        if occurrences == 0 {
            continue;
        }

        let candidate = match cell(row, 1) {
            "" => cell(row, 0),
            code => code,
        };
        if candidate.is_empty() {
            continue;
        }

        let row_text = row.join(" ").to_lowercase();
        let labelled = rules
            .iter()
            .find(|rule| rule.matches(&row_text))
            .map(|rule| rule.bucket);

        for _ in 0..occurrences {
            match labelled {
                Some(bucket) => {
                    debug!(row = row_idx, bucket = %bucket, code = candidate, "Keyword-labelled task code");
                    codes.set(bucket, candidate);
                }
                None => {
                    let Some(bucket) = ShiftBucket::ALL.into_iter().find(|b| !codes.is_set(*b))
                    else {
                        debug!(row = row_idx, code = candidate, "All buckets filled, ignoring marker row");
                        break;
                    };
                    debug!(row = row_idx, bucket = %bucket, code = candidate, "Positional task code");
                    codes.set(bucket, candidate);
                }
            }
        }
    }

    codes
}
