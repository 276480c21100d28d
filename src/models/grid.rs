//! Decoded spreadsheet grid.
//!
//! A grid is the common currency between the spreadsheet adapters and the
//! conversion logic: rows of cell strings, row 0 first. Rows may be ragged,
//! so cells are always read through [`cell`].

/// Rows of cell strings, with an empty string for unset cells.
pub type Grid = Vec<Vec<String>>;

/// Returns the trimmed text of `row[index]`, or `""` when the row is too short.
///
/// # Example
///
/// ```
/// use shift_converter::models::cell;
///
/// let row = vec!["  Alice ".to_string()];
/// assert_eq!(cell(&row, 0), "Alice");
/// assert_eq!(cell(&row, 3), "");
/// ```
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|value| value.trim()).unwrap_or("")
}
