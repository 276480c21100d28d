//! Employee lookup sheet parsing.

use tracing::debug;

use crate::models::{EmployeeMapping, Grid, cell};

/// Builds the name to ID mapping from an employee lookup grid.
///
/// Row 0 is a header and is never read. Each later row maps column 0 (name)
/// to column 1 (ID) when both are non-empty after trimming; other rows are
/// skipped. A repeated name keeps the ID from its last row.
///
/// # Example
///
/// ```
/// use shift_converter::conversion::resolve_employees;
///
/// let grid = vec![
///     vec!["Name".to_string(), "ID".to_string()],
///     vec!["Alice".to_string(), " E001 ".to_string()],
/// ];
/// let mapping = resolve_employees(&grid);
/// assert_eq!(mapping.get("Alice"), Some("E001"));
/// ```
pub fn resolve_employees(grid: &Grid) -> EmployeeMapping {
    let mut mapping = EmployeeMapping::default();

    for (row_idx, row) in grid.iter().enumerate().skip(1) {
        let name = cell(row, 0);
        let id = cell(row, 1);
        if name.is_empty() || id.is_empty() {
            continue;
        }

        if let Some(previous) = mapping.insert(name, id) {
            debug!(
                row = row_idx,
                employee = name,
                previous = %previous,
                id,
                "Duplicate employee name, keeping last"
            );
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_skips_header_and_incomplete_rows() {
        let mapping = resolve_employees(&grid(&[
            &["H1", "H2"],
            &["Alice", "E001"],
            &["", "E002"],
            &["Bob", ""],
        ]));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("Alice"), Some("E001"));
        assert_eq!(mapping.get("Bob"), None);
    }

    #[test]
    fn test_header_row_is_never_mapped() {
        let mapping = resolve_employees(&grid(&[&["Alice", "E001"]]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mapping = resolve_employees(&grid(&[&["名前", "ID"], &[" 山田 太郎 ", "\tE100 "]]));
        assert_eq!(mapping.get("山田 太郎"), Some("E100"));
    }

    #[test]
    fn test_duplicate_names_keep_last_row() {
        let mapping = resolve_employees(&grid(&[
            &["Name", "ID"],
            &["Alice", "E001"],
            &["Alice", "E002"],
        ]));
        assert_eq!(mapping.get("Alice"), Some("E002"));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let mapping = resolve_employees(&grid(&[&["Name", "ID"], &["Alice"], &[]]));
        assert!(mapping.is_empty());
    }
}
