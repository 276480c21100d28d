//! CSV tokenization for exported lookup sheets.

use csv::ReaderBuilder;

use crate::error::{ConverterError, ConverterResult};
use crate::models::Grid;

/// Tokenizes CSV text into a grid.
///
/// There is no header handling here; row 0 is returned like any other row.
/// Rows may differ in length and quoted fields may contain commas.
///
/// # Example
///
/// ```
/// use shift_converter::sheets::parse_csv;
///
/// let grid = parse_csv("name,id\n\"Smith, Jo\",E7\n").unwrap();
/// assert_eq!(grid[1], vec!["Smith, Jo", "E7"]);
/// ```
pub fn parse_csv(text: &str) -> ConverterResult<Grid> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ConverterError::MalformedCsv {
            message: e.to_string(),
        })?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    Ok(grid)
}
