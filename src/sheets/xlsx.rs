//! Workbook decoding and encoding.
//!
//! Decoding uses `calamine` and keeps absolute cell positions: calamine
//! ranges start at the first used cell, so leading empty rows and columns are
//! padded back in. Encoding uses `rust_xlsxwriter`.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{ConverterError, ConverterResult};
use crate::models::Grid;

/// Column widths of the encoded download sheet.
const COLUMN_WIDTHS: [f64; 3] = [14.0, 16.0, 16.0];

/// Decodes the named sheet of an `.xlsx` workbook into a grid.
///
/// Unset cells become empty strings and integral numbers render without a
/// fractional part, so a shift time typed as `930` reads back as `"930"`.
///
/// # Errors
///
/// - [`ConverterError::WorkbookUnreadable`] if the bytes are not a workbook
/// - [`ConverterError::SheetNotFound`] if the workbook has no sheet named `sheet`
pub fn decode_sheet(bytes: &[u8], sheet: &str) -> ConverterResult<Grid> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ConverterError::WorkbookUnreadable {
            message: e.to_string(),
        })?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(ConverterError::SheetNotFound {
            sheet: sheet.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| ConverterError::WorkbookUnreadable {
            message: format!("sheet '{}': {}", sheet, e),
        })?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut grid: Grid = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![String::new(); col_offset];
        cells.extend(row.iter().map(cell_to_string));
        grid.push(cells);
    }

    Ok(grid)
}

/// Encodes a grid as a single-sheet `.xlsx` workbook with three fixed-width columns.
///
/// Empty strings are left as unset cells.
pub fn encode_grid(grid: &Grid, title: &str) -> ConverterResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(title).map_err(write_failed)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(write_failed)?;
    }

    for (row_idx, row) in grid.iter().enumerate() {
        let row_num = u32::try_from(row_idx).map_err(|_| ConverterError::WorkbookWriteFailed {
            message: format!("row {} exceeds the sheet size", row_idx),
        })?;
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col_num =
                u16::try_from(col_idx).map_err(|_| ConverterError::WorkbookWriteFailed {
                    message: format!("column {} exceeds the sheet size", col_idx),
                })?;
            worksheet
                .write_string(row_num, col_num, value.as_str())
                .map_err(write_failed)?;
        }
    }

    workbook.save_to_buffer().map_err(write_failed)
}

fn write_failed(error: XlsxError) -> ConverterError {
    ConverterError::WorkbookWriteFailed {
        message: error.to_string(),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
