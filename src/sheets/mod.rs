//! Spreadsheet adapters.
//!
//! Everything that touches spreadsheet bytes or the network lives here:
//! decoding the uploaded schedule workbook, encoding the download workbook,
//! tokenizing lookup CSV exports, and fetching lookup sheets. The conversion
//! module only ever sees the resulting grids.

mod csv_grid;
#[cfg(test)]
pub(crate) mod export_server;
mod fetcher;
mod xlsx;

pub use csv_grid::parse_csv;
pub use fetcher::{LookupFetcher, export_url};
pub use xlsx::{decode_sheet, encode_grid};
