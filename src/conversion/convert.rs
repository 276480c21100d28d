//! End-to-end conversion over already-decoded grids.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::TaskCodeSettings;
use crate::error::{ConverterError, ConverterResult};
use crate::models::{Grid, OutputRecord, Period};

use super::{Cutoffs, extract_records, resolve_employees, resolve_task_codes};

/// The result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Extracted records in row-major order.
    pub records: Vec<OutputRecord>,
}

/// Converts a master schedule grid into output records.
///
/// A missing master grid is an error. Missing lookup grids are not: without
/// an employee lookup every name passes through as its own ID, and without a
/// task code lookup every bucket uses the configured fallback code.
///
/// # Example
///
/// ```
/// use shift_converter::config::TaskCodeSettings;
/// use shift_converter::conversion::{Cutoffs, convert};
/// use shift_converter::models::Period;
///
/// let master = vec![
///     vec!["Name".to_string(), "1".to_string()],
///     vec!["Alice".to_string(), "1300".to_string()],
/// ];
/// let output = convert(
///     Some(&master),
///     None,
///     None,
///     &TaskCodeSettings::default(),
///     Period::new(2024, 5).unwrap(),
///     Cutoffs::parse("1050", "1150").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(output.records[0].task_code, "管理遅番");
/// ```
pub fn convert(
    master: Option<&Grid>,
    employee_lookup: Option<&Grid>,
    task_code_lookup: Option<&Grid>,
    settings: &TaskCodeSettings,
    period: Period,
    cutoffs: Cutoffs,
) -> ConverterResult<ConversionOutput> {
    let master = master.ok_or(ConverterError::ScheduleMissing)?;
    let fallback = settings.fallback_codes();

    let employees = match employee_lookup {
        Some(grid) => resolve_employees(grid),
        None => {
            warn!("Employee lookup unavailable, names will be used as IDs");
            Default::default()
        }
    };

    let task_codes = match task_code_lookup {
        Some(grid) => resolve_task_codes(grid, &settings.marker, &settings.rules),
        None => {
            warn!("Task code lookup unavailable, using fallback task codes");
            fallback.to_task_code_set()
        }
    };

    let records = extract_records(master, &employees, &task_codes, &fallback, period, cutoffs);

    info!(
        year = period.year(),
        month = period.month(),
        employees_mapped = employees.len(),
        task_codes_complete = task_codes.is_complete(),
        records = records.len(),
        "Conversion completed"
    );

    Ok(ConversionOutput { records })
}
