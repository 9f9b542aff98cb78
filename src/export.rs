//! CSV export of projection series

use crate::error::{PlanError, PlanResult};
use crate::projection::{LifeMonthlyPoint, LifeYearlyPoint};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render rows with a header into memory; no I/O happens here
fn encode_rows<T: Serialize>(rows: &[T]) -> PlanResult<Vec<u8>> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer
        .into_inner()
        .map_err(|e| PlanError::Csv(csv::Error::from(e.into_error())))
}

/// Write failures on a caller-supplied writer have no path and surface as
/// `PlanError::Csv`
fn write_rows<W: Write, T: Serialize>(mut writer: W, rows: &[T]) -> PlanResult<()> {
    let bytes = encode_rows(rows)?;
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| PlanError::Csv(csv::Error::from(e)))
}

/// Write failures on a file, including the final flush, surface as
/// `PlanError::Io` with the path
fn write_rows_to_file<T: Serialize>(path: &Path, rows: &[T]) -> PlanResult<()> {
    let bytes = encode_rows(rows)?;
    fs::write(path, bytes).map_err(|e| PlanError::io(path, e))
}

/// Write the monthly series with a header row
pub fn write_monthly<W: Write>(writer: W, monthly: &[LifeMonthlyPoint]) -> PlanResult<()> {
    write_rows(writer, monthly)
}

/// Write the yearly series with a header row
pub fn write_yearly<W: Write>(writer: W, yearly: &[LifeYearlyPoint]) -> PlanResult<()> {
    write_rows(writer, yearly)
}

pub fn write_monthly_csv<P: AsRef<Path>>(path: P, monthly: &[LifeMonthlyPoint]) -> PlanResult<()> {
    write_rows_to_file(path.as_ref(), monthly)
}

pub fn write_yearly_csv<P: AsRef<Path>>(path: P, yearly: &[LifeYearlyPoint]) -> PlanResult<()> {
    write_rows_to_file(path.as_ref(), yearly)
}
