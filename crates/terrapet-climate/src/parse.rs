//! Strict parsers for the upstream climate datasets.
//!
//! Both datasets are append-only with the newest record last. The parsers
//! trust nothing about the payload beyond the documented layout: any
//! drift (shorter header, renamed column, placeholder values) becomes a
//! [`ClimateError::Malformed`].

use crate::error::ClimateError;

/// Number of descriptive lines preceding the data in the CO2 series.
pub const CO2_HEADER_LINES: usize = 56;

/// Column holding the January-December annual mean in the temperature table.
pub const ANNUAL_MEAN_COLUMN: &str = "J-D";

/// Parse the latest annual CO2 concentration (ppm) from the plain-text series.
///
/// The body is trimmed and split into lines; the first `header_lines` lines
/// are skipped. The last remaining line is split on whitespace and its
/// second token (`year ppm ...`) is the value.
///
/// # Errors
///
/// Returns [`ClimateError::Malformed`] if no data line follows the header,
/// the last line has fewer than two tokens, or the token is not a finite
/// number.
pub fn parse_co2_annual(body: &str, header_lines: usize) -> Result<f64, ClimateError> {
    let last_line = body
        .trim()
        .lines()
        .skip(header_lines)
        .last()
        .ok_or_else(|| {
            ClimateError::Malformed(format!("CO2 series has no data after {header_lines} header lines"))
        })?;

    let token = last_line.split_whitespace().nth(1).ok_or_else(|| {
        ClimateError::Malformed(format!("CO2 record {:?} has fewer than two fields", last_line.trim()))
    })?;

    parse_finite(token, "CO2 ppm")
}

/// Parse the latest annual-mean temperature anomaly from the CSV table.
///
/// The first line is a title and is skipped; the second line is the header
/// row. The value is read from the [`ANNUAL_MEAN_COLUMN`] cell of the last
/// data row.
///
/// # Errors
///
/// Returns [`ClimateError::Malformed`] if the column is missing, the table
/// has no data rows, the last row is too short, or the cell is not a
/// finite number (GISTEMP writes `***` for incomplete years).
pub fn parse_temperature_table(body: &str) -> Result<f64, ClimateError> {
    let table = body.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(table.as_bytes());

    let column = reader
        .headers()?
        .iter()
        .position(|name| name == ANNUAL_MEAN_COLUMN)
        .ok_or_else(|| {
            ClimateError::Malformed(format!("temperature table has no {ANNUAL_MEAN_COLUMN} column"))
        })?;

    let mut last_row = None;
    for record in reader.records() {
        last_row = Some(record?);
    }
    let last_row = last_row
        .ok_or_else(|| ClimateError::Malformed("temperature table has no data rows".to_owned()))?;

    let cell = last_row.get(column).ok_or_else(|| {
        ClimateError::Malformed(format!("last temperature row has no {ANNUAL_MEAN_COLUMN} cell"))
    })?;

    parse_finite(cell, "temperature anomaly")
}

/// Parse a token as a finite `f64`.
fn parse_finite(token: &str, what: &str) -> Result<f64, ClimateError> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|e| ClimateError::Malformed(format!("{what} {token:?} is not a number: {e}")))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ClimateError::Malformed(format!("{what} {token:?} is not finite")))
    }
}
