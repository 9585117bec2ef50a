//! Vitals dataset ingestion.
//!
//! The on-disk format is plain comma-separated UTF-8 text: one header line
//! followed by rows of
//!
//! ```text
//! respiratory_rate,oxygen_saturation,heart_rate,systolic_bp,diastolic_bp,oxygen_therapy,risk_level
//! ```
//!
//! There is no quoting or escaping. A value containing a comma shifts every
//! later field of its row.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use error_common::{log_error, Result, RustCareError};
use tracing::{info, warn};

use crate::types::{RiskLabel, Vitals, VitalsRecord};

pub const DELIMITER: char = ',';

/// Header written by [`write_csv`]. Loading ignores header content.
pub const DATASET_HEADER: &str =
    "respiratory_rate,oxygen_saturation,heart_rate,systolic_bp,diastolic_bp,oxygen_therapy,risk_level";

/// Load a labelled vitals dataset.
///
/// Never fails: a missing, unreadable or non-UTF-8 source is logged and
/// yields an empty vector. Malformed rows are kept with defaulted fields.
pub fn load(path: impl AsRef<Path>) -> Vec<VitalsRecord> {
    let path = path.as_ref();

    match try_load(path) {
        Ok(records) => {
            info!(path = %path.display(), records = records.len(), "Loaded vitals dataset");
            records
        }
        Err(err) => {
            log_error("dataset.load", &err);
            warn!(path = %path.display(), "Vitals dataset unavailable, returning empty dataset");
            Vec::new()
        }
    }
}

/// Like [`load`] but surfaces source-level failures to the caller
pub fn try_load(path: &Path) -> Result<Vec<VitalsRecord>> {
    let file = File::open(path)?;
    parse_dataset(BufReader::new(file))
}

/// Parse dataset text line by line.
///
/// Blank lines are dropped, the first remaining line is the header, every
/// other line becomes one record. Only read errors abort the whole parse;
/// text that is not UTF-8 is reported as unusable dataset content.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Vec<VitalsRecord>> {
    let mut records = Vec::new();
    let mut header_skipped = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => {
                RustCareError::DatasetError(format!("line {}: {err}", index + 1))
            }
            _ => RustCareError::IoError(err),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        if !header_skipped {
            header_skipped = true;
            continue;
        }

        let record = parse_row(&line);
        if let RiskLabel::Unrecognized(raw) = &record.risk_level {
            warn!(line = index + 1, label = %raw, "Unrecognized risk label kept as-is");
        }
        records.push(record);
    }

    Ok(records)
}

/// Map one data line onto a record.
///
/// Numbers are read from the leading numeric part of a cell and default to
/// `0` when there is none. The oxygen flag is true only for `true`
/// (any case) or `1`, and a missing or blank label means `Low`.
pub fn parse_row(line: &str) -> VitalsRecord {
    let mut fields = line.split(DELIMITER);

    let respiratory_rate = parse_number(fields.next());
    let oxygen_saturation = parse_number(fields.next());
    let heart_rate = parse_number(fields.next());
    let systolic_bp = parse_number(fields.next());
    let diastolic_bp = parse_number(fields.next());
    let oxygen_therapy = parse_flag(fields.next());
    let risk_level = RiskLabel::from_field(fields.next());

    VitalsRecord {
        vitals: Vitals {
            respiratory_rate,
            oxygen_saturation,
            heart_rate,
            systolic_bp,
            diastolic_bp,
            oxygen_therapy,
        },
        risk_level,
    }
}

fn parse_number(field: Option<&str>) -> f64 {
    field.and_then(numeric_prefix).unwrap_or(0.0)
}

/// Read the longest leading decimal literal of a cell, so `96%` is 96 and
/// `120bpm` is 120. Only a case-sensitive `Infinity` is infinite; `inf`,
/// `NaN` and text without leading digits yield `None`.
fn numeric_prefix(field: &str) -> Option<f64> {
    let text = field.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text.get(end..).is_some_and(|rest| rest.starts_with("Infinity")) {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let integer_digits = count_digits(bytes, end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(bytes, end + 1);
        end += 1 + fraction_digits;
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits(bytes, end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    text.get(..end)?.parse::<f64>().ok()
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .iter()
        .skip(from)
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}

fn parse_flag(field: Option<&str>) -> bool {
    field
        .map(str::trim)
        .is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1")
}

/// Write records in the loader's format, header first
pub fn write_csv<W: Write>(records: &[VitalsRecord], mut writer: W) -> Result<()> {
    writeln!(writer, "{DATASET_HEADER}")?;
    for record in records {
        writeln!(writer, "{}", format_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn format_row(record: &VitalsRecord) -> String {
    let v = &record.vitals;
    format!(
        "{},{},{},{},{},{},{}",
        v.respiratory_rate,
        v.oxygen_saturation,
        v.heart_rate,
        v.systolic_bp,
        v.diastolic_bp,
        v.oxygen_therapy,
        record.risk_level
    )
}
