#![allow(dead_code)]

use fdcalc::domain::deposit::DepositRequest;
use fdcalc::domain::frequency::CompoundingFrequency;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "principal,annualRatePercent,tenureYears,compoundingFrequency";

pub fn request(
    principal: f64,
    rate: f64,
    tenure: f64,
    frequency: CompoundingFrequency,
) -> DepositRequest {
    DepositRequest::new(principal, rate, tenure, frequency).expect("valid deposit request")
}

/// Writes a batch file with the standard header followed by `rows`.
pub fn batch_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{HEADER}").expect("Failed to write header");
    for row in rows {
        writeln!(file, "{row}").expect("Failed to write row");
    }
    file.flush().expect("Failed to flush temp file");
    file
}
