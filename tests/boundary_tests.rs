use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_boundary_numerical_values() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("boundary_test.csv");
    let mut wtr = csv::Writer::from_path(&output_path).unwrap();
    wtr.write_record(["principal", "annualRatePercent", "tenureYears", "compoundingFrequency"])
        .unwrap();

    // Rate exactly at its inclusive upper bound.
    wtr.write_record(["1000", "100", "1", "annual"]).unwrap();
    // Smallest currency unit, fractional tenure.
    wtr.write_record(["0.01", "5", "0.5", "monthly"]).unwrap();
    // Just over the rate bound.
    wtr.write_record(["1000", "100.000001", "1", "annual"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("fdcalc"));
    cmd.arg("batch").arg(&output_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,1000.00,1000.00,2000.00,"))
        .stdout(predicate::str::contains("2,0.01,0.00,0.01,"))
        .stdout(predicate::str::contains("3,,,,annualRatePercent:OUT_OF_RANGE"));
}

#[test]
fn test_malformed_rows_do_not_stop_the_batch() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("robustness_test.csv");
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .unwrap();
    wtr.write_record(["principal", "annualRatePercent", "tenureYears", "compoundingFrequency"])
        .unwrap();

    wtr.write_record(["1000", "10", "1", "annual"]).unwrap();
    // Text where numbers belong.
    wtr.write_record(["not_a_number", "ten", "1", "annual"]).unwrap();
    // Empty cells.
    wtr.write_record(["", "", "", ""]).unwrap();
    // Short row.
    wtr.write_record(["3000", "10"]).unwrap();
    wtr.write_record(["2000", "10", "1", "annual"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("fdcalc"));
    cmd.arg("batch").arg(&output_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,1000.00,100.00,1100.00,"))
        .stdout(predicate::str::contains(
            "2,,,,principal:NOT_A_NUMBER;annualRatePercent:NOT_A_NUMBER",
        ))
        .stdout(predicate::str::contains(
            "3,,,,principal:NOT_A_NUMBER;annualRatePercent:NOT_A_NUMBER;tenureYears:NOT_A_NUMBER;compoundingFrequency:INVALID_FREQUENCY_TOKEN",
        ))
        .stdout(predicate::str::contains(
            "4,,,,tenureYears:NOT_A_NUMBER;compoundingFrequency:INVALID_FREQUENCY_TOKEN",
        ))
        .stdout(predicate::str::contains("5,2000.00,200.00,2200.00,"));
}

#[test]
fn test_overflowing_deposit_is_reported_as_inf() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("overflow_test.csv");
    let mut wtr = csv::Writer::from_path(&output_path).unwrap();
    wtr.write_record(["principal", "annualRatePercent", "tenureYears", "compoundingFrequency"])
        .unwrap();
    wtr.write_record(["1e308", "100", "1", "annual"]).unwrap();
    wtr.write_record(["1000", "100", "5000", "monthly"]).unwrap();
    wtr.write_record(["1000", "10", "1", "annual"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    Command::new(cargo_bin!("fdcalc"))
        .arg("batch")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^1,[0-9]+\.00,inf,inf,$").unwrap())
        .stdout(predicate::str::contains("2,1000.00,inf,inf,"))
        .stdout(predicate::str::contains("3,1000.00,100.00,1100.00,"));

    let output = Command::new(cargo_bin!("fdcalc"))
        .args(["batch", "--format", "json"])
        .arg(&output_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    for row in &rows[..2] {
        assert_eq!(row["result"]["totalInterest"], "inf");
        assert_eq!(row["result"]["maturityValue"], "inf");
    }
    assert_eq!(rows[0]["result"]["principal"].as_f64(), Some(1e308));
    assert!(rows[2]["result"]["maturityValue"].is_number());
}
