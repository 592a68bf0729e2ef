use crate::error::Result;
use crate::interfaces::format::to_currency;
use crate::interfaces::outcome::{Outcome, RowOutcome};
use std::io::Write;

pub const HEADER: [&str; 5] = ["row", "principal", "totalInterest", "maturityValue", "errors"];

/// Writes one CSV line per evaluated row, amounts rounded for display.
///
/// Rejected rows keep their position in the output with empty amounts and
/// their error codes in the last column.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcomes(&mut self, outcomes: impl IntoIterator<Item = RowOutcome>) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for outcome in outcomes {
            self.write_outcome(&outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_outcome(&mut self, row: &RowOutcome) -> Result<()> {
        let index = row.row.to_string();
        let record: [String; 5] = match &row.outcome {
            Outcome::Calculated { result } => [
                index,
                to_currency(result.principal()),
                to_currency(result.total_interest()),
                to_currency(result.maturity_value()),
                String::new(),
            ],
            Outcome::Rejected { errors } => {
                [index, String::new(), String::new(), String::new(), errors.codes()]
            }
            Outcome::Unreadable { error } => {
                [index, String::new(), String::new(), String::new(), error.clone()]
            }
        };
        self.writer.write_record(&record)?;
        Ok(())
    }
}
