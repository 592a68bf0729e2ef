use crate::application::engine::calculate;
use crate::domain::deposit::{DepositResult, RawDepositInput};
use crate::domain::validation::ValidationErrors;
use crate::error::Result;
use serde::Serialize;
use tracing::warn;

/// What became of one input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Calculated { result: DepositResult },
    Rejected { errors: ValidationErrors },
    /// The row could not be read at all (broken CSV framing, bad encoding).
    Unreadable { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOutcome {
    /// 1-based position of the data row, header excluded.
    pub row: u64,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl RowOutcome {
    pub fn evaluate(row: u64, raw: Result<RawDepositInput>) -> Self {
        let outcome = match raw {
            Ok(raw) => match calculate(&raw) {
                Ok(result) => Outcome::Calculated { result },
                Err(errors) => Outcome::Rejected { errors },
            },
            Err(e) => {
                warn!(row, error = %e, "Error reading deposit row");
                Outcome::Unreadable {
                    error: e.to_string(),
                }
            }
        };
        Self { row, outcome }
    }
}
