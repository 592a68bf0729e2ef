use crate::domain::deposit::RawDepositInput;
use crate::error::{CalculatorError, Result};
use std::io::Read;

/// Reads raw deposit requests from a CSV source.
///
/// Expects a header row naming `principal`, `annualRatePercent`,
/// `tenureYears` and `compoundingFrequency`. Cells are trimmed, short rows
/// are allowed, and empty or missing cells come through as `None` so the
/// validator can report them.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes raw requests,
    /// one per data row.
    ///
    /// A row that cannot be read (bad framing, invalid UTF-8) becomes an
    /// error item and the rows after it are still yielded.
    pub fn requests(self) -> impl Iterator<Item = Result<RawDepositInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalculatorError::from))
    }
}
