use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Upper bound (inclusive) for the annual rate, in percent.
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// The input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Principal,
    AnnualRatePercent,
    TenureYears,
    CompoundingFrequency,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::AnnualRatePercent => "annualRatePercent",
            Self::TenureYears => "tenureYears",
            Self::CompoundingFrequency => "compoundingFrequency",
        }
    }

    /// Applies this field's numeric rule to an already-coerced value.
    ///
    /// Non-finite values count as "not a number"; the rate additionally has
    /// an inclusive upper bound of [`MAX_RATE_PERCENT`].
    pub(crate) fn check_number(self, value: f64) -> Result<f64, ValidationErrorKind> {
        if !value.is_finite() {
            return Err(ValidationErrorKind::NotANumber);
        }
        if value <= 0.0 {
            return Err(ValidationErrorKind::NotPositive);
        }
        if self == Self::AnnualRatePercent && value > MAX_RATE_PERCENT {
            return Err(ValidationErrorKind::OutOfRange);
        }
        Ok(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    #[error("must be a finite number")]
    NotANumber,
    #[error("must be greater than zero")]
    NotPositive,
    #[error("must not exceed 100")]
    OutOfRange,
    #[error("must be one of annual, half-yearly, quarterly, monthly")]
    InvalidFrequencyToken,
}

impl ValidationErrorKind {
    /// Stable machine-readable code, as used in CSV and JSON output.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotANumber => "NOT_A_NUMBER",
            Self::NotPositive => "NOT_POSITIVE",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidFrequencyToken => "INVALID_FREQUENCY_TOKEN",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{field} {kind}")]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

/// Every reason a request was rejected, ordered by field.
///
/// Never empty: it only comes out of a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn contains(&self, field: Field, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|e| e.field == field && e.kind == kind)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }

    /// `field:CODE` pairs joined by `;`, e.g. `principal:NOT_POSITIVE`.
    pub fn codes(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("{}:{}", e.field, e.kind.code()))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Gathers field errors while each field is checked independently.
#[derive(Debug, Default)]
pub(crate) struct ErrorCollector {
    errors: Vec<FieldError>,
}

impl ErrorCollector {
    pub(crate) fn check<T>(
        &mut self,
        field: Field,
        outcome: Result<T, ValidationErrorKind>,
    ) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(kind) => {
                self.errors.push(FieldError { field, kind });
                None
            }
        }
    }

    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => {
                debug_assert!(!self.errors.is_empty(), "rejected without a reason");
                Err(ValidationErrors(self.errors))
            }
        }
    }
}
