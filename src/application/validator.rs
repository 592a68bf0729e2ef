use crate::domain::deposit::{DepositRequest, RawDepositInput};
use crate::domain::frequency::CompoundingFrequency;
use crate::domain::validation::{ValidationErrorKind, ValidationErrors};

/// Checks raw input and produces a fully valid [`DepositRequest`].
///
/// Every field is coerced and checked on its own, so a rejection lists all
/// of the problems at once rather than stopping at the first one.
pub fn validate(raw: &RawDepositInput) -> Result<DepositRequest, ValidationErrors> {
    DepositRequest::assemble(
        coerce_number(raw.principal.as_deref()),
        coerce_number(raw.annual_rate_percent.as_deref()),
        coerce_number(raw.tenure_years.as_deref()),
        coerce_frequency(raw.compounding_frequency.as_deref()),
    )
}

fn coerce_number(raw: Option<&str>) -> Result<f64, ValidationErrorKind> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or(ValidationErrorKind::NotANumber)
}

fn coerce_frequency(raw: Option<&str>) -> Result<CompoundingFrequency, ValidationErrorKind> {
    raw.and_then(CompoundingFrequency::from_token)
        .ok_or(ValidationErrorKind::InvalidFrequencyToken)
}
