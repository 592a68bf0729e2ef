use serde::{Deserialize, Serialize, Serializer};

use super::frequency::CompoundingFrequency;
use super::validation::{ErrorCollector, Field, ValidationErrorKind, ValidationErrors};

/// Raw, unchecked values as they arrive from a form, a CSV row or the CLI.
///
/// A missing value is `None`. Nothing here is trusted until it has gone
/// through [`crate::application::validator::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDepositInput {
    pub principal: Option<String>,
    pub annual_rate_percent: Option<String>,
    pub tenure_years: Option<String>,
    pub compounding_frequency: Option<String>,
}

impl RawDepositInput {
    pub fn new(
        principal: impl Into<String>,
        annual_rate_percent: impl Into<String>,
        tenure_years: impl Into<String>,
        compounding_frequency: impl Into<String>,
    ) -> Self {
        Self {
            principal: Some(principal.into()),
            annual_rate_percent: Some(annual_rate_percent.into()),
            tenure_years: Some(tenure_years.into()),
            compounding_frequency: Some(compounding_frequency.into()),
        }
    }
}

/// A fixed deposit that satisfies every field constraint at once.
///
/// Fields are private so a request can only be obtained through
/// [`DepositRequest::new`] or the validator, never in a partially valid state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositRequest {
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
    compounding_frequency: CompoundingFrequency,
}

impl DepositRequest {
    /// Builds a request from typed values, reporting every violated rule.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: f64,
        compounding_frequency: CompoundingFrequency,
    ) -> Result<Self, ValidationErrors> {
        Self::assemble(
            Ok(principal),
            Ok(annual_rate_percent),
            Ok(tenure_years),
            Ok(compounding_frequency),
        )
    }

    /// Runs the numeric rules over values that have already been coerced
    /// (or failed to coerce) and collects the outcome field by field.
    pub(crate) fn assemble(
        principal: Result<f64, ValidationErrorKind>,
        annual_rate_percent: Result<f64, ValidationErrorKind>,
        tenure_years: Result<f64, ValidationErrorKind>,
        compounding_frequency: Result<CompoundingFrequency, ValidationErrorKind>,
    ) -> Result<Self, ValidationErrors> {
        let mut collector = ErrorCollector::default();
        let principal = collector.check(
            Field::Principal,
            principal.and_then(|v| Field::Principal.check_number(v)),
        );
        let annual_rate_percent = collector.check(
            Field::AnnualRatePercent,
            annual_rate_percent.and_then(|v| Field::AnnualRatePercent.check_number(v)),
        );
        let tenure_years = collector.check(
            Field::TenureYears,
            tenure_years.and_then(|v| Field::TenureYears.check_number(v)),
        );
        let compounding_frequency =
            collector.check(Field::CompoundingFrequency, compounding_frequency);

        let request = match (
            principal,
            annual_rate_percent,
            tenure_years,
            compounding_frequency,
        ) {
            (
                Some(principal),
                Some(annual_rate_percent),
                Some(tenure_years),
                Some(compounding_frequency),
            ) => Some(Self {
                principal,
                annual_rate_percent,
                tenure_years,
                compounding_frequency,
            }),
            _ => None,
        };
        collector.finish(request)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn tenure_years(&self) -> f64 {
        self.tenure_years
    }

    pub fn compounding_frequency(&self) -> CompoundingFrequency {
        self.compounding_frequency
    }

    /// Interest rate applied per compounding period, as a fraction.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / f64::from(self.compounding_frequency.periods_per_year())
    }

    /// Compounding periods over the whole tenure. Fractional when the tenure
    /// does not end on a period boundary.
    pub fn number_of_periods(&self) -> f64 {
        f64::from(self.compounding_frequency.periods_per_year()) * self.tenure_years
    }

    /// Annual yield once compounding is taken into account, as a fraction.
    pub fn effective_annual_rate(&self) -> f64 {
        let periods = self.compounding_frequency.periods_per_year();
        (1.0 + self.periodic_rate()).powi(periods as i32) - 1.0
    }
}

/// Outcome of a deposit calculation. Amounts are unrounded.
///
/// `maturity_value` is always exactly `principal + total_interest`.
/// Very large deposits can grow past `f64::MAX`; the amounts are then
/// infinite and serialize as the string `"inf"` instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResult {
    #[serde(serialize_with = "serialize_amount")]
    principal: f64,
    #[serde(serialize_with = "serialize_amount")]
    total_interest: f64,
    #[serde(serialize_with = "serialize_amount")]
    maturity_value: f64,
}

fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.is_finite() {
        serializer.serialize_f64(*amount)
    } else {
        serializer.collect_str(amount)
    }
}

impl DepositResult {
    pub(crate) fn new(principal: f64, total_interest: f64) -> Self {
        Self {
            principal,
            total_interest,
            maturity_value: principal + total_interest,
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn total_interest(&self) -> f64 {
        self.total_interest
    }

    pub fn maturity_value(&self) -> f64 {
        self.maturity_value
    }

    /// True when growth exceeded the range of `f64`.
    pub fn overflowed(&self) -> bool {
        !self.maturity_value.is_finite()
    }

    /// Fraction of the maturity value that is the original principal.
    pub fn principal_share(&self) -> f64 {
        self.principal / self.maturity_value
    }

    /// Fraction of the maturity value that is earned interest.
    pub fn interest_share(&self) -> f64 {
        1.0 - self.principal_share()
    }
}
