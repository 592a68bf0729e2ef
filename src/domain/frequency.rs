use std::fmt;
use std::str::FromStr;

use super::validation::ValidationErrorKind;

/// How often interest is credited to the deposit.
///
/// Variants are declared in ascending periods-per-year order, which is also
/// the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompoundingFrequency {
    Annual,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    pub const ALL: [Self; 4] = [
        Self::Annual,
        Self::HalfYearly,
        Self::Quarterly,
        Self::Monthly,
    ];

    /// Number of compounding periods in one year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::HalfYearly => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::HalfYearly => "half-yearly",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
        }
    }

    /// Looks a raw token up in the fixed table of accepted spellings.
    ///
    /// Accepts exactly the canonical lowercase names and the periods-per-year
    /// numerals. Only surrounding whitespace is ignored, as for the numeric
    /// fields. Anything else is `None`; there is no fallback frequency.
    pub fn from_token(raw: &str) -> Option<Self> {
        let token = raw.trim();
        Self::ALL.into_iter().find(|frequency| {
            token == frequency.token() || token == frequency.periods_per_year().to_string()
        })
    }
}

impl FromStr for CompoundingFrequency {
    type Err = ValidationErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or(ValidationErrorKind::InvalidFrequencyToken)
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
