use crate::application::validator::validate;
use crate::domain::deposit::{DepositRequest, DepositResult, RawDepositInput};
use crate::domain::validation::ValidationErrors;
use tracing::{debug, warn};

/// Computes maturity value and interest with discrete periodic compounding.
///
/// `maturity = principal * (1 + r/n)^(n*t)`, where the exponent is real so a
/// fractional tenure compounds over a fractional number of periods. Nothing
/// is rounded here; rounding to currency precision is a display concern.
pub fn compute(request: DepositRequest) -> DepositResult {
    let growth = (1.0 + request.periodic_rate()).powf(request.number_of_periods());
    let maturity_value = request.principal() * growth;
    DepositResult::new(request.principal(), maturity_value - request.principal())
}

/// Validates raw input and, only if it passes, computes the result.
pub fn calculate(raw: &RawDepositInput) -> Result<DepositResult, ValidationErrors> {
    match validate(raw) {
        Ok(request) => {
            let result = compute(request);
            if result.overflowed() {
                warn!(
                    principal = result.principal(),
                    tenure_years = request.tenure_years(),
                    "Maturity value exceeds the floating point range"
                );
            }
            debug!(
                principal = result.principal(),
                frequency = %request.compounding_frequency(),
                maturity_value = result.maturity_value(),
                "Deposit calculated"
            );
            Ok(result)
        }
        Err(errors) => {
            debug!(errors = %errors.codes(), "Deposit rejected");
            Err(errors)
        }
    }
}
