use crate::domain::deposit::{DepositRequest, DepositResult};
use crate::interfaces::format::{to_currency, to_percent};
use std::io::{self, Write};

/// Human-readable summary of one calculation, including the
/// principal/interest split a chart would show.
pub fn write_report<W: Write>(
    out: &mut W,
    request: &DepositRequest,
    result: &DepositResult,
) -> io::Result<()> {
    writeln!(out, "Principal:        {}", to_currency(result.principal()))?;
    writeln!(out, "Total interest:   {}", to_currency(result.total_interest()))?;
    writeln!(out, "Maturity value:   {}", to_currency(result.maturity_value()))?;
    writeln!(
        out,
        "Effective yield:  {} ({} compounding)",
        to_percent(request.effective_annual_rate()),
        request.compounding_frequency()
    )?;
    writeln!(
        out,
        "Split:            {} principal / {} interest",
        to_percent(result.principal_share()),
        to_percent(result.interest_share())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::compute;
    use crate::domain::frequency::CompoundingFrequency;

    #[test]
    fn test_report_lines() {
        let request = DepositRequest::new(1000.0, 10.0, 1.0, CompoundingFrequency::Annual).unwrap();
        let result = compute(request);
        let mut out = Vec::new();
        write_report(&mut out, &request, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Principal:        1000.00"));
        assert!(text.contains("Total interest:   100.00"));
        assert!(text.contains("Maturity value:   1100.00"));
        assert!(text.contains("Effective yield:  10.00% (annual compounding)"));
        assert!(text.contains("Split:            90.91% principal / 9.09% interest"));
    }
}
