use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::interfaces::outcome::RowOutcome;
    use crate::domain::deposit::RawDepositInput;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_json_appends_newline() {
        let rows = vec![RowOutcome::evaluate(
            1,
            Ok(RawDepositInput::new("1000", "10", "1", "annual")),
        )];
        let mut out = Vec::new();
        write_json(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("]\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["row"], 1);
    }

    #[test]
    fn test_write_json_reports_serialization_failure() {
        // JSON object keys must be strings.
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1);
        let err = write_json(&mut Vec::new(), &map).unwrap_err();
        assert!(matches!(err, CalculatorError::JsonError(_)));
    }
}
