use bson::Bson;
use docmap_query::{Condition, FieldValue, MatchError, Operator};

use crate::bits::{BITS_ALL_CLEAR, BITS_ALL_SET, BITS_ANY_CLEAR, BITS_ANY_SET, BitTest};

/// Evaluator registered for `operator`.
pub fn evaluator(operator: Operator) -> &'static BitTest {
    match operator {
        Operator::BitsAllClear => &BITS_ALL_CLEAR,
        Operator::BitsAllSet => &BITS_ALL_SET,
        Operator::BitsAnyClear => &BITS_ANY_CLEAR,
        Operator::BitsAnySet => &BITS_ANY_SET,
    }
}

/// Evaluate a field condition by operator name.
///
/// The condition is classified before the field is looked at, so a malformed
/// condition is reported even when the field is absent. Absent fields and
/// values that are not bit-testable never match. Array values match when any
/// element matches.
pub fn matches(
    operator: &str,
    exists: bool,
    value: Option<&Bson>,
    condition: &Bson,
) -> Result<bool, MatchError> {
    let operator =
        Operator::from_name(operator).ok_or_else(|| MatchError::UnknownOperator(operator.into()))?;
    let test = evaluator(operator);
    let condition = Condition::parse(operator.name(), condition)?;

    let value = match value {
        Some(v) if exists => v,
        _ => return Ok(false),
    };

    Ok(match value {
        Bson::Array(items) => items.iter().any(|item| matches_value(test, item, &condition)),
        _ => matches_value(test, value, &condition),
    })
}

fn matches_value(test: &BitTest, value: &Bson, condition: &Condition) -> bool {
    match FieldValue::from_bson(value) {
        Some(field) => test.evaluate(&field, condition),
        None => {
            tracing::trace!(operator = %test.operator(), %value, "value is not bit-testable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::bson;

    #[test]
    fn every_operator_has_its_own_evaluator() {
        for op in Operator::ALL {
            assert_eq!(evaluator(op).operator(), op);
        }
    }

    #[test]
    fn unknown_operator() {
        let err = matches("$bitsSomeClear", true, Some(&Bson::Int32(1)), &Bson::Int32(1)).unwrap_err();
        assert_eq!(err, MatchError::UnknownOperator("$bitsSomeClear".into()));
    }

    #[test]
    fn absent_field_does_not_match() {
        assert_eq!(matches("$bitsAnyClear", false, None, &Bson::Int32(1)), Ok(false));
        assert_eq!(
            matches("$bitsAnyClear", false, Some(&Bson::Int32(0)), &Bson::Int32(1)),
            Ok(false)
        );
    }

    #[test]
    fn absent_field_still_validates_condition() {
        let err = matches("$bitsAnyClear", false, None, &bson!("nope")).unwrap_err();
        assert!(matches!(err, MatchError::InvalidCondition(_)));
    }

    #[test]
    fn array_matches_if_any_element_matches() {
        let value = bson!([15, 10]);
        assert_eq!(matches("$bitsAnyClear", true, Some(&value), &bson!([0])), Ok(true));
        assert_eq!(matches("$bitsAllSet", true, Some(&value), &bson!([0, 3])), Ok(true));
        assert_eq!(matches("$bitsAllClear", true, Some(&value), &bson!([1])), Ok(false));
    }

    #[test]
    fn non_numeric_values_do_not_match() {
        assert_eq!(
            matches("$bitsAnyClear", true, Some(&bson!("10")), &Bson::Int32(1)),
            Ok(false)
        );
        assert_eq!(
            matches("$bitsAllClear", true, Some(&Bson::Null), &bson!([0])),
            Ok(false)
        );
    }
}
