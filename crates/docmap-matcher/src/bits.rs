use std::borrow::Cow;

use bson::Bson;
use docmap_query::{BitState, Condition, FieldValue, InvalidQueryCondition, Operator, Quantifier};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

use crate::decode::decode_binary;

/// One member of the bit-test family.
///
/// Every member decodes the field value and the condition to integers the
/// same way; they differ only in the quantifier over the referenced bits and
/// the bit state being looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTest {
    operator: Operator,
}

pub const BITS_ALL_CLEAR: BitTest = BitTest::new(Operator::BitsAllClear);
pub const BITS_ALL_SET: BitTest = BitTest::new(Operator::BitsAllSet);
pub const BITS_ANY_CLEAR: BitTest = BitTest::new(Operator::BitsAnyClear);
pub const BITS_ANY_SET: BitTest = BitTest::new(Operator::BitsAnySet);

impl BitTest {
    pub const fn new(operator: Operator) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Evaluate against a raw condition.
    ///
    /// `exists` is accepted for parity with the other field operators; bit
    /// tests leave existence gating to the dispatcher.
    pub fn matches(
        &self,
        _exists: bool,
        value: &FieldValue,
        condition: &Bson,
    ) -> Result<bool, InvalidQueryCondition> {
        let condition = Condition::parse(self.operator.name(), condition)?;
        Ok(self.evaluate(value, &condition))
    }

    /// Evaluate against an already classified condition.
    pub fn evaluate(&self, value: &FieldValue, condition: &Condition) -> bool {
        let value = field_integer(value);
        match condition {
            Condition::BitPositions(positions) => {
                let wanted = self.operator.target() == BitState::Set;
                let hit = |&c: &u64| bit_is_set(&value, c) == wanted;
                match self.operator.quantifier() {
                    Quantifier::Any => positions.iter().any(hit),
                    Quantifier::All => positions.iter().all(hit),
                }
            }
            Condition::Mask(mask) => self.combine_mask(&value, mask),
            Condition::BinaryMask(bytes) => self.combine_mask(&value, &decode_binary(bytes)),
        }
    }

    fn combine_mask(&self, value: &BigInt, mask: &BigInt) -> bool {
        let overlap = value & mask;
        match self.operator {
            Operator::BitsAllClear => overlap.is_zero(),
            Operator::BitsAllSet => &overlap == mask,
            Operator::BitsAnySet => !overlap.is_zero(),
            // Two-clause disjunction, kept unsimplified.
            Operator::BitsAnyClear => {
                overlap.is_zero() || (&overlap != mask && overlap > BigInt::zero())
            }
        }
    }
}

fn field_integer(value: &FieldValue) -> Cow<'_, BigInt> {
    match value {
        FieldValue::Integer(n) => Cow::Borrowed(n),
        FieldValue::BinaryBlob(bytes) => Cow::Owned(decode_binary(bytes)),
    }
}

/// Two's complement bit test. Positions past the magnitude carry the sign.
pub(crate) fn bit_is_set(value: &BigInt, position: u64) -> bool {
    if position >= value.bits() {
        return value.sign() == Sign::Minus;
    }
    !(value & (BigInt::one() << position)).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::spec::BinarySubtype;

    fn int(n: i64) -> FieldValue {
        FieldValue::from(n)
    }

    fn mask(n: i64) -> Condition {
        Condition::Mask(BigInt::from(n))
    }

    fn positions(p: &[u64]) -> Condition {
        Condition::BitPositions(p.to_vec())
    }

    #[test]
    fn any_clear_positions() {
        assert!(BITS_ANY_CLEAR.evaluate(&int(0b1010), &positions(&[0, 1])));
        assert!(!BITS_ANY_CLEAR.evaluate(&int(0b1010), &positions(&[1, 3])));
    }

    #[test]
    fn any_clear_mask_fully_covered() {
        // overlap 4 == mask 4
        assert!(!BITS_ANY_CLEAR.evaluate(&int(0b0110), &mask(0b0100)));
    }

    #[test]
    fn any_clear_mask_partial_overlap() {
        // overlap 4, mask 12
        assert!(BITS_ANY_CLEAR.evaluate(&int(0b0110), &mask(0b1100)));
    }

    #[test]
    fn any_clear_mask_no_overlap() {
        assert!(BITS_ANY_CLEAR.evaluate(&int(0b0011), &mask(0b1100)));
    }

    #[test]
    fn any_clear_zero_mask_matches() {
        assert!(BITS_ANY_CLEAR.evaluate(&int(0), &mask(0)));
        assert!(BITS_ANY_CLEAR.evaluate(&int(0b1111), &mask(0)));
    }

    #[test]
    fn binary_field_value_decodes_before_testing() {
        let blob = FieldValue::BinaryBlob(vec![0x00, 0x0A]);
        assert!(BITS_ANY_CLEAR.evaluate(&blob, &positions(&[0, 1])));
        assert!(!BITS_ANY_CLEAR.evaluate(&blob, &positions(&[1, 3])));
    }

    #[test]
    fn binary_mask_decodes_before_testing() {
        let cond = Condition::BinaryMask(vec![0x0C]);
        assert!(BITS_ANY_CLEAR.evaluate(&int(6), &cond));
        assert!(!BITS_ANY_CLEAR.evaluate(&int(12), &cond));
    }

    #[test]
    fn all_clear() {
        assert!(BITS_ALL_CLEAR.evaluate(&int(0b1010), &positions(&[0, 2])));
        assert!(!BITS_ALL_CLEAR.evaluate(&int(0b1010), &positions(&[0, 1])));
        assert!(BITS_ALL_CLEAR.evaluate(&int(0b1010), &mask(0b0101)));
        assert!(!BITS_ALL_CLEAR.evaluate(&int(0b1010), &mask(0b0110)));
    }

    #[test]
    fn all_set() {
        assert!(BITS_ALL_SET.evaluate(&int(0b1010), &positions(&[1, 3])));
        assert!(!BITS_ALL_SET.evaluate(&int(0b1010), &positions(&[0, 1])));
        assert!(BITS_ALL_SET.evaluate(&int(0b1110), &mask(0b0110)));
        assert!(!BITS_ALL_SET.evaluate(&int(0b1010), &mask(0b0110)));
    }

    #[test]
    fn any_set() {
        assert!(BITS_ANY_SET.evaluate(&int(0b1010), &positions(&[0, 1])));
        assert!(!BITS_ANY_SET.evaluate(&int(0b1010), &positions(&[0, 2])));
        assert!(BITS_ANY_SET.evaluate(&int(0b1010), &mask(0b0010)));
        assert!(!BITS_ANY_SET.evaluate(&int(0b1010), &mask(0b0101)));
    }

    #[test]
    fn empty_position_list_follows_quantifier() {
        let empty = positions(&[]);
        assert!(!BITS_ANY_CLEAR.evaluate(&int(0), &empty));
        assert!(!BITS_ANY_SET.evaluate(&int(-1), &empty));
        assert!(BITS_ALL_CLEAR.evaluate(&int(-1), &empty));
        assert!(BITS_ALL_SET.evaluate(&int(0), &empty));
    }

    #[test]
    fn negative_values_sign_extend() {
        // -4 is ...11100
        assert!(!bit_is_set(&BigInt::from(-4), 0));
        assert!(!bit_is_set(&BigInt::from(-4), 1));
        assert!(bit_is_set(&BigInt::from(-4), 2));
        assert!(bit_is_set(&BigInt::from(-4), 200));
        assert!(!bit_is_set(&BigInt::from(4), 200));
        assert!(BITS_ALL_SET.evaluate(&int(-1), &positions(&[0, 63, 1_000_000])));
    }

    #[test]
    fn huge_positions_do_not_allocate_a_mask() {
        assert!(BITS_ANY_CLEAR.evaluate(&int(1), &positions(&[u64::MAX])));
    }

    #[test]
    fn raw_condition_is_classified() {
        let raw = Bson::Binary(bson::Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![0x0C],
        });
        assert_eq!(BITS_ANY_CLEAR.matches(true, &int(6), &raw), Ok(true));
        assert_eq!(BITS_ANY_CLEAR.matches(true, &int(6), &Bson::Int32(4)), Ok(false));
    }

    #[test]
    fn unsupported_condition_is_an_error() {
        let raw = Bson::String("not-a-valid-shape".into());
        let err = BITS_ANY_CLEAR.matches(true, &int(6), &raw).unwrap_err();
        assert_eq!(err.operator, "$bitsAnyClear");
        assert_eq!(err.condition, raw);
    }

    #[test]
    fn existence_flag_is_not_consulted() {
        assert_eq!(BITS_ANY_CLEAR.matches(false, &int(0b1010), &Bson::Int32(1)), Ok(true));
    }
}
