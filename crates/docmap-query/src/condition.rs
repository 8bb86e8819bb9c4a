use bson::Bson;
use num_bigint::BigInt;

use crate::error::InvalidQueryCondition;
use crate::value::integral_double;

/// The right-hand argument of a bit-test operator.
///
/// Exactly one shape is active per evaluation. The only conversion between
/// shapes is `BinaryMask` to an integer mask, done by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Zero-indexed bit positions, counted from the least-significant bit.
    BitPositions(Vec<u64>),
    Mask(BigInt),
    BinaryMask(Vec<u8>),
}

impl Condition {
    /// Classify a raw condition for `operator`.
    ///
    /// - `[0, 3, 5]` (non-negative integers) → `BitPositions`
    /// - `Int32` / `Int64` → `Mask`
    /// - `Binary` → `BinaryMask`
    ///
    /// Any other shape, including a position list holding a negative or
    /// non-integer element, is rejected with the offending value attached.
    pub fn parse(operator: &'static str, condition: &Bson) -> Result<Condition, InvalidQueryCondition> {
        let parsed = match condition {
            Bson::Array(items) => items
                .iter()
                .map(bit_position)
                .collect::<Option<Vec<_>>>()
                .map(Condition::BitPositions),
            Bson::Int32(n) => Some(Condition::Mask(BigInt::from(*n))),
            Bson::Int64(n) => Some(Condition::Mask(BigInt::from(*n))),
            Bson::Binary(bin) => Some(Condition::BinaryMask(bin.bytes.clone())),
            _ => None,
        };

        parsed.ok_or_else(|| {
            tracing::debug!(operator, %condition, "rejected bit-test condition");
            InvalidQueryCondition {
                operator,
                condition: condition.clone(),
            }
        })
    }
}

fn bit_position(item: &Bson) -> Option<u64> {
    let n = match item {
        Bson::Int32(n) => i64::from(*n),
        Bson::Int64(n) => *n,
        Bson::Double(d) => integral_double(*d)?,
        _ => return None,
    };
    u64::try_from(n).ok()
}
