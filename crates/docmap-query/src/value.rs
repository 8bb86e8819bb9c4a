use bson::Bson;
use num_bigint::BigInt;

/// A document field value as presented to a bit-test evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(BigInt),
    BinaryBlob(Vec<u8>),
}

impl FieldValue {
    /// Classify a stored value. Returns `None` for values that cannot take part
    /// in a bitwise test (strings, documents, fractional doubles, ...).
    pub fn from_bson(value: &Bson) -> Option<FieldValue> {
        match value {
            Bson::Int32(n) => Some(FieldValue::Integer(BigInt::from(*n))),
            Bson::Int64(n) => Some(FieldValue::Integer(BigInt::from(*n))),
            Bson::Double(d) => integral_double(*d).map(|n| FieldValue::Integer(BigInt::from(n))),
            Bson::Binary(bin) => Some(FieldValue::BinaryBlob(bin.bytes.clone())),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(BigInt::from(n))
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Integer(BigInt::from(n))
    }
}

/// Doubles count as integers only when finite, whole and within `i64` range.
pub(crate) fn integral_double(d: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if d.is_finite() && d.fract() == 0.0 && (-LIMIT..LIMIT).contains(&d) {
        Some(d as i64)
    } else {
        None
    }
}
