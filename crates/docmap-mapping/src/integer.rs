use bson::Bson;

use crate::adapter::Adapter;

/// 64-bit integers.
///
/// Doubles and numeric strings truncate toward zero; anything non-numeric or
/// out of range is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAdapter;

impl Adapter for IntegerAdapter {
    fn demongoize(&self, value: Option<&Bson>) -> Option<Bson> {
        to_i64(value?).map(Bson::Int64)
    }

    fn mongoize(&self, value: Option<&Bson>) -> Option<Bson> {
        to_i64(value?).map(Bson::Int64)
    }
}

fn to_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        Bson::Double(d) => truncate(*d),
        Bson::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(d: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    let t = d.trunc();
    (t.is_finite() && (-LIMIT..LIMIT).contains(&t)).then_some(t as i64)
}
