use bson::Bson;

use crate::adapter::Adapter;

/// Symbols stored as plain strings.
///
/// The native form is `Bson::Symbol`; the stored form is `Bson::String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringifiedSymbolAdapter;

impl Adapter for StringifiedSymbolAdapter {
    fn demongoize(&self, value: Option<&Bson>) -> Option<Bson> {
        match value? {
            Bson::String(s) | Bson::Symbol(s) => Some(Bson::Symbol(s.clone())),
            _ => None,
        }
    }

    fn mongoize(&self, value: Option<&Bson>) -> Option<Bson> {
        text(value?).map(Bson::String)
    }
}

/// Textual form of a scalar. Compound values, binaries and null have none.
fn text(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) | Bson::Symbol(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(d) => Some(float_text(*d)),
        Bson::Boolean(b) => Some(b.to_string()),
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        _ => None,
    }
}

/// Shortest round-trip digits, laid out the way the stored documents expect:
/// plain notation with a trailing `.0` for whole values while the decimal
/// point sits between 10^-4 and 10^16, exponent form (`1.0e+20`, `1.0e-05`)
/// outside that window.
fn float_text(d: f64) -> String {
    if d.is_nan() {
        return "NaN".into();
    }
    if d.is_infinite() {
        return if d > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    let sign = if d.is_sign_negative() { "-" } else { "" };
    let sci = format!("{:e}", d.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exp.parse::<i32>().unwrap_or(0) + 1;
    let len = digits.len() as i32;

    let body = if point > 0 && point <= 16 {
        if len <= point {
            format!("{digits}{}.0", "0".repeat((point - len) as usize))
        } else {
            let (whole, frac) = digits.split_at(point as usize);
            format!("{whole}.{frac}")
        }
    } else if point > -4 && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        format!("{lead}.{rest}e{:+03}", point - 1)
    };
    format!("{sign}{body}")
}
