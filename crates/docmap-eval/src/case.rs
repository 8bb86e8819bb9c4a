use std::io::{Read, Write};

use bson::spec::BinarySubtype;
use bson::{Binary, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::error::CliError;

/// One predicate evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub operator: String,
    #[serde(default = "default_exists")]
    pub exists: bool,
    #[serde(default)]
    pub value: Option<Value>,
    pub condition: Value,
}

fn default_exists() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Evaluate every case in `input`, writing one JSON line per case to `output`.
/// Returns the number of cases that failed to evaluate.
pub fn run(config: &Config, input: impl Read, mut output: impl Write) -> Result<usize, CliError> {
    let cases: Vec<Case> = serde_json::from_reader(input)?;
    tracing::info!(cases = cases.len(), "evaluating");

    let mut failures = 0;
    for (index, case) in cases.iter().enumerate() {
        let outcome = match evaluate(case) {
            Ok(result) => Outcome {
                index,
                result: Some(result),
                error: None,
            },
            Err(CliError::Match { source, .. }) if !config.fail_fast => {
                tracing::warn!(index, error = %source, "case failed");
                failures += 1;
                Outcome {
                    index,
                    result: None,
                    error: Some(source.to_string()),
                }
            }
            Err(CliError::Match { source, .. }) => return Err(CliError::Match { index, source }),
            Err(e) => return Err(e),
        };
        serde_json::to_writer(&mut output, &outcome)?;
        writeln!(output)?;
    }
    Ok(failures)
}

fn evaluate(case: &Case) -> Result<bool, CliError> {
    let value = case.value.as_ref().map(to_bson).transpose()?;
    let condition = to_bson(&case.condition)?;
    docmap_matcher::matches(&case.operator, case.exists, value.as_ref(), &condition)
        .map_err(|source| CliError::Match { index: 0, source })
}

/// Convert JSON to BSON. `{"$binary": "<hex>"}` denotes a binary blob;
/// integers use the narrowest BSON integer type that holds them.
pub fn to_bson(value: &Value) -> Result<Bson, CliError> {
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_or(Bson::Int64(i), Bson::Int32)
            } else if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                Bson::Double(f)
            } else {
                return Err(CliError::Input(format!("integer out of range: {n}")));
            }
        }
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(to_bson).collect::<Result<_, _>>()?),
        Value::Object(map) => match (map.len(), map.get("$binary")) {
            (1, Some(Value::String(hex_str))) => {
                let bytes = hex::decode(hex_str)
                    .map_err(|e| CliError::Input(format!("bad $binary hex: {e}")))?;
                Bson::Binary(Binary {
                    subtype: BinarySubtype::Generic,
                    bytes,
                })
            }
            _ => {
                let mut doc = Document::new();
                for (key, item) in map {
                    doc.insert(key.clone(), to_bson(item)?);
                }
                Bson::Document(doc)
            }
        },
    })
}
