use bson::Bson;

/// A condition handed to a bit-test operator that is not one of the shapes
/// the operator accepts. Signals a malformed query, never a non-match.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid query: unknown {operator} argument {condition}")]
pub struct InvalidQueryCondition {
    pub operator: &'static str,
    pub condition: Bson,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    InvalidCondition(#[from] InvalidQueryCondition),
    #[error("invalid query: unknown operator {0}")]
    UnknownOperator(String),
}
