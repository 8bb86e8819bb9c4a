mod condition;
mod error;
mod operator;
mod value;

pub use condition::Condition;
pub use error::{InvalidQueryCondition, MatchError};
pub use operator::{BitState, Operator, Quantifier};
pub use value::FieldValue;
