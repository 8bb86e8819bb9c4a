//! Conversions between native values and their stored representation.

mod adapter;
mod identifier;
mod integer;
mod stringified_symbol;

pub use adapter::{Adapter, ValueKind, adapter_for};
pub use identifier::{IDENTIFIER_FIELDS, is_identifier_field, is_identifier_name};
pub use integer::IntegerAdapter;
pub use stringified_symbol::StringifiedSymbolAdapter;
