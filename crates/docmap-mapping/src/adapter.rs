use bson::Bson;

use crate::integer::IntegerAdapter;
use crate::stringified_symbol::StringifiedSymbolAdapter;

/// Conversion between native values and their stored form for one value kind.
///
/// Conversions are total: an absent or unconvertible input yields `None`,
/// never an error.
pub trait Adapter: Send + Sync {
    /// Stored form → native form.
    fn demongoize(&self, value: Option<&Bson>) -> Option<Bson>;

    /// Native form → stored form.
    fn mongoize(&self, value: Option<&Bson>) -> Option<Bson>;

    /// Query condition → stored form.
    fn evolve(&self, value: Option<&Bson>) -> Option<Bson> {
        self.mongoize(value)
    }
}

/// Value kinds with a registered adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    StringifiedSymbol,
    Integer,
}

static STRINGIFIED_SYMBOL: StringifiedSymbolAdapter = StringifiedSymbolAdapter;
static INTEGER: IntegerAdapter = IntegerAdapter;

/// Adapter registered for `kind`.
pub fn adapter_for(kind: ValueKind) -> &'static dyn Adapter {
    match kind {
        ValueKind::StringifiedSymbol => &STRINGIFIED_SYMBOL,
        ValueKind::Integer => &INTEGER,
    }
}
