/// Operators of the bit-test family.
///
/// Each operator is a quantifier (any/all) over the referenced bits paired
/// with the bit state it looks for (clear/set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    BitsAllClear,
    BitsAllSet,
    BitsAnyClear,
    BitsAnySet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Any,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitState {
    Clear,
    Set,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::BitsAllClear,
        Operator::BitsAllSet,
        Operator::BitsAnyClear,
        Operator::BitsAnySet,
    ];

    /// Look up an operator by its query-language name, e.g. `$bitsAnyClear`.
    pub fn from_name(name: &str) -> Option<Operator> {
        match name {
            "$bitsAllClear" => Some(Operator::BitsAllClear),
            "$bitsAllSet" => Some(Operator::BitsAllSet),
            "$bitsAnyClear" => Some(Operator::BitsAnyClear),
            "$bitsAnySet" => Some(Operator::BitsAnySet),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::BitsAllClear => "$bitsAllClear",
            Operator::BitsAllSet => "$bitsAllSet",
            Operator::BitsAnyClear => "$bitsAnyClear",
            Operator::BitsAnySet => "$bitsAnySet",
        }
    }

    pub fn quantifier(self) -> Quantifier {
        match self {
            Operator::BitsAnyClear | Operator::BitsAnySet => Quantifier::Any,
            Operator::BitsAllClear | Operator::BitsAllSet => Quantifier::All,
        }
    }

    pub fn target(self) -> BitState {
        match self {
            Operator::BitsAllClear | Operator::BitsAnyClear => BitState::Clear,
            Operator::BitsAllSet | Operator::BitsAnySet => BitState::Set,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
