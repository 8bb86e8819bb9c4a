use bson::Bson;

/// Field names treated as the document's primary key.
pub const IDENTIFIER_FIELDS: [&str; 2] = ["id", "_id"];

/// Whether `name` is an identifier field name. Case-sensitive.
pub fn is_identifier_name(name: &str) -> bool {
    IDENTIFIER_FIELDS.contains(&name)
}

/// Whether a string or symbol value names an identifier field.
pub fn is_identifier_field(value: &Bson) -> bool {
    match value {
        Bson::String(s) | Bson::Symbol(s) => is_identifier_name(s),
        _ => false,
    }
}
