//! Identifier normalization: derives every naming variant the enriched
//! metadata model carries from a raw schema identifier. All functions are
//! pure; the same input always yields the same output.

pub mod inflect;
pub mod initialisms;

pub use inflect::{plural, singular};
pub use initialisms::correct_initialisms;

use convert_case::{Case, Casing};

/// Upper-camel (PascalCase) form of an identifier.
pub fn pascal(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// Full lower-camel conversion ("user_id" -> "userId").
pub fn lower_camel(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Camel to snake ("UserStream" -> "user_stream").
pub fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Lower-case only the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// JSON key form of a raw identifier: lower-camel, with a trailing "id"
/// normalized to "Id". The column literally named "id" is left alone.
pub fn json_key(raw: &str) -> String {
    let key = lower_camel(raw);
    if key != "id" && key.ends_with("id") {
        let stem = &key[..key.len() - 2];
        return format!("{stem}Id");
    }
    key
}

/// Upper-camel form of the pluralized identifier. A trailing literal "ids"
/// left over from camelizing an "_ids" suffix is corrected to "Ids".
pub fn pascal_plural(raw: &str) -> String {
    let mut name = pascal(&plural(raw));
    if name.ends_with("ids") {
        name.truncate(name.len() - 3);
        name.push_str("Ids");
    }
    name
}

/// Terse per-table alias: the upper-case letters of a pascal identifier,
/// concatenated and lower-cased ("UserAccount" -> "ua").
pub fn short_name(pascal_name: &str) -> String {
    pascal_name
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
