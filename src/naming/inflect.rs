/// Nouns that keep the same form in singular and plural, matched against
/// the whole identifier
const UNCOUNTABLE: &[&str] = &[
    "data", "deer", "equipment", "fish", "information", "money", "news", "rice", "series",
    "sheep", "species",
];

/// Singular nouns ending in "s" whose plural takes "es"; listed explicitly
/// so their plurals are not confused with vowel+"se" words like "houses"
const ES_NOUNS: &[&str] = &["alias", "bus", "status"];

/// Irregular singular/plural pairs, matched as suffixes
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Pluralize an identifier.
///
/// Uncountables must match the whole identifier; irregular pairs match as
/// suffixes. One domain override: "information" pluralizes to
/// "informations" even though English treats it as uncountable. Downstream
/// generated code relies on the plural form being distinct from the
/// singular.
pub fn plural(s: &str) -> String {
    let out = pluralize(s);
    match out.as_str() {
        "information" => "informations".to_string(),
        "Information" => "Informations".to_string(),
        _ => out,
    }
}

fn pluralize(s: &str) -> String {
    if s.is_empty() || is_uncountable(s) {
        return s.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if let Some(prefix) = s.strip_suffix(singular) {
            return format!("{prefix}{plural}");
        }
    }

    if let Some(stem) = s.strip_suffix('y') {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{stem}ies");
        }
    }

    if s.ends_with('s')
        || s.ends_with('x')
        || s.ends_with('z')
        || s.ends_with("ch")
        || s.ends_with("sh")
    {
        return format!("{s}es");
    }

    format!("{s}s")
}

/// Singularize an identifier. Inverse of [`plural`] for the rule set above.
pub fn singular(s: &str) -> String {
    if s.is_empty() || is_uncountable(s) {
        return s.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if let Some(prefix) = s.strip_suffix(plural) {
            return format!("{prefix}{singular}");
        }
    }

    if let Some(stem) = s.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    // "es" came from a sibilant ending; vowel+"se" words like "releases"
    // only gained a plain "s" and fall through to the strip below
    if let Some(stem) = s.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
            || ES_NOUNS.iter().any(|word| stem.ends_with(word))
        {
            return stem.to_string();
        }
    }

    // "status", "address", "analysis" style endings are already singular
    if s.ends_with("ss") || s.ends_with("us") || s.ends_with("is") {
        return s.to_string();
    }

    if s.len() > 1 && s.ends_with('s') {
        return s[..s.len() - 1].to_string();
    }

    s.to_string()
}

fn is_uncountable(s: &str) -> bool {
    UNCOUNTABLE.contains(&s)
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(s.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_regular() {
        assert_eq!(plural("table"), "tables");
        assert_eq!(plural("user"), "users");
        assert_eq!(plural("category"), "categories");
        assert_eq!(plural("box"), "boxes");
        assert_eq!(plural("address"), "addresses");
        assert_eq!(plural("day"), "days");
    }

    #[test]
    fn test_plural_information_override() {
        assert_eq!(plural("information"), "informations");
        // uncountables match the whole identifier only
        assert_eq!(plural("user_information"), "user_informations");
    }

    #[test]
    fn test_plural_irregular() {
        assert_eq!(plural("person"), "people");
        assert_eq!(plural("sales_person"), "sales_people");
        assert_eq!(plural("child"), "children");
    }

    #[test]
    fn test_singular_regular() {
        assert_eq!(singular("tables"), "table");
        assert_eq!(singular("users"), "user");
        assert_eq!(singular("categories"), "category");
        assert_eq!(singular("boxes"), "box");
        assert_eq!(singular("addresses"), "address");
        assert_eq!(singular("statuses"), "status");
        assert_eq!(singular("buses"), "bus");
    }

    #[test]
    fn test_singular_vowel_se_words() {
        assert_eq!(singular("releases"), "release");
        assert_eq!(singular("houses"), "house");
        assert_eq!(singular("cases"), "case");
        assert_eq!(singular("databases"), "database");
    }

    #[test]
    fn test_singular_already_singular() {
        assert_eq!(singular("status"), "status");
        assert_eq!(singular("address"), "address");
        assert_eq!(singular("analysis"), "analysis");
        assert_eq!(singular("information"), "information");
    }

    #[test]
    fn test_singular_irregular() {
        assert_eq!(singular("people"), "person");
        assert_eq!(singular("children"), "child");
        assert_eq!(singular("grand_children"), "grand_child");
    }

    #[test]
    fn test_round_trip() {
        for name in ["account", "entry", "user_id", "status", "release", "house", "case", "bus"] {
            assert_eq!(singular(&plural(name)), name);
        }
    }
}
