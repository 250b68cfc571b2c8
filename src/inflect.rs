//! String inflection for table-name matching.
//!
//! The foreign-key heuristic turns a `customer_id` column into the candidate
//! parent names `customer` and `customers`. Standard English inflection
//! covers most schemas; an irregular-word table handles the nouns the suffix
//! rules get wrong (`person`/`people`, `child`/`children`, ...). This is a
//! heuristic, not a guarantee; misses on exotic names are accepted.

use inflector::Inflector;

/// Irregular singular/plural pairs that show up in real schemas.
static IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("half", "halves"),
    ("self", "selves"),
    ("analysis", "analyses"),
    ("status", "statuses"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("matrix", "matrices"),
];

/// Pluralize a word, irregulars first, then the `Inflector` suffix rules.
///
/// Words already in the plural form of the irregular set come back unchanged.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    for (singular, plural) in IRREGULARS {
        if lower == *singular || lower == *plural {
            return (*plural).to_string();
        }
    }

    word.to_plural()
}

/// Singularize a word, irregulars first, then the `Inflector` suffix rules.
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    for (singular, plural) in IRREGULARS {
        if lower == *plural || lower == *singular {
            return (*singular).to_string();
        }
    }

    word.to_singular()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
    }

    #[test]
    fn test_regular_singulars() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
    }

    #[test]
    fn test_irregulars() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
    }

    #[test]
    fn test_already_inflected_irregulars() {
        assert_eq!(pluralize("people"), "people");
        assert_eq!(singularize("person"), "person");
    }

    #[test]
    fn test_empty() {
        assert_eq!(pluralize(""), "");
        assert_eq!(singularize(""), "");
    }
}
