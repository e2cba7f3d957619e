//! Identifier casing helpers.
//!
//! Words are separated by any character that is not ASCII alphanumeric. Case
//! inside a word is preserved, so an already camel-cased name passes through
//! [`camel_case`] unchanged.

/// Splits a color name into words.
pub fn split_words(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Upper-cases the first character.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character.
pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower camel case: `"Hot Pink"` → `"hotPink"`, `"hotPink"` → `"hotPink"`.
pub fn camel_case(name: &str) -> String {
    split_words(name)
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                lower_first(word)
            } else {
                upper_first(word)
            }
        })
        .collect()
}

/// Snake case: `"hotPink"` → `"hot_pink"`, `"Hot Pink"` → `"hot_pink"`.
pub fn snake_case(name: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for word in split_words(name) {
        let mut current = String::new();
        let mut prev_lower = false;
        for c in word.chars() {
            if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            current.push(c.to_ascii_lowercase());
        }
        if !current.is_empty() {
            parts.push(current);
        }
    }
    parts.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_variants() {
        assert_eq!(camel_case("hotPink"), "hotPink");
        assert_eq!(camel_case("hot pink"), "hotPink");
        assert_eq!(camel_case("Hot Pink"), "hotPink");
        assert_eq!(camel_case("hot_pink"), "hotPink");
        assert_eq!(camel_case("hot-pink-2"), "hotPink2");
        assert_eq!(camel_case("  red  "), "red");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_camel_case_keeps_inner_case() {
        assert_eq!(camel_case("URL blue"), "uRLBlue");
    }

    #[test]
    fn test_first_letter_helpers() {
        assert_eq!(upper_first("abc"), "Abc");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("ABC"), "aBC");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("hotPink"), "hot_pink");
        assert_eq!(snake_case("Hot Pink"), "hot_pink");
        assert_eq!(snake_case("brand-blue2"), "brand_blue2");
        assert_eq!(snake_case("HTML"), "html");
    }
}
