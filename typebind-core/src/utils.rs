//! Shared utility functions for code generation.

/// Convert an identifier to snake_case.
///
/// The steps run in a fixed order:
///
/// 1. `$` (inner-type separator) becomes `__`
/// 2. an underscore splits an uppercase run from a following
///    capital+lowercase pair (`HTTPServer` -> `HTTP_Server`)
/// 3. an underscore splits a lowercase letter or digit from a following
///    uppercase letter (`fooBar` -> `foo_Bar`)
/// 4. `-` becomes `_`
/// 5. everything is lower-cased
///
/// The last step removes every casing signal, so the transform is idempotent.
///
/// ```
/// use typebind_core::to_snake_case;
///
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("Inner$Class"), "inner__class");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let word = s.replace('$', "__");
    let word = split_acronyms(&word);
    let word = split_camel(&word);
    word.replace('-', "_").to_lowercase()
}

// `([A-Z]+)([A-Z][a-z])` -> `$1_$2`
fn split_acronyms(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let boundary = i > 0
            && c.is_ascii_uppercase()
            && chars[i - 1].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
        if boundary {
            result.push('_');
        }
        result.push(c);
    }
    result
}

// `([a-z\d])([A-Z])` -> `$1_$2`
fn split_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        result.push(c);
        prev = Some(c);
    }
    result
}

/// File name without its last extension, `None` when there is no extension.
///
/// ```
/// use typebind_core::module_name;
///
/// assert_eq!(module_name("Widget.ts"), Some("Widget"));
/// assert_eq!(module_name("README"), None);
/// ```
pub fn module_name(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
}
