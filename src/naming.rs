//! Casing helpers used to derive class names, package segments, table and
//! column names from an entity identifier.
//!
//! All functions are total: an empty input yields an empty output. Only ASCII
//! letters change case; everything else passes through untouched.

/// Uppercase the first character, leaving the rest unchanged.
///
/// ```rust
/// use crudgen::naming::capitalize;
/// assert_eq!(capitalize("subSistema"), "SubSistema");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest unchanged.
///
/// Used for Java variable names (`SubSistema` → `subSistema`).
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert `SubSistema` style identifiers to `sub_sistema`.
///
/// An underscore is inserted before every uppercase letter except a leading
/// one, then the whole string is lowercased.
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// `snake_case` with dashes instead of underscores (`sub-sistema`).
pub fn kebab_case(s: &str) -> String {
    snake_case(s).replace('_', "-")
}

/// All-lowercase form used for package segments and catalog keys.
pub fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Default column prefix: the first three characters, lowercased.
pub fn id_prefix(s: &str) -> String {
    s.chars().take(3).collect::<String>().to_ascii_lowercase()
}
