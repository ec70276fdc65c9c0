//! Accessor naming convention.
//!
//! Accessor *names* are the lookup keys stored in a bean's getter/setter
//! tables (`getCode`, `isSex`, `setSub_item`). Accessor *methods* are the
//! Rust identifiers the derive macro calls for them (`get_code`, `is_sex`,
//! `set_sub_item`). Both are derived from the field name alone plus
//! whether its declared type is exactly `bool`.

const GET: &str = "get";
const IS: &str = "is";
const SET: &str = "set";

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
#[must_use]
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when `name` matches `^is[A-Z0-9_]+.*$`.
///
/// A boolean field named like this already reads as its own getter.
#[must_use]
pub fn has_is_prefix(name: &str) -> bool {
    name.strip_prefix(IS)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Getter lookup name for a field.
///
/// `code` -> `getCode`, `sex: bool` -> `isSex`, `isActive: bool` -> `isActive`,
/// `is_active: bool` -> `is_active`. Only a field typed exactly `bool`
/// gets the `is` treatment; `Option<bool>` still reads through `get`.
#[must_use]
pub fn getter_name(field: &str, is_bool: bool) -> String {
    if is_bool {
        if has_is_prefix(field) {
            field.to_string()
        } else {
            format!("{IS}{}", capitalize(field))
        }
    } else {
        format!("{GET}{}", capitalize(field))
    }
}

/// Setter lookup name for a field: `set` + capitalized field name.
#[must_use]
pub fn setter_name(field: &str) -> String {
    format!("{SET}{}", capitalize(field))
}

/// Rust method identifier invoked for a field's getter.
#[must_use]
pub fn getter_method(field: &str, is_bool: bool) -> String {
    if is_bool {
        if has_is_prefix(field) {
            field.to_string()
        } else {
            format!("{IS}_{field}")
        }
    } else {
        format!("{GET}_{field}")
    }
}

/// Rust method identifier invoked for a field's setter.
#[must_use]
pub fn setter_method(field: &str) -> String {
    format!("{SET}_{field}")
}

/// Recover a field name from an accessor name.
///
/// Strips a leading `get`, `set` or `is` (plus one `_` separator) and
/// lower-cases the first remaining character. Returns `None` when nothing
/// is left or the name carries none of those prefixes.
#[must_use]
pub fn field_name_from_accessor(accessor: &str) -> Option<String> {
    let rest = [GET, SET, IS]
        .iter()
        .find_map(|prefix| accessor.strip_prefix(prefix))?;
    let rest = rest.strip_prefix('_').unwrap_or(rest);

    if rest.is_empty() {
        return None;
    }

    Some(decapitalize(rest))
}

///
/// TESTS
///
