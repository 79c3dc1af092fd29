//! Translation between internal (camelCase) and wire (snake_case) names.
//!
//! The two functions are meant to be inverses for plain names such as
//! `ambientOcclusionStrength` / `ambient_occlusion_strength`, but they are
//! not inverses in general:
//!
//! - `to_wire_case(to_internal_case("_leading")) == "leading"`
//! - `to_wire_case(to_internal_case("vec_3d")) == "vec3d"`
//! - `to_wire_case(to_internal_case("a_b_c")) == "a_bc"`
//! - `to_wire_case("HTTPPort") == "httpport"`
//!
//! Existing wire consumers depend on this exact character-level behavior.
//! Case tests are ASCII-only.

const SEPARATOR: char = '_';

/// Converts an internal identifier to its wire form.
///
/// Lower-cases the first character, inserts `_` before every uppercase
/// character that follows a lowercase one, then lower-cases everything.
///
/// ```
/// use prop_json::case::to_wire_case;
///
/// assert_eq!(to_wire_case("ambientOcclusionStrength"), "ambient_occlusion_strength");
/// assert_eq!(to_wire_case("HTTPPort"), "httpport");
/// ```
pub fn to_wire_case(internal: &str) -> String {
    let mut out = String::with_capacity(internal.len() + 4);
    let mut prev: Option<char> = None;
    for ch in internal.chars() {
        if let Some(p) = prev {
            if ch.is_ascii_uppercase() && p.is_ascii_lowercase() {
                out.push(SEPARATOR);
            }
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }
    out
}

/// Converts a wire identifier to its internal form.
///
/// Every `_` is removed and the character right after it is upper-cased.
/// A separator consumes the following character, so `__` collapses to a
/// single `_` and a trailing `_` disappears.
///
/// ```
/// use prop_json::case::to_internal_case;
///
/// assert_eq!(to_internal_case("ambient_occlusion_strength"), "ambientOcclusionStrength");
/// assert_eq!(to_internal_case("a__b"), "a_b");
/// ```
pub fn to_internal_case(wire: &str) -> String {
    let mut out = String::with_capacity(wire.len());
    let mut chars = wire.chars();
    while let Some(ch) = chars.next() {
        if ch == SEPARATOR {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
        } else {
            out.push(ch);
        }
    }
    out
}
