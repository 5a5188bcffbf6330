//! Class names derived from scale names.
//!
//! Class names are kept verbatim for safelists and conflict groups, which
//! match on the raw attribute token. Selectors escape the class name as a CSS
//! identifier so that names such as `1.5` or `w-1/2` stay a single class.

use std::fmt::Write as _;

/// Prefix shared by every generated class.
pub const CLASS_PREFIX: &str = "text-fluid-";

/// Class name for a scale, e.g. `text-fluid-h1`.
#[must_use]
pub fn class_name(scale: &str) -> String {
    format!("{CLASS_PREFIX}{scale}")
}

/// Class selector for a scale, e.g. `.text-fluid-h1`.
///
/// Characters outside the CSS identifier set are backslash-escaped, so
/// `w-1/2` becomes `.text-fluid-w-1\/2`.
#[must_use]
pub fn selector(scale: &str) -> String {
    let class = class_name(scale);
    let mut out = String::with_capacity(class.len() + 1);
    out.push('.');
    escape_ident(&class, &mut out);
    out
}

/// Serialize `ident` as a CSS identifier, following the CSSOM
/// `serialize an identifier` algorithm.
fn escape_ident(ident: &str, out: &mut String) {
    let first = ident.chars().next();
    let lone_dash = ident == "-";

    for (index, ch) in ident.chars().enumerate() {
        let leading_digit =
            ch.is_ascii_digit() && (index == 0 || (index == 1 && first == Some('-')));
        match ch {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => push_hex(ch, out),
            _ if leading_digit => push_hex(ch, out),
            '-' if lone_dash => out.push_str("\\-"),
            '-' | '_' | '0'..='9' | 'A'..='Z' | 'a'..='z' => out.push(ch),
            _ if !ch.is_ascii() => out.push(ch),
            _ => {
                out.push('\\');
                out.push(ch);
            }
        }
    }
}

fn push_hex(ch: char, out: &mut String) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\\{:x} ", u32::from(ch));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_and_selector() {
        assert_eq!(class_name("h1"), "text-fluid-h1");
        assert_eq!(selector("display-xl"), ".text-fluid-display-xl");
    }

    #[test]
    fn test_selector_escapes_non_identifier_characters() {
        assert_eq!(selector("1.5"), r".text-fluid-1\.5");
        assert_eq!(selector("big hero"), r".text-fluid-big\ hero");
        assert_eq!(selector("w-1/2"), r".text-fluid-w-1\/2");
        assert_eq!(selector("a:b"), r".text-fluid-a\:b");
    }

    #[test]
    fn test_class_name_stays_raw() {
        assert_eq!(class_name("w-1/2"), "text-fluid-w-1/2");
        assert_eq!(class_name("1.5"), "text-fluid-1.5");
    }

    #[test]
    fn test_selector_keeps_unicode_and_escapes_controls() {
        assert_eq!(selector("größe"), ".text-fluid-größe");
        assert_eq!(selector("a\tb"), r".text-fluid-a\9 b");
        assert_eq!(selector("a\0b"), ".text-fluid-a\u{FFFD}b");
    }

    #[test]
    fn test_escape_ident_leading_digit() {
        let mut out = String::new();
        escape_ident("1a", &mut out);
        assert_eq!(out, r"\31 a");

        out.clear();
        escape_ident("-2", &mut out);
        assert_eq!(out, r"-\32 ");

        out.clear();
        escape_ident("-", &mut out);
        assert_eq!(out, r"\-");
    }
}
