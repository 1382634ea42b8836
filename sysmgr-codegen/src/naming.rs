//! Name conversions between wire names and Rust identifiers.

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

// Keywords that cannot be written as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// `OutputS3BucketName` → `output_s3_bucket_name`, `ARN` → `arn`.
///
/// A word starts at an upper-case letter that follows a lower-case letter
/// or digit, or that ends a run of capitals (`HTTPServer` → `http_server`).
/// Digits stay attached to the preceding word.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch == ' ' || ch == '.' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Serde's `rename_all = "PascalCase"` applied to a snake-case member.
pub fn serde_pascal_case(member: &str) -> String {
    let mut out = String::with_capacity(member.len());
    let mut capitalize = true;
    for ch in member.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Field or method identifier for a snake-case name.
pub fn member_ident(member: &str) -> Ident {
    if KEYWORDS.contains(&member) {
        Ident::new_raw(member, Span::call_site())
    } else {
        Ident::new(member, Span::call_site())
    }
}

/// Snake-case member name that is a valid identifier once passed through
/// [`member_ident`].
pub fn member_name(wire: &str) -> String {
    let mut name = snake_case(wire);
    if RESERVED.contains(&name.as_str()) || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.push('_');
    }
    name
}

/// Enumeration variant for a wire value: `Intelligent-Tiering` →
/// `IntelligentTiering`, `NON_COMPLIANT` → `NonCompliant`.
///
/// Values starting with a digit get a `V` prefix. A value spelled
/// `Unknown` becomes `UnknownValue` so it cannot collide with the
/// catch-all variant.
pub fn variant_name(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let mut name = cleaned.to_case(Case::Pascal);
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'V');
    }
    if name == "Unknown" {
        name.push_str("Value");
    }
    name
}

/// Client type for a service id: `SSM` → `SsmClient`.
pub fn client_name(service_id: &str) -> String {
    format!("{}Client", service_id.to_case(Case::Pascal))
}

/// Module (and file stem) for a type or operation name.
pub fn module_name(name: &str) -> String {
    member_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_splits_words() {
        assert_eq!(snake_case("DocumentName"), "document_name");
        assert_eq!(snake_case("OutputS3BucketName"), "output_s3_bucket_name");
        assert_eq!(snake_case("ARN"), "arn");
        assert_eq!(snake_case("HTTPServer"), "http_server");
        assert_eq!(snake_case("Sha1"), "sha1");
        assert_eq!(snake_case("IamRole"), "iam_role");
    }

    #[test]
    fn keywords_become_raw() {
        assert_eq!(member_ident("type").to_string(), "r#type");
        assert_eq!(member_ident("name").to_string(), "name");
        assert_eq!(member_name("Self"), "self_");
    }

    #[test]
    fn serde_case_round_trip() {
        assert_eq!(serde_pascal_case("output_s3_bucket_name"), "OutputS3BucketName");
        assert_eq!(serde_pascal_case("arn"), "Arn");
    }
}
