//! Opt-in validation of entity values against their field metadata.
//!
//! Entities never validate on mutation. Callers (or a strict
//! [`Dispatcher`](crate::Dispatcher)) ask for it explicitly through
//! [`Entity::violations`](crate::Entity::violations) or
//! [`Entity::validate`](crate::Entity::validate).
//!
//! Patterns are matched with `regex` search semantics: anchor them when the
//! whole value must match.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use regex::Regex;
use tracing::warn;

use crate::entity::Entity;
use crate::error::{Violation, ViolationKind};
use crate::schema::Constraints;

/// Checks every field of `entity`, recursing into nested entities.
///
/// `prefix` is the path of the entity itself, empty at the top level.
pub fn check_entity<E: Entity>(entity: &E, prefix: &str, report: &mut Vec<Violation>) {
    let schema = E::schema();
    for (field, value) in schema.fields.iter().zip(entity.field_values()) {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };
        match value {
            Some(value) => value.check(&field.constraints, &path, report),
            None if field.required => report.push(Violation {
                path,
                kind: ViolationKind::Missing,
            }),
            None => {}
        }
    }
}

pub fn check_length(actual: usize, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
    if let Some(min) = constraints.min_len.filter(|min| actual < *min) {
        report.push(violation(path, ViolationKind::TooShort { min, actual }));
    }
    if let Some(max) = constraints.max_len.filter(|max| actual > *max) {
        report.push(violation(path, ViolationKind::TooLong { max, actual }));
    }
}

pub fn check_range(actual: i64, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
    if let Some(min) = constraints.min.filter(|min| actual < *min) {
        report.push(violation(path, ViolationKind::BelowMinimum { min, actual }));
    }
    if let Some(max) = constraints.max.filter(|max| actual > *max) {
        report.push(violation(path, ViolationKind::AboveMaximum { max, actual }));
    }
}

pub fn check_pattern(value: &str, pattern: Option<&'static str>, path: &str, report: &mut Vec<Violation>) {
    let Some(pattern) = pattern else {
        return;
    };
    if let Some(false) = matches_pattern(pattern, value) {
        report.push(violation(path, ViolationKind::PatternMismatch { pattern }));
    }
}

pub fn check_allowed(
    value: &str,
    allowed: Option<&'static [&'static str]>,
    path: &str,
    report: &mut Vec<Violation>,
) {
    if allowed.is_some_and(|allowed| !allowed.contains(&value)) {
        report.push(violation(
            path,
            ViolationKind::NotAllowed {
                value: value.to_string(),
            },
        ));
    }
}

fn violation(path: &str, kind: ViolationKind) -> Violation {
    Violation {
        path: path.to_string(),
        kind,
    }
}

/// `None` when the pattern does not compile; such patterns are skipped.
fn matches_pattern(pattern: &'static str, value: &str) -> Option<bool> {
    static COMPILED: OnceLock<Mutex<HashMap<&'static str, Option<Regex>>>> = OnceLock::new();

    let mut cache = COMPILED
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let regex = cache.entry(pattern).or_insert_with(|| match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            warn!(pattern, error = %err, "skipping field pattern the regex engine cannot compile");
            None
        }
    });
    regex.as_ref().map(|regex| regex.is_match(value))
}
