//! Field value types and the collection helpers behind generated accessors.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use sysmgr_types::{HashCode, Render, Timestamp};

use crate::error::{DuplicateKeyError, Violation};
use crate::schema::{Constraints, FieldType};
use crate::validate;

/// Static type information for a field value type.
pub trait FieldKind {
    fn field_type() -> FieldType;

    /// Closed value set, for enumerations and collections of them.
    fn allowed_values() -> Option<&'static [&'static str]> {
        None
    }
}

/// A present field value, viewed generically.
///
/// Entities expose their values as `&dyn FieldValue` so hashing, rendering
/// and validation are written once instead of per field.
pub trait FieldValue: HashCode + Render + fmt::Debug {
    /// Checks this value against `constraints`, appending any violations
    /// under `path`.
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>);
}

impl FieldKind for String {
    fn field_type() -> FieldType {
        FieldType::String
    }
}

impl FieldValue for String {
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
        validate::check_length(self.chars().count(), constraints, path, report);
        validate::check_pattern(self, constraints.pattern, path, report);
        validate::check_allowed(self, constraints.allowed, path, report);
    }
}

impl FieldKind for i32 {
    fn field_type() -> FieldType {
        FieldType::Integer
    }
}

impl FieldValue for i32 {
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
        validate::check_range(i64::from(*self), constraints, path, report);
    }
}

impl FieldKind for i64 {
    fn field_type() -> FieldType {
        FieldType::Long
    }
}

impl FieldValue for i64 {
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
        validate::check_range(*self, constraints, path, report);
    }
}

impl FieldKind for bool {
    fn field_type() -> FieldType {
        FieldType::Boolean
    }
}

impl FieldValue for bool {
    fn check(&self, _: &Constraints, _: &str, _: &mut Vec<Violation>) {}
}

impl FieldKind for Timestamp {
    fn field_type() -> FieldType {
        FieldType::Timestamp
    }
}

impl FieldValue for Timestamp {
    fn check(&self, _: &Constraints, _: &str, _: &mut Vec<Violation>) {}
}

impl<E: FieldKind> FieldKind for Vec<E> {
    fn field_type() -> FieldType {
        FieldType::List(Box::new(E::field_type()))
    }

    fn allowed_values() -> Option<&'static [&'static str]> {
        E::allowed_values()
    }
}

impl<E: FieldValue> FieldValue for Vec<E> {
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
        validate::check_length(self.len(), constraints, path, report);
        let element = constraints.for_elements();
        for (i, item) in self.iter().enumerate() {
            item.check(&element, &format!("{path}[{i}]"), report);
        }
    }
}

impl<V: FieldKind> FieldKind for BTreeMap<String, V> {
    fn field_type() -> FieldType {
        FieldType::Map(Box::new(V::field_type()))
    }

    fn allowed_values() -> Option<&'static [&'static str]> {
        V::allowed_values()
    }
}

impl<V: FieldValue> FieldValue for BTreeMap<String, V> {
    fn check(&self, constraints: &Constraints, path: &str, report: &mut Vec<Violation>) {
        validate::check_length(self.len(), constraints, path, report);
        let element = constraints.for_elements();
        for (key, value) in self {
            value.check(&element, &format!("{path}[{key}]"), report);
        }
    }
}

/// Presence-first equality: both absent are equal, both present compare
/// their values, mixed presence is unequal.
pub fn eq_present<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Appends `values` in order, initialising an absent list sized to the
/// incoming count.
pub fn append<E, I>(slot: &mut Option<Vec<E>>, values: I)
where
    I: IntoIterator,
    I::Item: Into<E>,
{
    let values = values.into_iter();
    let list = slot.get_or_insert_with(|| Vec::with_capacity(values.size_hint().0));
    list.extend(values.map(Into::into));
}

/// Inserts `key` into an (initialised-if-absent) map, refusing to overwrite.
pub fn put_entry<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match slot.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => Err(DuplicateKeyError {
            field,
            key: existing.key().clone(),
        }),
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

/// Builds a map from key/value pairs; a later pair replaces an earlier one
/// with the same key.
pub fn collect_entries<V, I, K, W>(entries: I) -> BTreeMap<String, V>
where
    I: IntoIterator<Item = (K, W)>,
    K: Into<String>,
    W: Into<V>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
