use std::fmt;

use sysmgr_types::{HASH_SEED, combine, optional_hash};

use crate::error::{ValidationError, Violation};
use crate::field::FieldValue;
use crate::schema::EntitySchema;
use crate::validate;

/// A generated model object.
///
/// Implemented by `#[derive(Entity)]`. Every field is independently absent
/// or present; equality, [`HashCode`](crate::HashCode) and `Display` are
/// structural over the fields in declared order.
///
/// Entities are permissive: setters never validate. Field metadata is
/// available through [`Entity::schema`] and can be checked on demand with
/// [`Entity::validate`].
pub trait Entity: Clone + Default + Eq + fmt::Debug + fmt::Display + FieldValue {
    /// Field metadata, in declared order.
    fn schema() -> &'static EntitySchema;

    /// Current field values aligned with [`Entity::schema`]; `None` marks an
    /// absent field.
    fn field_values(&self) -> Vec<Option<&dyn FieldValue>>;

    /// Returns true when no field is present.
    fn is_empty(&self) -> bool {
        self.field_values().iter().all(Option::is_none)
    }

    /// Every constraint the current values break, nested entities included.
    fn violations(&self) -> Vec<Violation> {
        let mut report = Vec::new();
        validate::check_entity(self, "", &mut report);
        report
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: Self::schema().name,
                violations,
            })
        }
    }
}

/// `h = 1; h = 31 * h + code(field)` over the fields in declared order, an
/// absent field contributing `0`.
pub fn structural_hash<E: Entity>(entity: &E) -> i32 {
    entity
        .field_values()
        .into_iter()
        .fold(HASH_SEED, |acc, value| combine(acc, optional_hash(value)))
}

/// Writes `{Name: value,Other: value}`, skipping absent fields.
pub fn render_fields<E: Entity>(entity: &E, out: &mut dyn fmt::Write) -> fmt::Result {
    out.write_char('{')?;
    let mut first = true;
    for (field, value) in E::schema().fields.iter().zip(entity.field_values()) {
        let Some(value) = value else {
            continue;
        };
        if !first {
            out.write_char(',')?;
        }
        first = false;
        out.write_str(field.name)?;
        out.write_str(": ")?;
        value.render(out)?;
    }
    out.write_char('}')
}
