/// Static description of an entity type: its name and fields in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    pub name: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl EntitySchema {
    /// Looks up a field by its wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by its Rust member name.
    pub fn member(&self, member: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.member == member)
    }

    /// Fields the service requires to be present.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// One field of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Wire name (`OutputS3BucketName`), also used in debug rendering.
    pub name: &'static str,
    /// Rust member name (`output_s3_bucket_name`).
    pub member: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub constraints: Constraints,
}

/// The type of a field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Boolean,
    Timestamp,
    /// Ordered list of the element type.
    List(Box<FieldType>),
    /// Map from string keys to the value type.
    Map(Box<FieldType>),
    /// Closed set of string values, by enumeration name.
    Enum(&'static str),
    /// Nested entity, by entity name.
    Structure(&'static str),
}

impl FieldType {
    /// Returns true for lists and maps.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }
}

/// Descriptive validation metadata for a field.
///
/// Lengths count characters for strings and elements for lists and maps.
/// Nothing enforces these on mutation; see [`Entity::validate`](crate::Entity::validate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: Option<&'static str>,
    pub allowed: Option<&'static [&'static str]>,
}

impl Constraints {
    pub const NONE: Self = Self {
        min_len: None,
        max_len: None,
        min: None,
        max: None,
        pattern: None,
        allowed: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Constraints carried down to the elements of a list or the values of
    /// a map. Only the allowed-value set applies per element.
    pub fn for_elements(&self) -> Self {
        Self {
            allowed: self.allowed,
            ..Self::NONE
        }
    }
}
