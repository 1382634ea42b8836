//! Resolution of a [`ServiceDescription`] into the generator's model.
//!
//! Every shape reference is looked up once here, so emission never has to
//! deal with dangling names. Structures that serve as the input or output of
//! exactly one operation, and are not referenced from anywhere else, are
//! owned by that operation and emitted alongside it, as is the enum of error
//! codes the operation documents.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::naming;
use crate::service::{Member, ServiceDescription, Shape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedService {
    pub service_id: String,
    pub service_full_name: String,
    pub target_prefix: String,
    pub api_version: String,
    pub documentation: Option<String>,
    pub operations: Vec<ResolvedOperation>,
    pub structures: Vec<ResolvedStructure>,
    pub enums: Vec<ResolvedEnum>,
}

impl ResolvedService {
    pub fn structure(&self, name: &str) -> Option<&ResolvedStructure> {
        self.structures.iter().find(|s| s.name == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&ResolvedEnum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn operation(&self, name: &str) -> Option<&ResolvedOperation> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// Structures emitted under `types/`.
    pub fn shared_structures(&self) -> impl Iterator<Item = &ResolvedStructure> {
        self.structures.iter().filter(|s| s.owner.is_none())
    }

    /// Structures emitted next to operation `op`, input first.
    pub fn owned_structures<'a>(
        &'a self,
        op: &'a ResolvedOperation,
    ) -> impl Iterator<Item = &'a ResolvedStructure> {
        [op.input.as_str(), op.output.as_str()]
            .into_iter()
            .enumerate()
            .filter(move |(i, name)| *i == 0 || *name != op.input)
            .filter_map(|(_, name)| self.structure(name))
            .filter(move |s| s.owner.as_deref() == Some(op.name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOperation {
    pub name: String,
    /// Client method name, e.g. `send_command`.
    pub method: String,
    pub input: String,
    pub output: String,
    /// Name of the generated error code enum, e.g. `SendCommandError`.
    pub error_type: String,
    pub errors: Vec<ResolvedError>,
    pub documentation: Option<String>,
}

/// One documented error code of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedError {
    /// Wire code, which is the exception shape's name.
    pub code: String,
    pub variant: String,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStructure {
    pub name: String,
    /// Operation whose module holds this structure; `None` for shared types.
    pub owner: Option<String>,
    pub members: Vec<ResolvedMember>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    /// Wire name, e.g. `DocumentName`.
    pub wire: String,
    /// Rust member name, e.g. `document_name`.
    pub name: String,
    /// Set when serde's PascalCase of `name` does not give back `wire`.
    pub rename: bool,
    pub rust_type: RustType,
    pub required: bool,
    pub constraints: MemberConstraints,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    String,
    Integer,
    Long,
    Boolean,
    Timestamp,
    List(Box<RustType>),
    Map(Box<RustType>),
    Enum(String),
    Structure(String),
}

impl RustType {
    /// Named types this one mentions, for import lists.
    pub fn named(&self) -> Option<&str> {
        match self {
            RustType::Enum(name) | RustType::Structure(name) => Some(name),
            RustType::List(inner) | RustType::Map(inner) => inner.named(),
            _ => None,
        }
    }

    pub fn uses_map(&self) -> bool {
        match self {
            RustType::Map(_) => true,
            RustType::List(inner) => inner.uses_map(),
            _ => false,
        }
    }

    pub fn uses_timestamp(&self) -> bool {
        match self {
            RustType::Timestamp => true,
            RustType::List(inner) | RustType::Map(inner) => inner.uses_timestamp(),
            _ => false,
        }
    }
}

/// Limits copied from the member's target shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberConstraints {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: Option<String>,
}

impl MemberConstraints {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnum {
    pub name: String,
    /// `(variant, wire value)` in declared order.
    pub variants: Vec<(String, String)>,
    pub documentation: Option<String>,
}

pub fn resolve(description: &ServiceDescription) -> Result<ResolvedService> {
    let resolver = Resolver {
        shapes: &description.shapes,
    };

    let mut operations = Vec::with_capacity(description.operations.len());
    let mut io_users: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (name, op) in &description.operations {
        for shape in [&op.input, &op.output] {
            match description.shapes.get(shape) {
                Some(Shape::Structure {
                    exception: false, ..
                }) => {}
                Some(other) => {
                    return Err(CodegenError::invalid(
                        shape,
                        format!(
                            "used as input or output of {name} but is a {}, not a structure",
                            other.kind()
                        ),
                    ));
                }
                None => {
                    return Err(CodegenError::UnknownShape {
                        shape: shape.clone(),
                        referenced_by: name.clone(),
                    });
                }
            }
            io_users.entry(shape).or_default().insert(name);
        }
        let error_type = format!("{name}Error");
        if description.shapes.contains_key(&error_type) {
            return Err(CodegenError::invalid(
                &error_type,
                format!("clashes with the error codes generated for {name}"),
            ));
        }
        operations.push(ResolvedOperation {
            name: name.clone(),
            method: naming::member_name(name),
            input: op.input.clone(),
            output: op.output.clone(),
            error_type,
            errors: resolver.errors(name, &op.errors)?,
            documentation: op.documentation.clone(),
        });
    }

    let referenced = resolver.referenced_from_shapes();
    let mut structures = Vec::new();
    let mut enums = Vec::new();
    for (name, shape) in &description.shapes {
        match shape {
            Shape::Structure {
                members,
                exception: false,
                documentation,
            } => {
                let owner = match io_users.get(name.as_str()) {
                    Some(users) if users.len() == 1 && !referenced.contains(name.as_str()) => {
                        users.iter().next().map(|op| op.to_string())
                    }
                    _ => None,
                };
                structures.push(ResolvedStructure {
                    name: name.clone(),
                    owner,
                    members: resolver.members(name, members)?,
                    documentation: documentation.clone(),
                });
            }
            Shape::String {
                values: Some(values),
                documentation,
                ..
            } => enums.push(resolve_enum(name, values, documentation)?),
            _ => {}
        }
    }

    reject_direct_recursion(&structures)?;

    debug!(
        operations = operations.len(),
        structures = structures.len(),
        enums = enums.len(),
        "resolved service description"
    );

    let metadata = &description.metadata;
    Ok(ResolvedService {
        service_id: metadata.service_id.clone(),
        service_full_name: metadata
            .service_full_name
            .clone()
            .unwrap_or_else(|| metadata.service_id.clone()),
        target_prefix: metadata.target_prefix.clone(),
        api_version: metadata.api_version.clone(),
        documentation: description.documentation.clone(),
        operations,
        structures,
        enums,
    })
}

struct Resolver<'a> {
    shapes: &'a BTreeMap<String, Shape>,
}

impl<'a> Resolver<'a> {
    fn shape(&self, name: &str, referenced_by: &str) -> Result<&'a Shape> {
        self.shapes
            .get(name)
            .ok_or_else(|| CodegenError::UnknownShape {
                shape: name.to_string(),
                referenced_by: referenced_by.to_string(),
            })
    }

    /// Shape names mentioned by a member, list element or map value.
    fn referenced_from_shapes(&self) -> BTreeSet<&'a str> {
        let mut out = BTreeSet::new();
        for shape in self.shapes.values() {
            match shape {
                Shape::Structure { members, .. } => {
                    out.extend(members.iter().map(|m| m.shape.as_str()));
                }
                Shape::List { member, .. } => {
                    out.insert(member.as_str());
                }
                Shape::Map { value, .. } => {
                    out.insert(value.as_str());
                }
                _ => {}
            }
        }
        out
    }

    /// Error codes of operation `op`, checked against the exception shapes.
    fn errors(&self, op: &str, errors: &[String]) -> Result<Vec<ResolvedError>> {
        let mut resolved: Vec<ResolvedError> = Vec::with_capacity(errors.len());
        for code in errors {
            let documentation = match self.shape(code, op)? {
                Shape::Structure {
                    exception: true,
                    documentation,
                    ..
                } => documentation.clone(),
                other => {
                    return Err(CodegenError::invalid(
                        code,
                        format!("listed as an error of {op} but is a {}", other.kind()),
                    ));
                }
            };
            let variant = naming::variant_name(code);
            if let Some(clash) = resolved.iter().find(|e| e.variant == variant) {
                return Err(CodegenError::invalid(
                    code,
                    format!("error of {op} maps to variant `{variant}` like `{}`", clash.code),
                ));
            }
            resolved.push(ResolvedError {
                code: code.clone(),
                variant,
                documentation,
            });
        }
        Ok(resolved)
    }

    fn members(&self, structure: &str, members: &[Member]) -> Result<Vec<ResolvedMember>> {
        let mut seen = BTreeSet::new();
        members
            .iter()
            .map(|member| {
                let name = naming::member_name(&member.name);
                if !seen.insert(name.clone()) {
                    return Err(CodegenError::invalid(
                        structure,
                        format!("more than one member maps to `{name}`"),
                    ));
                }
                let referenced_by = format!("{structure}.{}", member.name);
                let shape = self.shape(&member.shape, &referenced_by)?;
                let rust_type = self.rust_type(&member.shape, &referenced_by, &mut Vec::new())?;
                Ok(ResolvedMember {
                    rename: naming::serde_pascal_case(&name) != member.name,
                    wire: member.name.clone(),
                    name,
                    rust_type,
                    required: member.required,
                    constraints: constraints(shape),
                    documentation: member.documentation.clone(),
                })
            })
            .collect()
    }

    fn rust_type(
        &self,
        name: &str,
        referenced_by: &str,
        visiting: &mut Vec<String>,
    ) -> Result<RustType> {
        if visiting.iter().any(|v| v == name) {
            return Err(CodegenError::invalid(name, "collection contains itself"));
        }
        let shape = self.shape(name, referenced_by)?;
        visiting.push(name.to_string());
        let rust_type = match shape {
            Shape::Structure {
                exception: true, ..
            } => {
                return Err(CodegenError::invalid(
                    name,
                    format!("exception used as a value by `{referenced_by}`"),
                ));
            }
            Shape::Structure { .. } => RustType::Structure(name.to_string()),
            Shape::String {
                values: Some(_), ..
            } => RustType::Enum(name.to_string()),
            Shape::String { .. } => RustType::String,
            Shape::Integer { .. } => RustType::Integer,
            Shape::Long { .. } => RustType::Long,
            Shape::Boolean {} => RustType::Boolean,
            Shape::Timestamp {} => RustType::Timestamp,
            Shape::List { member, .. } => {
                RustType::List(Box::new(self.rust_type(member, name, visiting)?))
            }
            Shape::Map { key, value, .. } => {
                match self.shape(key, name)? {
                    Shape::String { values: None, .. } => {}
                    other => {
                        return Err(CodegenError::invalid(
                            name,
                            format!("map key `{key}` is a {}, not a plain string", other.kind()),
                        ));
                    }
                }
                RustType::Map(Box::new(self.rust_type(value, name, visiting)?))
            }
        };
        visiting.pop();
        Ok(rust_type)
    }
}

fn constraints(shape: &Shape) -> MemberConstraints {
    match shape {
        Shape::String {
            min,
            max,
            pattern,
            values: None,
            ..
        } => MemberConstraints {
            min_len: *min,
            max_len: *max,
            pattern: pattern.clone(),
            ..MemberConstraints::default()
        },
        Shape::Integer { min, max } | Shape::Long { min, max } => MemberConstraints {
            min: *min,
            max: *max,
            ..MemberConstraints::default()
        },
        Shape::List { min, max, .. } | Shape::Map { min, max, .. } => MemberConstraints {
            min_len: *min,
            max_len: *max,
            ..MemberConstraints::default()
        },
        _ => MemberConstraints::default(),
    }
}

fn resolve_enum(
    name: &str,
    values: &[String],
    documentation: &Option<String>,
) -> Result<ResolvedEnum> {
    if values.is_empty() {
        return Err(CodegenError::invalid(name, "enumeration has no values"));
    }
    let mut variants: Vec<(String, String)> = Vec::with_capacity(values.len());
    for value in values {
        let variant = naming::variant_name(value);
        if let Some((_, clash)) = variants.iter().find(|(v, _)| *v == variant) {
            return Err(CodegenError::invalid(
                name,
                format!("values `{clash}` and `{value}` both map to variant `{variant}`"),
            ));
        }
        variants.push((variant, value.clone()));
    }
    Ok(ResolvedEnum {
        name: name.to_string(),
        variants,
        documentation: documentation.clone(),
    })
}

/// A structure that holds itself without a list or map in between has no
/// finite representation.
fn reject_direct_recursion(structures: &[ResolvedStructure]) -> Result<()> {
    let edges: BTreeMap<&str, Vec<&str>> = structures
        .iter()
        .map(|s| {
            let direct = s
                .members
                .iter()
                .filter_map(|m| match &m.rust_type {
                    RustType::Structure(target) => Some(target.as_str()),
                    _ => None,
                })
                .collect();
            (s.name.as_str(), direct)
        })
        .collect();

    for start in edges.keys() {
        let mut stack = vec![*start];
        let mut seen = BTreeSet::new();
        while let Some(current) = stack.pop() {
            for next in edges.get(current).into_iter().flatten() {
                if next == start {
                    return Err(CodegenError::invalid(
                        *start,
                        "structure contains itself without a list or map in between",
                    ));
                }
                if seen.insert(*next) {
                    stack.push(*next);
                }
            }
        }
    }
    Ok(())
}
