use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// How a field's value type shapes its accessors.
pub enum FieldShape<'a> {
    /// `String`: the getter lends `&str`.
    Str,
    /// Small `Copy` scalars returned by value.
    Copy,
    /// `Vec<E>`: the getter lends a slice, plus `append_*`.
    List(&'a Type),
    /// `BTreeMap<String, V>`: plus `put_*_entry` and `clear_*_entries`.
    Map(&'a Type),
    /// Enumerations and nested entities, lent by reference.
    Other,
}

const COPY_SCALARS: &[&str] = &["i32", "i64", "bool", "Timestamp"];

/// Returns `T` for `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident != "Option" {
        return None;
    }
    match type_args(segment).as_slice() {
        [inner] => Some(inner),
        _ => None,
    }
}

pub fn classify(ty: &Type) -> FieldShape<'_> {
    let Some(segment) = last_segment(ty) else {
        return FieldShape::Other;
    };
    let args = type_args(segment);
    if segment.ident == "String" {
        FieldShape::Str
    } else if COPY_SCALARS.iter().any(|name| segment.ident == name) {
        FieldShape::Copy
    } else if segment.ident == "Vec" && args.len() == 1 {
        FieldShape::List(args[0])
    } else if segment.ident == "BTreeMap" && args.len() == 2 {
        FieldShape::Map(args[1])
    } else {
        FieldShape::Other
    }
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last()
}

fn type_args(segment: &PathSegment) -> Vec<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Vec::new();
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}
