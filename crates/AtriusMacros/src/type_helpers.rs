//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Extracts `T` from a single-argument wrapper such as `Option<T>`, `Vec<T>` or `Box<T>`.
///
/// Only the last path segment is compared, so `std::option::Option<T>` matches
/// `"Option"` as well.
///
/// # Examples
///
/// ```rust,ignore
/// // For type: Option<Vec<HumanName>>, wrapper "Option"
/// // Returns: Some(Vec<HumanName>)
///
/// // For type: Reference, wrapper "Box"
/// // Returns: None
/// ```
fn get_wrapper_inner_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(TypePath { path, .. }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapper_inner_type(ty, "Option")
}

pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapper_inner_type(ty, "Vec")
}

/// Box types break cycles between mutually recursive model types
/// (`Reference.identifier`, the larger `ChoiceValue` members).
pub(crate) fn get_box_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapper_inner_type(ty, "Box")
}

/// Storage shape of a model field.
pub(crate) enum FieldShape<'a> {
    /// `Option<T>`, or `Option<Box<T>>` when `boxed`.
    Single { value: &'a Type, boxed: bool },
    /// `Vec<T>`.
    List { value: &'a Type },
}

/// Classifies a field type, or returns `None` for shapes the model derive does not support.
pub(crate) fn field_shape(ty: &Type) -> Option<FieldShape<'_>> {
    if let Some(inner) = get_option_inner_type(ty) {
        return Some(match get_box_inner_type(inner) {
            Some(value) => FieldShape::Single { value, boxed: true },
            None => FieldShape::Single {
                value: inner,
                boxed: false,
            },
        });
    }
    get_vec_inner_type(ty).map(|value| FieldShape::List { value })
}
