//! Output holder types.
//!
//! A holder is emitted for every callable whose return shape is composite.
//! It has one field per OUT/IN_OUT argument in catalog order, preceded by
//! [`RETURN_FIELD`] when the function result is merged into it.

use crate::common::naming::{self, RETURN_FIELD};
use crate::signature::RoutineSignature;
use serde::Serialize;

/// One field of an output holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HolderField {
    /// Rust field name
    pub name: String,
    /// Remote argument name, empty for the function result
    pub remote: String,
    /// Field type
    pub ty: String,
}

/// A generated output holder declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeOutputType {
    /// Type name
    pub name: String,
    /// Routine whose outputs it collects
    pub routine: String,
    /// Fields in binding order
    pub fields: Vec<HolderField>,
}

impl CompositeOutputType {
    /// Returns `true` if both holders declare the same fields.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

/// Builds the holder for a signature, if its return shape is composite.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::composite::emit_holder;
/// use pkgmap_codegen::grouper::group_overloads;
/// use pkgmap_codegen::signature::{NamingScope, SignatureSynthesizer, Variant};
/// use pkgmap_codegen::type_map::TypeMapper;
/// use pkgmap_core::{ArgumentDescriptor, Direction};
///
/// let rows = vec![
///     ArgumentDescriptor::new("APP", "PKG", "GET_INFO")
///         .with_name("P_NAME").at_position(1).with_type("VARCHAR2").with_direction(Direction::Out),
///     ArgumentDescriptor::new("APP", "PKG", "GET_INFO")
///         .with_name("P_AGE").at_position(2).with_type("NUMBER").with_direction(Direction::Out),
/// ];
/// let groups = group_overloads(&rows).unwrap();
/// let mapper = TypeMapper::default();
/// let sig = SignatureSynthesizer::new(&mapper)
///     .synthesize(&groups[0], Variant::Async, NamingScope::default())
///     .unwrap();
///
/// let holder = emit_holder(&sig).unwrap();
/// assert_eq!(holder.name, "GetInfoOut");
/// assert_eq!(holder.fields.len(), 2);
/// ```
#[must_use]
pub fn emit_holder(signature: &RoutineSignature) -> Option<CompositeOutputType> {
    let name = signature.holder.clone()?;
    if !signature.requires_composite() {
        return None;
    }

    let mut fields = Vec::new();
    if let Some(slot) = signature.return_slot.and_then(|i| signature.arguments.get(i)) {
        fields.push(HolderField {
            name: RETURN_FIELD.to_string(),
            remote: String::new(),
            ty: slot.ty.nullable.clone(),
        });
    }
    fields.extend(
        signature
            .arguments
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != signature.return_slot && signature.is_holder_member(*i))
            .map(|(_, arg)| HolderField {
                name: naming::snake_case(arg.remote_name()),
                remote: arg.remote_name().to_string(),
                ty: arg.ty.nullable.clone(),
            }),
    );

    Some(CompositeOutputType {
        name,
        routine: signature.id.to_string(),
        fields,
    })
}
