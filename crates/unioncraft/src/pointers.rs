//! Pointer-section footprint of pointer-backed fields.

use crate::{
    field::{Field, FieldKind, MetaKind, PrimitiveType},
    storage::pointer_position,
};

/// Pointer-section byte offsets claimed by `field`.
///
/// Struct and list meta fields and `AnyPointer` fields contribute their slot.
/// Groups contribute their members' slots in member order.
pub fn collect_pointers(field: &Field) -> Vec<usize> {
    let mut out = Vec::new();
    push_pointers(field, &mut out);
    out
}

fn push_pointers(field: &Field, out: &mut Vec<usize>) {
    match &field.kind {
        FieldKind::Meta {
            meta: MetaKind::Struct | MetaKind::List,
            offset,
        }
        | FieldKind::Primitive {
            ty: PrimitiveType::AnyPointer,
            offset,
        } => out.push(pointer_position(*offset)),
        FieldKind::Group { fields } => {
            for member in fields {
                push_pointers(member, out);
            }
        }
        // Text and Data slots are left to their own accessors.
        FieldKind::Meta { .. } | FieldKind::Primitive { .. } => {}
    }
}
