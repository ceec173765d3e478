//! Byte-level footprint of fixed-width data fields.

use crate::{
    field::{Field, FieldKind, MetaKind},
    region::Range,
};

/// Width in bytes of an enum's ordinal.
pub const ENUM_BYTES: usize = 2;

/// Data-section byte ranges claimed by `field`.
///
/// Fixed-width scalars and enums contribute `width` bytes at
/// `width * offset`. Groups contribute their members' ranges in member
/// order. Booleans, `Void` and pointer-backed fields contribute nothing.
pub fn collect_bytes(field: &Field) -> Vec<Range> {
    let mut out = Vec::new();
    push_bytes(field, &mut out);
    out
}

fn push_bytes(field: &Field, out: &mut Vec<Range>) {
    match &field.kind {
        FieldKind::Meta {
            meta: MetaKind::Enum,
            offset,
        } => out.push(Range::new(ENUM_BYTES * offset, ENUM_BYTES)),
        FieldKind::Meta { .. } => {}
        FieldKind::Primitive { ty, offset } => {
            if let Some(width) = ty.data_width() {
                out.push(Range::new(width * offset, width));
            }
        }
        FieldKind::Group { fields } => {
            for member in fields {
                push_bytes(member, out);
            }
        }
    }
}
