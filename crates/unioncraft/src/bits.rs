//! Bit-level footprint of boolean fields.
//!
//! Bit `n` of the data section lives in byte `n / 8` at shift `n % 8`
//! (least significant bit first, as Cap'n Proto lays out booleans).

use std::collections::BTreeMap;

use crate::{
    field::{Field, FieldKind, PrimitiveType},
    region::{MaskEntry, Range},
};

/// Every bit offset claimed by `field`: the field itself when it is a `Bool`,
/// or its members' bits, in member order, when it is a group.
pub fn collect_bits(field: &Field) -> Vec<usize> {
    let mut out = Vec::new();
    push_bits(field, &mut out);
    out
}

fn push_bits(field: &Field, out: &mut Vec<usize>) {
    match &field.kind {
        FieldKind::Primitive {
            ty: PrimitiveType::Bool,
            offset,
        } => out.push(*offset),
        FieldKind::Group { fields } => {
            for member in fields {
                push_bits(member, out);
            }
        }
        FieldKind::Primitive { .. } | FieldKind::Meta { .. } => {}
    }
}

/// Bit offsets split into whole bytes and partially claimed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitPartition {
    /// Bytes whose eight bits are all claimed, as one-byte ranges.
    pub bytes: Vec<Range>,
    /// Bytes with some bits claimed; the mask keeps the unclaimed bits.
    pub masks: Vec<MaskEntry>,
}

/// Groups `bits` by containing byte, in ascending byte order.
///
/// Duplicate offsets are expected (several union variants may reuse a bit)
/// and collapse.
pub fn partition(bits: &[usize]) -> BitPartition {
    let mut actives: BTreeMap<usize, u8> = BTreeMap::new();
    for &offset in bits {
        *actives.entry(byte_of(offset)).or_insert(0x00) |= 0x01u8 << shift_of(offset);
    }

    let mut partition = BitPartition::default();
    for (position, active) in actives {
        if active == 0xff {
            partition.bytes.push(Range::new(position, 1));
        } else {
            partition.masks.push(MaskEntry::new(position, !active));
        }
    }

    partition
}

/// Byte holding bit `offset`.
pub fn byte_of(offset: usize) -> usize {
    offset >> 3
}

/// Position of bit `offset` within its byte.
pub fn shift_of(offset: usize) -> u32 {
    (offset & 0x07) as u32
}
