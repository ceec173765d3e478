//! Union layout resolution: the storage a generated accessor must reset when
//! a struct's union switches to another variant.
//!
//! Every reducer takes the struct's complete field list and only looks at
//! union members (fields with a discriminant). Inputs are never modified and
//! the same input always yields the same output, order included.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    bits::{collect_bits, partition},
    bytes::collect_bytes,
    field::Field,
    pointers::collect_pointers,
    region::{MaskEntry, Range},
};

fn members(fields: &[Field]) -> impl Iterator<Item = &Field> {
    fields.iter().filter(|field| field.is_union_member())
}

/// Preserve-masks for bytes that union booleans only partially claim.
///
/// Entries are ordered by descending position. A byte that any union member
/// also stores fixed-width data in is cleared whole and gets no mask. When
/// several variants claim bits of the same byte, their masks intersect: a bit
/// is preserved only if no variant claims it.
pub fn union_bits(fields: &[Field]) -> Vec<MaskEntry> {
    let mut masks: Vec<MaskEntry> = members(fields)
        .flat_map(|field| partition(&collect_bits(field)).masks)
        .collect();

    masks.sort_by(|lhs, rhs| rhs.position.cmp(&lhs.position));

    let excludes: BTreeSet<usize> = members(fields)
        .flat_map(collect_bytes)
        .flat_map(|range| range.bytes())
        .collect();

    let mut out: Vec<MaskEntry> = Vec::with_capacity(masks.len());
    for entry in masks {
        if excludes.contains(&entry.position) {
            trace!(position = entry.position, "mask covered by union data bytes");
            continue;
        }

        match out.last_mut() {
            Some(last) if last.position == entry.position => last.mask &= entry.mask,
            _ => out.push(entry),
        }
    }

    debug!(masks = out.len(), "resolved union bit masks");
    out
}

/// Byte ranges to zero before writing any union variant.
///
/// Covers the fixed-width data of every union member plus each byte whose
/// eight bits are all claimed by a single member's booleans. The result is
/// sorted ascending; overlapping and touching ranges are merged, so no two
/// ranges share or abut a byte.
pub fn union_bytes(fields: &[Field]) -> Vec<Range> {
    let mut includes: Vec<Range> = members(fields)
        .flat_map(|field| {
            let mut ranges = partition(&collect_bits(field)).bytes;
            ranges.extend(collect_bytes(field));
            ranges
        })
        .collect();

    includes.sort_by_key(|range| range.position);

    let mut out: Vec<Range> = Vec::with_capacity(includes.len());
    for range in includes {
        match out.last_mut() {
            Some(current) if range.position <= current.end() => {
                trace!(
                    position = current.position,
                    end = range.end(),
                    "merging union byte ranges"
                );
                current.length = current.length.max(range.end() - current.position);
            }
            _ => out.push(range),
        }
    }

    debug!(ranges = out.len(), "resolved union byte ranges");
    out
}

/// Distinct pointer-section byte offsets claimed by union members, in
/// descending order.
pub fn union_pointers(fields: &[Field]) -> Vec<usize> {
    let mut out: Vec<usize> = members(fields).flat_map(collect_pointers).collect();

    out.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
    out.dedup();

    debug!(pointers = out.len(), "resolved union pointers");
    out
}

/// Everything a generated accessor needs to reset one struct's union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnionLayout {
    /// See [union_bits].
    pub bits: Vec<MaskEntry>,
    /// See [union_bytes].
    pub bytes: Vec<Range>,
    /// See [union_pointers].
    pub pointers: Vec<usize>,
}

impl UnionLayout {
    /// Resolves all three storage footprints of the union in `fields`.
    pub fn resolve(fields: &[Field]) -> Self {
        UnionLayout {
            bits: union_bits(fields),
            bytes: union_bytes(fields),
            pointers: union_pointers(fields),
        }
    }

    /// True when the struct has no union storage to reset.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty() && self.bytes.is_empty() && self.pointers.is_empty()
    }
}
