//! # unioncraft
//!
//! Union storage layout resolution for Cap'n Proto style schema code
//! generators.
//!
//! When a generated accessor switches a struct's union to another variant it
//! has to reset the storage the previous variant may have written. Given the
//! struct's field list, this crate computes that storage once, at code
//! generation time:
//!
//! - [union::union_bits]: preserve-masks for bytes union booleans only partly
//!   claim;
//! - [union::union_bytes]: merged data-section byte ranges to zero;
//! - [union::union_pointers]: pointer-section slots to release.
//!
//! ## Example
//!
//! ```
//! use unioncraft::field::{Field, MetaKind, PrimitiveType};
//! use unioncraft::region::{MaskEntry, Range};
//! use unioncraft::union::UnionLayout;
//!
//! let fields = vec![
//!     Field::primitive(PrimitiveType::UInt32, 0),
//!     Field::primitive(PrimitiveType::Bool, 32).in_union(0),
//!     Field::primitive(PrimitiveType::UInt16, 3).in_union(1),
//!     Field::meta(MetaKind::Struct, 0).in_union(2),
//! ];
//!
//! let layout = UnionLayout::resolve(&fields);
//! assert_eq!(layout.bits, vec![MaskEntry::new(4, 0xfe)]);
//! assert_eq!(layout.bytes, vec![Range::new(6, 2)]);
//! assert_eq!(layout.pointers, vec![0]);
//! ```
//!
//! With the `serde` feature, field records can be read from JSON through
//! [`serde::FieldDef`](crate::serde::FieldDef).

pub mod bits;
pub mod bytes;
pub mod errors;
pub mod field;
pub mod list;
pub mod pointers;
pub mod region;
#[cfg(feature = "serde")]
pub mod serde;
pub mod storage;
pub mod union;
