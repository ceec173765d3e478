//! Definition of the struct fields a union layout is resolved from.

/// Discriminant value that marks a field as not belonging to any union.
///
/// Only meaningful at the JSON boundary; in the typed model the absence of a
/// discriminant is `None`.
pub const NO_DISCRIMINANT: u16 = 0xFFFF;

/// A single field of a struct schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Union tag of this field, or `None` when the field is not a union member.
    pub discriminant: Option<u16>,
    /// What the field stores and where.
    pub kind: FieldKind,
}

impl Field {
    /// A primitive field at `offset`, outside of any union.
    pub fn primitive(ty: PrimitiveType, offset: usize) -> Self {
        Field {
            discriminant: None,
            kind: FieldKind::Primitive { ty, offset },
        }
    }

    /// A meta field (enum, struct, list, capability) at `offset`, outside of any union.
    pub fn meta(meta: MetaKind, offset: usize) -> Self {
        Field {
            discriminant: None,
            kind: FieldKind::Meta { meta, offset },
        }
    }

    /// A group bundling `fields`, outside of any union.
    pub fn group(fields: Vec<Field>) -> Self {
        Field {
            discriminant: None,
            kind: FieldKind::Group { fields },
        }
    }

    /// Returns this field tagged as the union variant `discriminant`.
    pub fn in_union(self, discriminant: u16) -> Self {
        Field {
            discriminant: Some(discriminant),
            ..self
        }
    }

    /// Whether this field is one variant of its struct's union.
    pub fn is_union_member(&self) -> bool {
        self.discriminant.is_some()
    }
}

/// The three shapes a field can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A builtin type. `offset` is in units of the type's own width
    /// (bits for `Bool`, elements otherwise).
    Primitive { ty: PrimitiveType, offset: usize },
    /// A higher-level construct layered over a pointer or a fixed encoding.
    Meta { meta: MetaKind, offset: usize },
    /// Named bundle of fields sharing the group's discriminant.
    Group { fields: Vec<Field> },
}

/// Builtin field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Void,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Text,
    Data,
    AnyPointer,
}

impl PrimitiveType {
    /// Width in bytes of a type stored in the data section, `None` for
    /// `Void`, `Bool` and pointer-backed types.
    pub fn data_width(self) -> Option<usize> {
        use PrimitiveType::*;

        match self {
            Int8 | UInt8 => Some(1),
            Int16 | UInt16 => Some(2),
            Int32 | UInt32 | Float32 => Some(4),
            Int64 | UInt64 | Float64 => Some(8),
            Void | Bool | Text | Data | AnyPointer => None,
        }
    }
}

/// Kinds of meta fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    /// Stored as a 16-bit ordinal in the data section.
    Enum,
    Struct,
    List,
    Capability,
}
