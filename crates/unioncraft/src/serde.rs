//! JSON‑deserializable field records.
//!
//! These mirror the records a schema front end hands to the code generator:
//!
//! ```json
//! { "offset": 3, "type": "UInt16", "discriminantValue": 1 }
//! { "offset": 0, "meta": "struct" }
//! { "type": "group", "discriminantValue": 2, "fields": [ ... ] }
//! ```
//!
//! A missing `discriminantValue` reads as `65535` (not a union member). When a
//! record carries both `meta` and `type`, the meta wins.

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConvertError,
    field::{Field, FieldKind, MetaKind, NO_DISCRIMINANT, PrimitiveType},
    union::UnionLayout,
};

/// One field record.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Slot of the field, in units of its own width. Absent on groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Builtin type name, or `"group"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaDef>,
    #[serde(default = "no_discriminant")]
    pub discriminant_value: u16,
    /// Members of a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDef>>,
}

fn no_discriminant() -> u16 {
    NO_DISCRIMINANT
}

/// The `type` of a field record.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TypeDef {
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
    #[serde(rename = "group")]
    Group,
}

impl TypeDef {
    /// The builtin this names; `None` for `group`.
    pub fn primitive(self) -> Option<PrimitiveType> {
        Some(match self {
            TypeDef::Void => PrimitiveType::Void,
            TypeDef::Bool => PrimitiveType::Bool,
            TypeDef::Int8 => PrimitiveType::Int8,
            TypeDef::Int16 => PrimitiveType::Int16,
            TypeDef::Int32 => PrimitiveType::Int32,
            TypeDef::Int64 => PrimitiveType::Int64,
            TypeDef::UInt8 => PrimitiveType::UInt8,
            TypeDef::UInt16 => PrimitiveType::UInt16,
            TypeDef::UInt32 => PrimitiveType::UInt32,
            TypeDef::UInt64 => PrimitiveType::UInt64,
            TypeDef::Float32 => PrimitiveType::Float32,
            TypeDef::Float64 => PrimitiveType::Float64,
            TypeDef::Text => PrimitiveType::Text,
            TypeDef::Data => PrimitiveType::Data,
            TypeDef::AnyPointer => PrimitiveType::AnyPointer,
            TypeDef::Group => return None,
        })
    }
}

/// The `meta` of a field record.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetaDef {
    Enum,
    Struct,
    List,
    Capability,
}

impl From<MetaDef> for MetaKind {
    fn from(value: MetaDef) -> Self {
        match value {
            MetaDef::Enum => MetaKind::Enum,
            MetaDef::Struct => MetaKind::Struct,
            MetaDef::List => MetaKind::List,
            MetaDef::Capability => MetaKind::Capability,
        }
    }
}

impl TryFrom<FieldDef> for Field {
    type Error = ConvertError;

    fn try_from(value: FieldDef) -> Result<Self, Self::Error> {
        let discriminant =
            (value.discriminant_value != NO_DISCRIMINANT).then_some(value.discriminant_value);

        let kind = match (value.meta, value.ty) {
            (Some(meta), _) => FieldKind::Meta {
                meta: meta.into(),
                offset: value.offset.ok_or(ConvertError::MissingOffset)?,
            },
            (None, Some(ty)) => match ty.primitive() {
                Some(ty) => FieldKind::Primitive {
                    ty,
                    offset: value.offset.ok_or(ConvertError::MissingOffset)?,
                },
                None => FieldKind::Group {
                    fields: into_fields(value.fields.ok_or(ConvertError::MissingGroupFields)?)?,
                },
            },
            (None, None) => return Err(ConvertError::MissingKind),
        };

        Ok(Field { discriminant, kind })
    }
}

/// Converts a struct's field records, failing on the first malformed record.
pub fn into_fields(defs: Vec<FieldDef>) -> Result<Vec<Field>, ConvertError> {
    defs.into_iter().map(Field::try_from).collect()
}

/// A struct node: the field list a union layout is resolved from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub fields: Vec<FieldDef>,
}

impl TryFrom<StructDef> for UnionLayout {
    type Error = ConvertError;

    fn try_from(value: StructDef) -> Result<Self, Self::Error> {
        Ok(UnionLayout::resolve(&into_fields(value.fields)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(offset: Option<usize>, ty: Option<TypeDef>, meta: Option<MetaDef>) -> FieldDef {
        FieldDef {
            offset,
            ty,
            meta,
            discriminant_value: NO_DISCRIMINANT,
            fields: None,
        }
    }

    #[test]
    fn test_sentinel_is_not_a_union_member() {
        let field = Field::try_from(def(Some(1), Some(TypeDef::Bool), None)).unwrap();
        assert_eq!(field, Field::primitive(PrimitiveType::Bool, 1));

        let field = Field::try_from(FieldDef {
            discriminant_value: 0,
            ..def(Some(1), Some(TypeDef::Bool), None)
        })
        .unwrap();
        assert_eq!(field.discriminant, Some(0));
    }

    #[test]
    fn test_meta_wins_over_type() {
        let field = Field::try_from(def(Some(2), Some(TypeDef::UInt16), Some(MetaDef::Enum))).unwrap();
        assert_eq!(field, Field::meta(MetaKind::Enum, 2));
    }

    #[test]
    fn test_group_conversion() {
        let group = FieldDef {
            discriminant_value: 4,
            fields: Some(vec![
                def(Some(0), Some(TypeDef::Bool), None),
                def(Some(1), None, Some(MetaDef::List)),
            ]),
            ..def(None, Some(TypeDef::Group), None)
        };

        assert_eq!(
            Field::try_from(group).unwrap(),
            Field::group(vec![
                Field::primitive(PrimitiveType::Bool, 0),
                Field::meta(MetaKind::List, 1),
            ])
            .in_union(4)
        );
    }

    #[test]
    fn test_conversion_errors() {
        assert_eq!(
            Field::try_from(def(Some(0), None, None)),
            Err(ConvertError::MissingKind)
        );
        assert_eq!(
            Field::try_from(def(None, Some(TypeDef::Int8), None)),
            Err(ConvertError::MissingOffset)
        );
        assert_eq!(
            Field::try_from(def(None, None, Some(MetaDef::Struct))),
            Err(ConvertError::MissingOffset)
        );
        assert_eq!(
            Field::try_from(def(None, Some(TypeDef::Group), None)),
            Err(ConvertError::MissingGroupFields)
        );
    }

    #[test]
    fn test_nested_error_propagates() {
        let group = FieldDef {
            fields: Some(vec![def(None, Some(TypeDef::Bool), None)]),
            ..def(None, Some(TypeDef::Group), None)
        };

        assert_eq!(into_fields(vec![group]), Err(ConvertError::MissingOffset));
    }
}
