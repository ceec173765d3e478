//! List element encodings: element-size codes, per-element widths and the
//! default ("null") list pointers generated accessors fall back to.

use crate::{
    errors::ListError,
    field::{Field, FieldKind, MetaKind, PrimitiveType},
    storage::{POINTER_BYTES, WORD_BYTES},
};

/// Type of a list's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListElement {
    Primitive(PrimitiveType),
    Meta(MetaKind),
}

impl From<PrimitiveType> for ListElement {
    fn from(value: PrimitiveType) -> Self {
        ListElement::Primitive(value)
    }
}

impl From<MetaKind> for ListElement {
    fn from(value: MetaKind) -> Self {
        ListElement::Meta(value)
    }
}

/// The three-bit element-size tag of a list pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementSize {
    Void = 0x00,
    Bit = 0x01,
    Byte = 0x02,
    TwoBytes = 0x03,
    FourBytes = 0x04,
    EightBytes = 0x05,
    Pointer = 0x06,
    InlineComposite = 0x07,
}

impl ElementSize {
    /// Element size used for lists of `element`.
    ///
    /// Struct lists carry the `Void` code in their default pointer; the
    /// element layout lives in the composite tag instead.
    pub fn for_element(element: ListElement) -> Result<Self, ListError> {
        use PrimitiveType::*;

        match element {
            ListElement::Meta(MetaKind::Enum) => Ok(ElementSize::TwoBytes),
            ListElement::Meta(MetaKind::Struct) => Ok(ElementSize::Void),
            ListElement::Meta(MetaKind::List) => Ok(ElementSize::Pointer),
            ListElement::Meta(meta @ MetaKind::Capability) => Err(ListError::UnsupportedMeta(meta)),
            ListElement::Primitive(ty) => Ok(match ty {
                Void => ElementSize::Void,
                Bool => ElementSize::Bit,
                Int8 | UInt8 | Data | Text => ElementSize::Byte,
                Int16 | UInt16 => ElementSize::TwoBytes,
                Int32 | UInt32 | Float32 => ElementSize::FourBytes,
                Int64 | UInt64 | Float64 => ElementSize::EightBytes,
                AnyPointer => ElementSize::Pointer,
            }),
        }
    }

    pub fn from_code(code: u8) -> Result<Self, ListError> {
        match code {
            0x00 => Ok(ElementSize::Void),
            0x01 => Ok(ElementSize::Bit),
            0x02 => Ok(ElementSize::Byte),
            0x03 => Ok(ElementSize::TwoBytes),
            0x04 => Ok(ElementSize::FourBytes),
            0x05 => Ok(ElementSize::EightBytes),
            0x06 => Ok(ElementSize::Pointer),
            0x07 => Ok(ElementSize::InlineComposite),
            _ => Err(ListError::InvalidElementSize(code)),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Data bytes per element; `None` for bit lists, whose elements are
    /// smaller than a byte. `data_words` is only read for inline composites.
    pub fn data_bytes(self, data_words: usize) -> Option<usize> {
        match self {
            ElementSize::Void | ElementSize::Pointer => Some(0),
            ElementSize::Bit => None,
            ElementSize::Byte => Some(1),
            ElementSize::TwoBytes => Some(2),
            ElementSize::FourBytes => Some(4),
            ElementSize::EightBytes => Some(8),
            ElementSize::InlineComposite => Some(data_words * WORD_BYTES),
        }
    }

    /// Pointer bytes per element; `None` for bit lists. `pointer_count` is
    /// only read for inline composites.
    pub fn pointers_bytes(self, pointer_count: usize) -> Option<usize> {
        match self {
            ElementSize::Bit => None,
            ElementSize::Pointer => Some(POINTER_BYTES),
            ElementSize::InlineComposite => Some(pointer_count * POINTER_BYTES),
            _ => Some(0),
        }
    }
}

/// Default list pointer for lists of `element`: an empty list of the right
/// element size.
///
/// `Text` gets 16 bytes: a one-byte list followed by the word holding its NUL
/// terminator.
pub fn null_list_pointer(element: ListElement) -> Result<Vec<u8>, ListError> {
    let size = ElementSize::for_element(element)?;

    if element == ListElement::Primitive(PrimitiveType::Text) {
        let mut pointer = vec![0x00; 2 * POINTER_BYTES];
        pointer[0] = 0x01;
        pointer[4] = (1 << 3) | size.code();
        return Ok(pointer);
    }

    let mut pointer = vec![0x00; POINTER_BYTES];
    pointer[0] = 0x01;
    pointer[4] = size.code();
    Ok(pointer)
}

/// Top-level fields whose accessors work on raw byte buffers: pointer-backed
/// fields and floating point scalars.
pub fn bytes_fields(fields: &[Field]) -> Vec<&Field> {
    fields
        .iter()
        .filter(|field| match &field.kind {
            FieldKind::Meta { meta, .. } => matches!(meta, MetaKind::Struct | MetaKind::List),
            FieldKind::Primitive { ty, .. } => matches!(
                ty,
                PrimitiveType::AnyPointer
                    | PrimitiveType::Text
                    | PrimitiveType::Data
                    | PrimitiveType::Float32
                    | PrimitiveType::Float64
            ),
            FieldKind::Group { .. } => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_element() {
        let cases = [
            (ListElement::from(PrimitiveType::Void), ElementSize::Void),
            (PrimitiveType::Bool.into(), ElementSize::Bit),
            (PrimitiveType::UInt8.into(), ElementSize::Byte),
            (PrimitiveType::Data.into(), ElementSize::Byte),
            (PrimitiveType::Int16.into(), ElementSize::TwoBytes),
            (MetaKind::Enum.into(), ElementSize::TwoBytes),
            (PrimitiveType::Float32.into(), ElementSize::FourBytes),
            (PrimitiveType::UInt64.into(), ElementSize::EightBytes),
            (PrimitiveType::AnyPointer.into(), ElementSize::Pointer),
            (MetaKind::List.into(), ElementSize::Pointer),
            (MetaKind::Struct.into(), ElementSize::Void),
        ];

        for (element, expected) in cases {
            assert_eq!(ElementSize::for_element(element), Ok(expected), "{:?}", element);
        }
    }

    #[test]
    fn test_for_element_capability() {
        assert_eq!(
            ElementSize::for_element(MetaKind::Capability.into()),
            Err(ListError::UnsupportedMeta(MetaKind::Capability))
        );
    }

    #[test]
    fn test_from_code() {
        for code in 0..8 {
            assert_eq!(ElementSize::from_code(code).unwrap().code(), code);
        }
        assert_eq!(
            ElementSize::from_code(8),
            Err(ListError::InvalidElementSize(8))
        );
    }

    #[test]
    fn test_data_and_pointers_bytes() {
        assert_eq!(ElementSize::Void.data_bytes(3), Some(0));
        assert_eq!(ElementSize::Bit.data_bytes(3), None);
        assert_eq!(ElementSize::TwoBytes.data_bytes(3), Some(2));
        assert_eq!(ElementSize::EightBytes.data_bytes(3), Some(8));
        assert_eq!(ElementSize::Pointer.data_bytes(3), Some(0));
        assert_eq!(ElementSize::InlineComposite.data_bytes(3), Some(24));

        assert_eq!(ElementSize::Bit.pointers_bytes(2), None);
        assert_eq!(ElementSize::FourBytes.pointers_bytes(2), Some(0));
        assert_eq!(ElementSize::Pointer.pointers_bytes(2), Some(8));
        assert_eq!(ElementSize::InlineComposite.pointers_bytes(2), Some(16));
    }

    #[test]
    fn test_null_list_pointer() {
        assert_eq!(
            null_list_pointer(PrimitiveType::UInt32.into()).unwrap(),
            vec![0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            null_list_pointer(MetaKind::Enum.into()).unwrap(),
            vec![0x01, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            null_list_pointer(MetaKind::Struct.into()).unwrap(),
            vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_null_list_pointer_text() {
        let pointer = null_list_pointer(PrimitiveType::Text.into()).unwrap();
        assert_eq!(pointer.len(), 16);
        assert_eq!(pointer[0], 0x01);
        assert_eq!(pointer[4], 0x0a);
        assert!(pointer.iter().enumerate().all(|(i, b)| i == 0 || i == 4 || *b == 0));
    }

    #[test]
    fn test_null_list_pointer_capability() {
        assert!(null_list_pointer(MetaKind::Capability.into()).is_err());
    }

    #[test]
    fn test_bytes_fields() {
        let fields = vec![
            Field::meta(MetaKind::Struct, 0),
            Field::meta(MetaKind::Enum, 0),
            Field::primitive(PrimitiveType::Float64, 1),
            Field::primitive(PrimitiveType::UInt64, 2),
            Field::primitive(PrimitiveType::Text, 1),
            Field::group(vec![Field::primitive(PrimitiveType::Data, 2)]),
        ];

        assert_eq!(
            bytes_fields(&fields),
            vec![&fields[0], &fields[2], &fields[4]]
        );
    }
}
