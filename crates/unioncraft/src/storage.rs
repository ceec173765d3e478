//! Word-level arithmetic over a struct's data and pointer sections.

/// Size of a data word in bytes.
pub const WORD_BYTES: usize = 8;

/// Size of a pointer slot in bytes.
pub const POINTER_BYTES: usize = 8;

/// Byte offset of pointer slot `index` from the pointer section origin.
pub fn pointer_position(index: usize) -> usize {
    POINTER_BYTES * index
}

/// Total byte size of a struct with `data_words` data words and
/// `pointer_words` pointer slots.
pub fn struct_size(data_words: usize, pointer_words: usize) -> usize {
    data_words * WORD_BYTES + pointer_words * POINTER_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_size() {
        assert_eq!(struct_size(0, 0), 0);
        assert_eq!(struct_size(1, 2), 24);
        assert_eq!(struct_size(3, 0), 24);
    }

    #[test]
    fn test_pointer_position() {
        assert_eq!(pointer_position(0), 0);
        assert_eq!(pointer_position(5), 40);
    }
}
