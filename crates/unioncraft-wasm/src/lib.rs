//! WASM bindings for the `unioncraft` union layout resolver.
//!
//! Code generators written in JavaScript hand over a struct's field records
//! as JSON and get back the storage a generated accessor has to reset when
//! the struct's union changes variant:
//!
//! ```text
//! // const fieldsJson = JSON.stringify([
//! //   { offset: 0, type: "Bool", discriminantValue: 0 },
//! //   { offset: 1, type: "Bool", discriminantValue: 1 },
//! //   { offset: 0, meta: "struct", discriminantValue: 2 },
//! // ]);
//! //
//! // const layout = new WasmUnionLayout(fieldsJson);
//! // layout.bits();     // [{ position: 0, mask: 252 }]
//! // layout.bytes();    // []
//! // layout.pointers(); // [0]
//! ```
//!
//! The list helpers cover the numeric tables templates need when emitting
//! list accessors. Errors are returned as JS strings.

mod convert;

use unioncraft::{
    bits,
    list::{self, ElementSize},
    storage,
    union::{self, UnionLayout},
};
use wasm_bindgen::prelude::*;

/// Resolved union layout of one struct.
#[wasm_bindgen]
pub struct WasmUnionLayout {
    layout: UnionLayout,
}

#[wasm_bindgen]
impl WasmUnionLayout {
    /// Resolves the layout of a JSON array of field records (see
    /// [`unioncraft::serde::FieldDef`]).
    #[wasm_bindgen(constructor)]
    pub fn new(fields_json: &str) -> Result<WasmUnionLayout, JsValue> {
        let fields = convert::parse_fields(fields_json).map_err(convert::error_to_js)?;
        Ok(WasmUnionLayout {
            layout: UnionLayout::resolve(&fields),
        })
    }

    /// `[{ position, mask }]`, descending by position.
    pub fn bits(&self) -> Result<JsValue, JsValue> {
        convert::to_js(&self.layout.bits)
    }

    /// `[{ position, length }]`, ascending by position.
    pub fn bytes(&self) -> Result<JsValue, JsValue> {
        convert::to_js(&self.layout.bytes)
    }

    /// Pointer-section byte offsets, descending.
    pub fn pointers(&self) -> Result<JsValue, JsValue> {
        convert::to_js(&self.layout.pointers)
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }
}

#[wasm_bindgen(js_name = unionBits)]
pub fn union_bits(fields_json: &str) -> Result<JsValue, JsValue> {
    let fields = convert::parse_fields(fields_json).map_err(convert::error_to_js)?;
    convert::to_js(&union::union_bits(&fields))
}

#[wasm_bindgen(js_name = unionBytes)]
pub fn union_bytes(fields_json: &str) -> Result<JsValue, JsValue> {
    let fields = convert::parse_fields(fields_json).map_err(convert::error_to_js)?;
    convert::to_js(&union::union_bytes(&fields))
}

#[wasm_bindgen(js_name = unionPointers)]
pub fn union_pointers(fields_json: &str) -> Result<JsValue, JsValue> {
    let fields = convert::parse_fields(fields_json).map_err(convert::error_to_js)?;
    convert::to_js(&union::union_pointers(&fields))
}

/// Default list pointer bytes for lists of `element_json`, either a type
/// name (`"Int16"`) or a meta record (`{ "meta": "enum" }`).
#[wasm_bindgen(js_name = nullListPointer)]
pub fn null_list_pointer(element_json: &str) -> Result<Vec<u8>, JsValue> {
    let element = convert::parse_list_element(element_json).map_err(convert::error_to_js)?;
    list::null_list_pointer(element).map_err(convert::error_to_js)
}

/// Data bytes per element of a list with element-size `code`; `undefined`
/// for bit lists.
#[wasm_bindgen(js_name = dataBytes)]
pub fn data_bytes(code: u8, data_words: usize) -> Result<Option<usize>, JsValue> {
    let size = ElementSize::from_code(code).map_err(convert::error_to_js)?;
    Ok(size.data_bytes(data_words))
}

/// Pointer bytes per element of a list with element-size `code`;
/// `undefined` for bit lists.
#[wasm_bindgen(js_name = pointersBytes)]
pub fn pointers_bytes(code: u8, pointer_count: usize) -> Result<Option<usize>, JsValue> {
    let size = ElementSize::from_code(code).map_err(convert::error_to_js)?;
    Ok(size.pointers_bytes(pointer_count))
}

#[wasm_bindgen(js_name = structSize)]
pub fn struct_size(data_words: usize, pointer_words: usize) -> usize {
    storage::struct_size(data_words, pointer_words)
}

/// Byte holding boolean bit `offset`.
#[wasm_bindgen(js_name = boolOffset)]
pub fn bool_offset(offset: usize) -> usize {
    bits::byte_of(offset)
}

/// Shift of boolean bit `offset` within its byte.
#[wasm_bindgen(js_name = boolMask)]
pub fn bool_mask(offset: usize) -> u32 {
    bits::shift_of(offset)
}
