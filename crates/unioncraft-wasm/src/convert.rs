use std::fmt::Display;

use serde::{Deserialize, Serialize};
use unioncraft::{
    field::{Field, MetaKind},
    list::ListElement,
    serde::{FieldDef, MetaDef, TypeDef, into_fields},
};
use wasm_bindgen::JsValue;

/// Element type of a list as the templates pass it: a bare type name such as
/// `"UInt8"`, or a meta record such as `{ "meta": "enum" }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListElementDef {
    Type(TypeDef),
    Meta { meta: MetaDef },
}

pub fn error_to_js<E: Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(error_to_js)
}

pub fn parse_fields(fields_json: &str) -> Result<Vec<Field>, String> {
    let defs: Vec<FieldDef> = serde_json::from_str(fields_json).map_err(|e| e.to_string())?;
    into_fields(defs).map_err(|e| e.to_string())
}

pub fn parse_list_element(element_json: &str) -> Result<ListElement, String> {
    let def: ListElementDef = serde_json::from_str(element_json).map_err(|e| e.to_string())?;

    match def {
        ListElementDef::Meta { meta } => Ok(ListElement::Meta(MetaKind::from(meta))),
        ListElementDef::Type(ty) => ty
            .primitive()
            .map(ListElement::Primitive)
            .ok_or_else(|| "lists of groups are not supported".to_string()),
    }
}
