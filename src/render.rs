//! Render Helpers
//!
//! Translate dish records into the names, ids and labels the page submits.

use crate::config::{
    DISH_ID_PREFIX, ERROR_CLASS, FIELD_ID_PREFIX, NAME_PLACEHOLDER, PRICE_PLACEHOLDER,
};
use crate::models::{DishEntry, FieldKind};

/// One required input of a block
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub kind: FieldKind,
    pub name: String,
    pub id: String,
    pub label: String,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub initial_value: String,
}

/// Everything a block needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct DishBlockView {
    pub key: u32,
    pub index: usize,
    pub name_field: FieldView,
    pub price_field: FieldView,
    pub hidden_name: String,
    pub hidden_value: String,
}

/// `dish_name_3` style field name
pub fn field_name(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

/// Index encoded in a field name, if it carries `prefix`
pub fn field_index(name: &str, prefix: &str) -> Option<usize> {
    name.strip_prefix(prefix)?.parse().ok()
}

pub fn field_view(entry: &DishEntry, kind: FieldKind) -> FieldView {
    let name = field_name(kind.name_prefix(), entry.index);
    let (input_type, placeholder) = match kind {
        FieldKind::Name => ("text", NAME_PLACEHOLDER),
        FieldKind::Price => ("number", PRICE_PLACEHOLDER),
    };
    FieldView {
        kind,
        id: format!("{}{}", FIELD_ID_PREFIX, name),
        name,
        label: entry.label(kind).to_string(),
        input_type,
        placeholder,
        initial_value: entry.value(kind).to_string(),
    }
}

impl DishBlockView {
    pub fn from_entry(entry: &DishEntry) -> Self {
        Self {
            key: entry.key,
            index: entry.index,
            name_field: field_view(entry, FieldKind::Name),
            price_field: field_view(entry, FieldKind::Price),
            hidden_name: field_name(DISH_ID_PREFIX, entry.index),
            hidden_value: entry.dish_id.clone(),
        }
    }
}

/// Class attribute of an input given its error marker
pub fn field_class(errored: bool) -> &'static str {
    if errored {
        ERROR_CLASS
    } else {
        ""
    }
}
