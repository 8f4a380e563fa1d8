//! Dish Block Component
//!
//! One order line: name and price inputs, removal control, hidden id.

use leptos::prelude::*;

use crate::config::{DISH_BLOCK_CLASS, PRICE_STEP, REMOVE_MARKER_CLASS};
use crate::models::{DishEntry, FieldKind};
use crate::render::{field_class, DishBlockView, FieldView};
use crate::store::{store_is_errored, store_set_field, use_form_store};

/// Label followed by its required input
#[component]
fn RequiredField(dish_key: u32, field: FieldView) -> impl IntoView {
    let store = use_form_store();
    let kind = field.kind;
    let step = (kind == FieldKind::Price).then_some(PRICE_STEP);

    view! {
        <label for=field.id.clone()>{field.label.clone()}</label>
        <input
            type=field.input_type
            name=field.name.clone()
            id=field.id.clone()
            step=step
            placeholder=field.placeholder
            value=field.initial_value.clone()
            required=true
            class=move || field_class(store_is_errored(&store, dish_key, kind))
            on:input=move |ev| store_set_field(&store, dish_key, kind, event_target_value(&ev))
        />
    }
}

/// A dish block; names and labels are fixed when the block is created
#[component]
pub fn DishBlock(dish: DishEntry) -> impl IntoView {
    let block = DishBlockView::from_entry(&dish);
    let key = block.key;

    // Removal is handled by the document-level delegate on the marker class
    view! {
        <div class=DISH_BLOCK_CLASS data-key=key.to_string()>
            <RequiredField dish_key=key field=block.name_field />
            <RequiredField dish_key=key field=block.price_field />
            <button type="button" class=REMOVE_MARKER_CLASS data-index=block.index.to_string()>
                "×"
            </button>
            <input type="hidden" name=block.hidden_name value=block.hidden_value />
        </div>
    }
}
