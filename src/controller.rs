//! Order Form Controller
//!
//! Finds the page anchors, takes over the dish container and wires the
//! add, remove and submit handlers.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use leptos_delegate::{bind_delegated_click, bind_listener, data_attribute, enclosing};

use crate::app::DishList;
use crate::config::{
    ADD_DISH_ID, DISHES_CONTAINER_ID, DISH_BLOCK_CLASS, DISH_ID_PREFIX, DISH_NAME_PREFIX,
    DISH_PRICE_PREFIX, FORM_ID, LOG_TAG, REMOVE_MARKER_CLASS,
};
use crate::error::{FormError, FormResult};
use crate::models::{seed_dishes, DishEntry, FormMode, RenderedBlock, RenderedField, SubmittedLine};
use crate::store::{
    store_add_dish, store_dishes_untracked, store_mode, store_remove_dish, store_validate,
    FormState, FormStore,
};

/// Elements the controller cannot run without
pub struct PageAnchors {
    pub form: web_sys::Element,
    pub container: web_sys::HtmlElement,
    pub add_button: Option<web_sys::Element>,
}

fn log(msg: &str) {
    web_sys::console::log_1(&format!("{} {}", LOG_TAG, msg).into());
}

fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("{} {}", LOG_TAG, msg).into());
}

fn log_error(msg: &str) {
    web_sys::console::error_1(&format!("{} {}", LOG_TAG, msg).into());
}

/// Show a blocking notice
pub fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Locate the form and container; either missing disables the controller
pub fn find_anchors(doc: &web_sys::Document) -> FormResult<PageAnchors> {
    let form = doc
        .get_element_by_id(FORM_ID)
        .ok_or_else(|| FormError::MissingAnchor(format!("#{}", FORM_ID)))?;
    let container = doc
        .get_element_by_id(DISHES_CONTAINER_ID)
        .ok_or_else(|| FormError::MissingAnchor(format!("#{}", DISHES_CONTAINER_ID)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| FormError::Dom(format!("#{} is not an HTML element", DISHES_CONTAINER_ID)))?;
    let add_button = doc.get_element_by_id(ADD_DISH_ID);
    Ok(PageAnchors { form, container, add_button })
}

/// Page mode from the current path
pub fn detect_mode(win: &web_sys::Window) -> FormResult<FormMode> {
    let path = win.location().pathname()?;
    Ok(FormMode::from_path(&path))
}

/// First input whose name has `prefix`, with its preceding label text
fn read_field(block: &web_sys::Element, prefix: &str) -> FormResult<Option<RenderedField>> {
    let selector = format!("input[name^=\"{}\"]", prefix);
    let Some(element) = block.query_selector(&selector)? else {
        return Ok(None);
    };
    let name = element.get_attribute("name").unwrap_or_default();
    let value = element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default();
    let label = element
        .previous_element_sibling()
        .and_then(|sibling| sibling.text_content())
        .unwrap_or_default();
    Ok(Some(RenderedField { name, value, label }))
}

fn read_block(block: &web_sys::Element) -> FormResult<RenderedBlock> {
    Ok(RenderedBlock {
        name: read_field(block, DISH_NAME_PREFIX)?,
        price: read_field(block, DISH_PRICE_PREFIX)?,
        dish_id: read_field(block, DISH_ID_PREFIX)?.map(|field| field.value),
    })
}

/// Take over the server-rendered blocks: build their records and remove
/// exactly those blocks from the page. Blocks that cannot be read stay put.
pub fn take_rendered_dishes(container: &web_sys::Element) -> FormResult<Vec<DishEntry>> {
    let nodes = container.query_selector_all(&format!(".{}", DISH_BLOCK_CLASS))?;
    let mut elements = Vec::new();
    let mut blocks = Vec::new();
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            blocks.push(read_block(&element)?);
            elements.push(element);
        }
    }

    let seeded = seed_dishes(blocks);
    if seeded.len() < elements.len() {
        warn(&format!(
            "Left {} dish blocks without a name field in place",
            elements.len() - seeded.len()
        ));
    }

    let mut dishes = Vec::with_capacity(seeded.len());
    for (position, entry) in seeded {
        elements[position].remove();
        dishes.push(entry);
    }
    Ok(dishes)
}

fn on_add(store: FormStore) {
    let index = store_add_dish(&store);
    log(&format!("Added dish block {}", index));
}

fn on_remove_click(store: FormStore, control: web_sys::Element) {
    let Some(block) = enclosing(&control, DISH_BLOCK_CLASS) else {
        return;
    };
    let Some(key) = data_attribute::<u32>(&block, "key") else {
        warn("Removal control outside a managed dish block");
        return;
    };
    match store_remove_dish(&store, key) {
        Ok(()) => log(&format!("Removed dish block (key {})", key)),
        Err(FormError::BelowMinimum) => {
            log(&format!("Refused to remove the last dish in {} mode", store_mode(&store).as_str()));
            notify(&FormError::BelowMinimum.to_string());
        }
        Err(err) => log_error(&err.to_string()),
    }
}

fn on_submit(store: FormStore, ev: web_sys::Event) {
    match store_validate(&store) {
        Ok(()) => {
            let dishes = store_dishes_untracked(&store);
            let lines: Vec<SubmittedLine> = dishes.iter().map(SubmittedLine::from).collect();
            let snapshot = serde_json::to_string(&lines).unwrap_or_default();
            log(&format!("Submitting {} dishes: {}", lines.len(), snapshot));
        }
        Err(report) => {
            ev.prevent_default();
            log(&format!("Submission blocked with {} errors", report.messages.len()));
            notify(&report.joined());
        }
    }
}

/// Attach handlers and mount the dish list
fn attach(anchors: PageAnchors, mode: FormMode) -> FormResult<()> {
    let PageAnchors { form, container, add_button } = anchors;

    let dishes = take_rendered_dishes(&container)?;
    log(&format!("Starting in {} mode with {} dishes", mode.as_str(), dishes.len()));

    let store: FormStore = Store::new(FormState::new(mode, dishes));

    match &add_button {
        Some(button) => bind_listener(button, "click", move |_| on_add(store))?,
        None => warn(&format!("#{} not found; dishes cannot be added", ADD_DISH_ID)),
    }
    bind_delegated_click(REMOVE_MARKER_CLASS, move |control| on_remove_click(store, control));
    bind_listener(&form, "submit", move |ev| on_submit(store, ev))?;

    leptos::mount::mount_to(container, move || {
        provide_context(store);
        view! { <DishList /> }
    })
    .forget();
    Ok(())
}

/// Entry point; a missing anchor only disables the controller
pub fn start() {
    let Some(win) = web_sys::window() else {
        log_error("No window available");
        return;
    };
    let Some(doc) = win.document() else {
        log_error("No document available");
        return;
    };

    let result = find_anchors(&doc).and_then(|anchors| {
        let mode = detect_mode(&win)?;
        attach(anchors, mode)
    });
    if let Err(err) = result {
        log_error(&format!("Order form controller disabled: {}", err));
    }
}
