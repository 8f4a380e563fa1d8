//! Leptos Delegate Utilities
//!
//! Document-level event delegation for elements that come and go.
//! Handlers are bound once and dispatch on a marker class, so blocks
//! rendered later still respond without per-element listeners.

use std::str::FromStr;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// CSS selector for a single class name
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

/// Check a raw `class` attribute for a token, like `classList.contains`
pub fn has_class_token(class_attr: Option<&str>, class: &str) -> bool {
    class_attr
        .map(|attr| attr.split_whitespace().any(|token| token == class))
        .unwrap_or(false)
}

/// Parse a `data-*` attribute value
pub fn parse_data_value<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim).and_then(|v| v.parse().ok())
}

/// Read and parse `data-<name>` from an element
pub fn data_attribute<T: FromStr>(element: &web_sys::Element, name: &str) -> Option<T> {
    let raw = element.get_attribute(&format!("data-{}", name));
    parse_data_value(raw.as_deref())
}

/// Nearest ancestor (or self) carrying `class`
pub fn enclosing(element: &web_sys::Element, class: &str) -> Option<web_sys::Element> {
    element.closest(&class_selector(class)).ok().flatten()
}

/// Bind a document-level click handler for any element carrying `marker_class`.
///
/// Only the event target itself is tested, not its ancestors.
pub fn bind_delegated_click<F>(marker_class: &'static str, on_match: F)
where
    F: Fn(web_sys::Element) + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if has_class_token(target.get_attribute("class").as_deref(), marker_class) {
            on_match(target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

/// Bind a listener directly on one element for the page lifetime
pub fn bind_listener<F>(element: &web_sys::Element, event: &str, handler: F) -> Result<(), wasm_bindgen::JsValue>
where
    F: Fn(web_sys::Event) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| handler(ev));
    element.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_selector() {
        assert_eq!(class_selector("remove-dish"), ".remove-dish");
    }

    #[test]
    fn test_has_class_token() {
        assert!(has_class_token(Some("btn remove-dish"), "remove-dish"));
        assert!(has_class_token(Some("  remove-dish\t"), "remove-dish"));
        assert!(!has_class_token(Some("remove-dish-all"), "remove-dish"));
        assert!(!has_class_token(None, "remove-dish"));
    }

    #[test]
    fn test_parse_data_value() {
        assert_eq!(parse_data_value::<u32>(Some("7")), Some(7));
        assert_eq!(parse_data_value::<u32>(Some(" 3 ")), Some(3));
        assert_eq!(parse_data_value::<u32>(Some("x")), None);
        assert_eq!(parse_data_value::<u32>(None), None);
    }
}
