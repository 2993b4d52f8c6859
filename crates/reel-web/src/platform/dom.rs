//! Small DOM helpers shared by the page features.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| missing("window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| missing("document"))
}

/// Error value for a required node or browser object that is absent.
pub fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("missing {what}"))
}

/// Element by id, cast to `T`. Absent and wrongly typed elements are `None`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn require_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    by_id(document, id).ok_or_else(|| missing(id))
}

/// Every element matching `selector` under `root`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(root.query_selector_all(selector)?)
}

pub fn query_all_in(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(document.query_selector_all(selector)?)
}

fn collect(list: web_sys::NodeList) -> Result<Vec<Element>, JsValue> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(element);
        }
    }
    Ok(out)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::debug!("dom: class {} update failed: {:?}", class, err);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("dom: style {} update failed: {:?}", property, err);
    }
}

/// Smoothly bring `element` to the top of the viewport.
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Create `<tag class=...>` with optional text.
pub fn element(
    document: &Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    if text.is_some() {
        element.set_text_content(text);
    }
    Ok(element)
}
