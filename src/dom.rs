use glam::Vec2;
use kinetic_core::motion::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` once the document has parsed (immediately if it already has).
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let closure = Closure::once(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], registered as passive so scrolling is never blocked.
pub fn listen_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    listen(element, "click", move |_: web::Event| handler());
}

/// `<html>`, the root every document-wide query runs against.
#[inline]
pub fn document_root(document: &web::Document) -> Option<web::Element> {
    document.document_element()
}

/// All elements matching `selector` under `root`, cast to `HtmlElement`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch, if any.
pub fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.touches().item(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

#[inline]
pub fn set_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn remove_var(el: &web::HtmlElement, name: &str) {
    _ = el.style().remove_property(name);
}

/// Computed value of a custom property, e.g. inherited `--title-x`.
pub fn computed_var(el: &web::Element, name: &str) -> Option<String> {
    web::window()?
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|s| s.get_property_value(name).ok())
        .filter(|v| !v.trim().is_empty())
}

/// Insert a `<style>` once per document, keyed by element id.
pub fn ensure_styles(document: &web::Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    _ = head.append_child(&style);
}
