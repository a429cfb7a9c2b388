//! Deck glue: view-transition demo, keyboard deep cards, discrete panels and
//! slide-change hooks.

use crate::constants::{
    DEEP_CARD_ACTIVE_CLASS, DEEP_CARD_SELECTOR, DISCRETE_OPEN_CLASS, DISCRETE_TOGGLE_ATTR,
    SLIDE_TITLE_SELECTOR, VT_ACTIVE_CLASS, VT_BACK_BTN_ID, VT_BUTTON_SELECTOR, VT_CONTAINER_ID,
    VT_DETAIL_ID, VT_DETAIL_IMG_ID, VT_DETAIL_NAME_ID, VT_GRID_ID,
};
use crate::dom;
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Run `update` inside `document.startViewTransition` when the browser has it.
pub fn with_view_transition(document: &web::Document, update: impl FnOnce() + 'static) {
    let start = Reflect::get(document, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    let Some(start) = start else {
        update();
        return;
    };
    let cb = Closure::once_into_js(update);
    if let Err(e) = start.call1(document, &cb) {
        log::warn!("[vt] startViewTransition failed: {:?}", e);
    }
}

struct ViewTransitionDemo {
    grid: web::HtmlElement,
    detail: web::HtmlElement,
    detail_img: web::HtmlImageElement,
    detail_name: web::HtmlElement,
}

impl ViewTransitionDemo {
    fn open(&self, button: &web::Element) {
        let Some(img) = button
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            return;
        };
        let src = match img.current_src() {
            s if s.is_empty() => img.src(),
            s => s,
        };
        let alt = img.alt();
        self.detail_img.set_src(&src);
        self.detail_img.set_alt(&alt);
        self.detail_name.set_text_content(Some(&alt));
        self.grid.set_hidden(true);
        self.detail.set_hidden(false);
        _ = self.detail.class_list().add_1(VT_ACTIVE_CLASS);
    }

    fn close(&self) {
        self.detail.set_hidden(true);
        _ = self.detail.class_list().remove_1(VT_ACTIVE_CLASS);
        self.grid.set_hidden(false);
    }
}

/// Grid/detail toggle inside `#vt-container`.
pub fn wire_view_transitions(document: &web::Document) -> bool {
    let Some(container) = dom::by_id(document, VT_CONTAINER_ID) else {
        return false;
    };
    let find = |id: &str| dom::query_one(&container, &format!("#{id}"));
    let (Some(grid), Some(detail), Some(detail_img), Some(detail_name), Some(back)) = (
        find(VT_GRID_ID),
        find(VT_DETAIL_ID),
        find(VT_DETAIL_IMG_ID).and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok()),
        find(VT_DETAIL_NAME_ID),
        find(VT_BACK_BTN_ID),
    ) else {
        log::debug!("[vt] #{} is missing part of its markup", VT_CONTAINER_ID);
        return false;
    };
    let demo = Rc::new(ViewTransitionDemo {
        grid,
        detail,
        detail_img,
        detail_name,
    });

    for button in dom::query_all(&container, VT_BUTTON_SELECTOR) {
        let (demo, document, btn) = (demo.clone(), document.clone(), button.clone());
        dom::add_click_listener(&button, move || {
            let (demo, btn) = (demo.clone(), btn.clone());
            with_view_transition(&document, move || demo.open(&btn));
        });
    }
    {
        let document = document.clone();
        dom::add_click_listener(&back, move || {
            let demo = demo.clone();
            with_view_transition(&document, move || demo.close());
        });
    }
    true
}

/// Enter/Space flips `.deep-card`s; losing focus flips them back.
pub fn wire_deep_cards(root: &web::Element) -> usize {
    let cards = dom::query_all(root, DEEP_CARD_SELECTOR);
    for card in &cards {
        {
            let c = card.clone();
            dom::listen(card, "keydown", move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    _ = c.class_list().toggle(DEEP_CARD_ACTIVE_CLASS);
                }
            });
        }
        let c = card.clone();
        dom::listen(card, "blur", move |_: web::FocusEvent| {
            _ = c.class_list().remove_1(DEEP_CARD_ACTIVE_CLASS);
        });
    }
    cards.len()
}

/// `[data-discrete-toggle="panel-id"]` buttons toggle `open` on their panel.
pub fn wire_discrete_panels(document: &web::Document, root: &web::Element) -> usize {
    let toggles = dom::query_all(root, &format!("[{}]", DISCRETE_TOGGLE_ATTR));
    for toggle in &toggles {
        let (document, t) = (document.clone(), toggle.clone());
        dom::add_click_listener(toggle, move || {
            let Some(target_id) = t.get_attribute(DISCRETE_TOGGLE_ATTR) else {
                return;
            };
            if let Some(panel) = document.get_element_by_id(&target_id) {
                _ = panel.class_list().toggle(DISCRETE_OPEN_CLASS);
            }
        });
    }
    toggles.len()
}

/// Announce the new slide's title when a Reveal.js deck is present.
pub fn wire_slide_hooks(window: &web::Window) -> bool {
    let Ok(reveal) = Reflect::get(window, &JsValue::from_str("Reveal")) else {
        return false;
    };
    if reveal.is_undefined() || reveal.is_null() {
        return false;
    }
    let Some(on) = Reflect::get(&reveal, &JsValue::from_str("on"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("[deck] Reveal has no on()");
        return false;
    };
    let closure = Closure::wrap(Box::new(move |event: JsValue| {
        let slide = Reflect::get(&event, &JsValue::from_str("currentSlide"))
            .ok()
            .and_then(|s| s.dyn_into::<web::Element>().ok());
        let title = slide.and_then(|s| s.query_selector(SLIDE_TITLE_SELECTOR).ok().flatten());
        if let Some(title) = title {
            _ = title.set_attribute("aria-live", "polite");
        }
    }) as Box<dyn FnMut(JsValue)>);
    let registered = on.call2(&reveal, &JsValue::from_str("slidechanged"), closure.as_ref());
    closure.forget();
    if let Err(e) = registered {
        log::warn!("[deck] Reveal.on failed: {:?}", e);
        return false;
    }
    true
}
