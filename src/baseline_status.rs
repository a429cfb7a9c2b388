//! `<baseline-status>` custom element.
//!
//! The element class itself is a thin JS shim that forwards lifecycle
//! callbacks to a [`BaselineStatusElement`] created per instance. All state
//! (abort controller, request gate) lives on that instance.

use crate::constants::{
    ATTR_FEATURE_ID, ATTR_FEATURE_ID_ALIAS, ATTR_MDN_PATH, ATTR_PROVIDER, BASELINE_STYLE_ID,
    BASELINE_TAG, OBSERVED_ATTRIBUTES,
};
use crate::dom;
use crate::fetch::WebFetcher;
use kinetic_core::view::{render_feature, render_loading};
use kinetic_core::{
    alias_mirror_value, load_feature, settle, FeatureQuery, FeatureRecord, Provider, RequestGate,
    BASELINE_STATUS_CSS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const UNKNOWN_FEATURE: &str = "Unknown feature";

#[wasm_bindgen(inline_js = r#"
export function define_element(tag, observed, factory) {
    if (customElements.get(tag)) {
        return false;
    }
    customElements.define(tag, class extends HTMLElement {
        static get observedAttributes() {
            return observed;
        }
        constructor() {
            super();
            this.__inner = factory(this);
        }
        connectedCallback() {
            this.__inner.connected();
        }
        disconnectedCallback() {
            this.__inner.disconnected();
        }
        attributeChangedCallback(name, oldValue, newValue) {
            this.__inner.attributeChanged(name, oldValue, newValue);
        }
    });
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(
        tag: &str,
        observed: js_sys::Array,
        factory: &js_sys::Function,
    ) -> Result<bool, JsValue>;
}

/// Register the element. A second registration is a no-op.
pub fn define() -> anyhow::Result<()> {
    let observed: js_sys::Array = OBSERVED_ATTRIBUTES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect();
    let factory = Closure::wrap(Box::new(|host: web::HtmlElement| {
        JsValue::from(BaselineStatusElement::new(host))
    }) as Box<dyn FnMut(web::HtmlElement) -> JsValue>);
    let defined = define_element(BASELINE_TAG, observed, factory.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("customElements.define failed: {:?}", e))?;
    factory.forget();
    if defined {
        log::info!("[baseline] <{}> defined", BASELINE_TAG);
    } else {
        log::warn!("[baseline] <{}> already defined; skipping", BASELINE_TAG);
    }
    Ok(())
}

#[derive(Default)]
struct ElementState {
    connected: bool,
    gate: RequestGate,
    controller: Option<web::AbortController>,
}

impl ElementState {
    fn abort_in_flight(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}

#[wasm_bindgen]
pub struct BaselineStatusElement {
    host: web::HtmlElement,
    state: Rc<RefCell<ElementState>>,
}

#[wasm_bindgen]
impl BaselineStatusElement {
    pub fn connected(&self) {
        self.state.borrow_mut().connected = true;
        if let Some(document) = self.host.owner_document() {
            dom::ensure_styles(&document, BASELINE_STYLE_ID, BASELINE_STATUS_CSS);
        }
        self.refresh();
    }

    pub fn disconnected(&self) {
        let mut st = self.state.borrow_mut();
        st.connected = false;
        st.gate.invalidate();
        st.abort_in_flight();
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self, name: String, old_value: Option<String>, new_value: Option<String>) {
        if old_value == new_value {
            return;
        }
        if name != ATTR_FEATURE_ID && name.eq_ignore_ascii_case(ATTR_FEATURE_ID_ALIAS) {
            // mirrored onto feature-id, whose own change callback refreshes
            let canonical = self.host.get_attribute(ATTR_FEATURE_ID);
            if let Some(value) = alias_mirror_value(canonical.as_deref(), new_value.as_deref()) {
                _ = self.host.set_attribute(ATTR_FEATURE_ID, value);
            }
            return;
        }
        if self.state.borrow().connected {
            self.refresh();
        }
    }
}

impl BaselineStatusElement {
    fn new(host: web::HtmlElement) -> Self {
        Self {
            host,
            state: Rc::new(RefCell::new(ElementState::default())),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.host
            .get_attribute(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn query(&self) -> FeatureQuery {
        let feature_id = self
            .attr(ATTR_FEATURE_ID)
            .or_else(|| self.attr(ATTR_FEATURE_ID_ALIAS))
            .unwrap_or_default();
        let provider = Provider::from_attr(self.attr(ATTR_PROVIDER).as_deref());
        let query = FeatureQuery::new(feature_id).with_provider(provider);
        match self.attr(ATTR_MDN_PATH) {
            Some(path) => query.with_mdn_path(path),
            None => query,
        }
    }

    /// Render the loading state and start a fresh load, superseding any
    /// request still in flight.
    fn refresh(&self) {
        let query = self.query();
        let (ticket, signal) = {
            let mut st = self.state.borrow_mut();
            st.abort_in_flight();
            let ticket = st.gate.begin();
            if query.feature_id.is_empty() {
                drop(st);
                self.host
                    .set_inner_html(&render_feature(&FeatureRecord::no_data(UNKNOWN_FEATURE), ""));
                return;
            }
            st.controller = web::AbortController::new().ok();
            (ticket, st.controller.as_ref().map(|c| c.signal()))
        };

        self.host.set_inner_html(&render_loading(&query.feature_id));
        log::debug!("[baseline] loading {} via {:?}", query.feature_id, query.provider);

        let host = self.host.clone();
        let state = self.state.clone();
        spawn_local(async move {
            let fetcher = WebFetcher::new(signal);
            let outcome = load_feature(&fetcher, &query).await;
            let html = {
                let mut st = state.borrow_mut();
                if st.gate.is_current(ticket) {
                    st.controller = None;
                }
                settle(&st.gate, ticket, outcome, &query.feature_id)
            };
            if let Some(html) = html {
                host.set_inner_html(&html);
            }
        });
    }
}
