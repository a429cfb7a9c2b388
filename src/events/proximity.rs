use crate::constants::{
    PROXIMITY_CONTAINER_ID, PROXIMITY_DECIMALS, PROXIMITY_ITEM_SELECTOR, PROXIMITY_PROP,
};
use crate::dom;
use crate::frame::FrameTask;
use glam::Vec2;
use kinetic_core::motion::{format_ratio, proximity, proximity_radius};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct ProximityBridge {
    container: web::HtmlElement,
    logos: Rc<Vec<web::HtmlElement>>,
    last_pointer: Rc<Cell<Option<Vec2>>>,
    frame: FrameTask,
}

/// Finale logos grow as the pointer approaches; pointer moves are coalesced
/// into one measurement per frame.
pub fn wire_finale_proximity(document: &web::Document) -> bool {
    let Some(container) = dom::by_id(document, PROXIMITY_CONTAINER_ID) else {
        return false;
    };
    let logos = dom::query_all(&container, PROXIMITY_ITEM_SELECTOR);
    if logos.is_empty() {
        log::debug!("[proximity] no logos inside #{}", PROXIMITY_CONTAINER_ID);
        return false;
    }
    let bridge = ProximityBridge {
        container: container.clone(),
        logos: Rc::new(logos),
        last_pointer: Rc::new(Cell::new(None)),
        frame: FrameTask::default(),
    };

    for event in ["pointermove", "pointerdown"] {
        let b = bridge.clone();
        dom::listen_passive(&container, event, move |ev: web::PointerEvent| {
            b.last_pointer.set(Some(dom::client_point(&ev)));
            let inner = b.clone();
            b.frame.request(move || inner.update());
        });
    }
    {
        let b = bridge;
        dom::listen(&container, "pointerleave", move |_: web::PointerEvent| b.reset());
    }
    true
}

impl ProximityBridge {
    fn update(&self) {
        let Some(pointer) = self.last_pointer.get() else {
            return;
        };
        let radius = proximity_radius(&dom::element_rect(&self.container));
        for logo in self.logos.iter() {
            let p = proximity(pointer, &dom::element_rect(logo), radius);
            dom::set_var(logo, PROXIMITY_PROP, &format_ratio(p, PROXIMITY_DECIMALS));
        }
    }

    fn reset(&self) {
        self.last_pointer.set(None);
        self.frame.cancel();
        for logo in self.logos.iter() {
            dom::set_var(logo, PROXIMITY_PROP, "0");
        }
    }
}
