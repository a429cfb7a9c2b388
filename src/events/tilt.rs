use crate::constants::{
    TILT_CARD_SELECTOR, TILT_DECIMALS, TILT_DRAGGING_CLASS, TILT_PROP_X, TILT_PROP_Y,
};
use crate::dom;
use kinetic_core::motion::{format_ratio, CoordSpace, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PRIMARY_BUTTON: i16 = 0;

/// Press-and-drag tilt on every `.card-container`, written as a -1..1 ratio.
pub fn wire_tilt_cards(root: &web::Element) -> usize {
    let cards = dom::query_all(root, TILT_CARD_SELECTOR);
    for card in &cards {
        wire_card(card);
    }
    cards.len()
}

fn reset(card: &web::HtmlElement) {
    dom::remove_var(card, TILT_PROP_X);
    dom::remove_var(card, TILT_PROP_Y);
}

fn update(card: &web::HtmlElement, drag: &DragState, ev: &web::PointerEvent) {
    let rect = dom::element_rect(card);
    let Some(pos) = drag.drag_to(dom::client_point(ev), &rect, CoordSpace::Centered) else {
        return;
    };
    dom::set_var(card, TILT_PROP_X, &format_ratio(pos.x, TILT_DECIMALS));
    dom::set_var(card, TILT_PROP_Y, &format_ratio(pos.y, TILT_DECIMALS));
}

fn wire_card(card: &web::HtmlElement) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let (c, drag) = (card.clone(), drag.clone());
        dom::listen(card, "pointerdown", move |ev: web::PointerEvent| {
            if ev.button() != PRIMARY_BUTTON {
                return;
            }
            drag.borrow_mut().press(ev.pointer_id(), dom::client_point(&ev), None);
            _ = c.class_list().add_1(TILT_DRAGGING_CLASS);
            _ = c.set_pointer_capture(ev.pointer_id());
            update(&c, &drag.borrow(), &ev);
        });
    }
    {
        let (c, drag) = (card.clone(), drag.clone());
        dom::listen(card, "pointermove", move |ev: web::PointerEvent| {
            update(&c, &drag.borrow(), &ev);
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let (c, drag) = (card.clone(), drag.clone());
        dom::listen(card, event, move |_: web::PointerEvent| {
            let Some(pointer_id) = drag.borrow_mut().release() else {
                return;
            };
            _ = c.class_list().remove_1(TILT_DRAGGING_CLASS);
            reset(&c);
            // capture may already be gone
            _ = c.release_pointer_capture(pointer_id);
        });
    }
    {
        let (c, drag) = (card.clone(), drag.clone());
        dom::listen(card, "pointerleave", move |_: web::PointerEvent| {
            if !drag.borrow().is_dragging() {
                reset(&c);
            }
        });
    }
}
