use crate::constants::{STAGE_DECIMALS, STAGE_PROP_X, STAGE_PROP_Y, STAGE_SELECTOR};
use crate::dom;
use glam::Vec2;
use kinetic_core::motion::{format_ratio, normalize_pointer, CoordSpace};
use web_sys as web;

/// Hover tracker: every `.stage` exposes the pointer as `--mx`/`--my` percent.
pub fn wire_stage_trackers(root: &web::Element) -> usize {
    let stages = dom::query_all(root, STAGE_SELECTOR);
    for stage in &stages {
        wire_stage(stage);
    }
    stages.len()
}

fn write(stage: &web::HtmlElement, point: Vec2) {
    let pos = normalize_pointer(&dom::element_rect(stage), point, CoordSpace::Percent);
    dom::set_var(stage, STAGE_PROP_X, &format_ratio(pos.x, STAGE_DECIMALS));
    dom::set_var(stage, STAGE_PROP_Y, &format_ratio(pos.y, STAGE_DECIMALS));
}

fn reset(stage: &web::HtmlElement) {
    dom::remove_var(stage, STAGE_PROP_X);
    dom::remove_var(stage, STAGE_PROP_Y);
}

fn wire_stage(stage: &web::HtmlElement) {
    {
        let s = stage.clone();
        dom::listen_passive(stage, "mousemove", move |ev: web::MouseEvent| {
            write(&s, dom::client_point(&ev));
        });
    }
    {
        let s = stage.clone();
        dom::listen_passive(stage, "touchmove", move |ev: web::TouchEvent| {
            if let Some(p) = dom::touch_point(&ev) {
                write(&s, p);
            }
        });
    }
    for event in ["mouseleave", "touchend", "touchcancel"] {
        let s = stage.clone();
        dom::listen_passive(stage, event, move |_: web::Event| reset(&s));
    }
}
