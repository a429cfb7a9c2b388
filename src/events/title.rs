use crate::constants::{
    STAGE_SELECTOR, TITLE_PROP_OFFSET, TITLE_PROP_X, TITLE_PROP_Y, TITLE_SELECTOR,
};
use crate::dom;
use crate::frame::FrameTask;
use glam::Vec2;
use kinetic_core::constants::PERCENT_CENTER;
use kinetic_core::motion::{
    arrow_step, format_percent, parse_css_number, Calibration, CalibrationStep, CoordSpace,
    DragState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct TitleBridge {
    stage: web::HtmlElement,
    title: web::HtmlElement,
    drag: Rc<RefCell<DragState>>,
    calibration_frame: FrameTask,
    resize_frame: FrameTask,
}

/// Draggable, keyboard-movable `.title` inside its `.stage`.
pub fn wire_draggable_title(root: &web::Element) -> bool {
    let Some(title) = dom::query_one(root, TITLE_SELECTOR) else {
        return false;
    };
    let Some(stage) = title
        .closest(STAGE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[title] .title has no enclosing stage");
        return false;
    };
    let bridge = TitleBridge {
        stage,
        title,
        drag: Rc::new(RefCell::new(DragState::default())),
        calibration_frame: FrameTask::default(),
        resize_frame: FrameTask::default(),
    };
    wire_pointer(&bridge);
    wire_keyboard(&bridge);
    wire_relayout(&bridge);
    bridge.schedule_calibration();
    true
}

impl TitleBridge {
    fn set_position(&self, pos: Vec2) {
        let pos = CoordSpace::Percent.clamp(pos);
        let (x, y) = (format_percent(pos.x), format_percent(pos.y));
        for el in [&self.stage, &self.title] {
            dom::set_var(el, TITLE_PROP_X, &x);
            dom::set_var(el, TITLE_PROP_Y, &y);
        }
    }

    fn read_stage_number(&self, name: &str) -> Option<f32> {
        dom::computed_var(&self.stage, name).and_then(|v| parse_css_number(&v))
    }

    fn position(&self) -> Vec2 {
        Vec2::new(
            self.read_stage_number(TITLE_PROP_X).unwrap_or(PERCENT_CENTER),
            self.read_stage_number(TITLE_PROP_Y).unwrap_or(PERCENT_CENTER),
        )
    }

    /// Start a fresh calibration pass next frame, replacing one in progress.
    fn schedule_calibration(&self) {
        let bridge = self.clone();
        self.calibration_frame
            .restart(move || bridge.calibrate(Calibration::default()));
    }

    fn calibrate(&self, mut calibration: Calibration) {
        let offset = self.read_stage_number(TITLE_PROP_OFFSET).unwrap_or(0.0);
        let step = calibration.step(
            self.position(),
            &dom::element_rect(&self.stage),
            &dom::element_rect(&self.title),
            offset,
        );
        match step {
            CalibrationStep::Done => {
                log::debug!("[title] calibration settled after {} attempts", calibration.attempts());
            }
            CalibrationStep::Nudge(next) => {
                dom::set_var(&self.stage, TITLE_PROP_OFFSET, &format!("{}px", next));
                let bridge = self.clone();
                self.calibration_frame
                    .request(move || bridge.calibrate(calibration));
            }
        }
    }
}

fn wire_pointer(b: &TitleBridge) {
    let title = b.title.clone();
    {
        let b = b.clone();
        dom::listen(&title, "pointerdown", move |ev: web::PointerEvent| {
            ev.prevent_default();
            let center = dom::element_rect(&b.title).center();
            b.drag
                .borrow_mut()
                .press(ev.pointer_id(), dom::client_point(&ev), Some(center));
            _ = b.title.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let b = b.clone();
        dom::listen(&title, "pointermove", move |ev: web::PointerEvent| {
            let stage_rect = dom::element_rect(&b.stage);
            let pos = b
                .drag
                .borrow()
                .drag_to(dom::client_point(&ev), &stage_rect, CoordSpace::Percent);
            if let Some(pos) = pos {
                ev.prevent_default();
                b.set_position(pos);
            }
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let b = b.clone();
        dom::listen(&title, event, move |ev: web::PointerEvent| {
            let Some(pointer_id) = b.drag.borrow_mut().release() else {
                return;
            };
            ev.prevent_default();
            _ = b.title.release_pointer_capture(pointer_id);
            b.schedule_calibration();
        });
    }
}

fn wire_keyboard(b: &TitleBridge) {
    let title = b.title.clone();
    let b = b.clone();
    dom::listen(&title, "keydown", move |ev: web::KeyboardEvent| {
        let Some(delta) = arrow_step(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        b.set_position(b.position() + delta);
        b.schedule_calibration();
    });
}

/// Recalibrate after window resizes (coalesced per frame) and once web fonts load.
fn wire_relayout(b: &TitleBridge) {
    if let Some(window) = web::window() {
        let b = b.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            let inner = b.clone();
            b.resize_frame.restart(move || inner.schedule_calibration());
        });
    }

    let ready = dom::window_document().and_then(|d| d.fonts().ready().ok());
    if let Some(ready) = ready {
        let b = b.clone();
        spawn_local(async move {
            if JsFuture::from(ready).await.is_ok() {
                b.schedule_calibration();
            }
        });
    }
}
