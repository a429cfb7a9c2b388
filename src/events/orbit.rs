use crate::constants::{
    ORBIT_DOT_SELECTOR, ORBIT_PROP_X, ORBIT_PROP_Y, ORBIT_SPEED_ATTR, ORBIT_STAGE_SELECTOR,
};
use crate::dom;
use crate::frame::FrameTask;
use kinetic_core::motion::{follower_speed, format_percent, normalize_pointer, CoordSpace, Trail};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct OrbitBridge {
    stage: web::HtmlElement,
    dots: Rc<Vec<web::HtmlElement>>,
    trail: Rc<RefCell<Trail>>,
    frame: FrameTask,
}

/// Trailing dots on every `.orbit-stage`: they lag behind the pointer, and
/// follow a figure-eight until the visitor first moves or presses. Returns
/// the number of stages wired.
pub fn wire_orbit_stages(root: &web::Element) -> usize {
    dom::query_all(root, ORBIT_STAGE_SELECTOR)
        .into_iter()
        .filter(|stage| wire_orbit(stage.clone()))
        .count()
}

fn wire_orbit(stage: web::HtmlElement) -> bool {
    let dots = dom::query_all(&stage, ORBIT_DOT_SELECTOR);
    if dots.is_empty() {
        log::debug!("[orbit] stage without dots");
        return false;
    }
    let speeds = dots.iter().enumerate().map(|(i, el)| {
        let explicit = el
            .get_attribute(ORBIT_SPEED_ATTR)
            .and_then(|s| s.trim().parse::<f32>().ok());
        follower_speed(i, explicit)
    });
    let trail = Trail::new(speeds);
    let bridge = OrbitBridge {
        stage: stage.clone(),
        dots: Rc::new(dots),
        trail: Rc::new(RefCell::new(trail)),
        frame: FrameTask::default(),
    };

    {
        let b = bridge.clone();
        dom::listen_passive(&stage, "pointermove", move |ev: web::PointerEvent| {
            let rect = dom::element_rect(&b.stage);
            let target = normalize_pointer(&rect, dom::client_point(&ev), CoordSpace::Percent);
            b.trail.borrow_mut().point_at(target);
            b.ensure_running();
        });
    }
    {
        let b = bridge.clone();
        dom::listen_passive(&stage, "pointerdown", move |_: web::PointerEvent| {
            b.trail.borrow_mut().hold();
        });
    }
    bridge.ensure_running();
    true
}

impl OrbitBridge {
    /// (Re)start the frame loop unless one is already scheduled. The loop
    /// ends by itself once the trail is at rest or the stage is detached.
    fn ensure_running(&self) {
        if self.frame.is_pending() {
            return;
        }
        let b = self.clone();
        self.frame.run_loop(move |dt_sec| {
            if !b.stage.is_connected() {
                return false;
            }
            let mut trail = b.trail.borrow_mut();
            trail.step(dt_sec, |i, pos| {
                if let Some(dot) = b.dots.get(i) {
                    dom::set_var(dot, ORBIT_PROP_X, &format_percent(pos.x));
                    dom::set_var(dot, ORBIT_PROP_Y, &format_percent(pos.y));
                }
            });
            !trail.is_at_rest()
        });
    }
}
