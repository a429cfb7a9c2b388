//! Pointer and animation math behind the CSS-variable bridges.
//!
//! Nothing here touches the DOM: the web crate measures rects and pointer
//! positions, feeds them in, and writes the returned values to style
//! properties.

pub mod calibrate;
pub mod drag;
pub mod idle;
pub mod pointer;
pub mod smoothing;
pub mod trail;

pub use calibrate::{Calibration, CalibrationStep};
pub use drag::DragState;
pub use idle::{lemniscate, IdleMotion};
pub use pointer::{
    arrow_step, format_percent, format_ratio, normalize_pointer, parse_css_number, proximity,
    proximity_radius, CoordSpace, Rect,
};
pub use smoothing::MotionState;
pub use trail::{follower_speed, Trail};
