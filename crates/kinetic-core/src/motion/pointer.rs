use glam::Vec2;

use crate::constants::{
    KEYBOARD_STEP_PERCENT, PERCENT_CENTER, PERCENT_MAX, PERCENT_MIN, PROXIMITY_RADIUS_FACTOR,
    PROXIMITY_RADIUS_MIN,
};

/// Client-space bounds, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Coordinate space a bridge writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordSpace {
    /// 0..100 from the top-left corner.
    Percent,
    /// -1..1 from the center.
    Centered,
}

impl CoordSpace {
    pub fn center(self) -> Vec2 {
        match self {
            CoordSpace::Percent => Vec2::splat(PERCENT_CENTER),
            CoordSpace::Centered => Vec2::ZERO,
        }
    }

    pub fn clamp(self, v: Vec2) -> Vec2 {
        match self {
            CoordSpace::Percent => v.clamp(Vec2::splat(PERCENT_MIN), Vec2::splat(PERCENT_MAX)),
            CoordSpace::Centered => v.clamp(Vec2::splat(-1.0), Vec2::ONE),
        }
    }
}

/// Map a client-space point into `space`, clamped. Degenerate rects map to the center.
#[inline]
pub fn normalize_pointer(rect: &Rect, point: Vec2, space: CoordSpace) -> Vec2 {
    if rect.is_empty() {
        return space.center();
    }
    let uv = Vec2::new(
        (point.x - rect.left) / rect.width,
        (point.y - rect.top) / rect.height,
    );
    if !uv.is_finite() {
        return space.center();
    }
    let mapped = match space {
        CoordSpace::Percent => uv * 100.0,
        CoordSpace::Centered => uv * 2.0 - Vec2::ONE,
    };
    space.clamp(mapped)
}

/// `12.346%`
#[inline]
pub fn format_percent(value: f32) -> String {
    format!("{:.3}%", value)
}

/// Unitless fixed-point value, e.g. `-0.250`.
#[inline]
pub fn format_ratio(value: f32, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Leading-number parse of a computed style value (`"42.5%"` -> 42.5).
pub fn parse_css_number(raw: &str) -> Option<f32> {
    let s = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// Position delta for an arrow key, in percent.
#[inline]
pub fn arrow_step(key: &str) -> Option<Vec2> {
    match key {
        "ArrowLeft" => Some(Vec2::new(-KEYBOARD_STEP_PERCENT, 0.0)),
        "ArrowRight" => Some(Vec2::new(KEYBOARD_STEP_PERCENT, 0.0)),
        "ArrowUp" => Some(Vec2::new(0.0, -KEYBOARD_STEP_PERCENT)),
        "ArrowDown" => Some(Vec2::new(0.0, KEYBOARD_STEP_PERCENT)),
        _ => None,
    }
}

/// Influence radius for proximity scaling inside `container`.
#[inline]
pub fn proximity_radius(container: &Rect) -> f32 {
    (container.width.min(container.height) * PROXIMITY_RADIUS_FACTOR).max(PROXIMITY_RADIUS_MIN)
}

/// Eased closeness in \[0, 1\]: 1 at the center of `target`, 0 at `radius` and beyond.
#[inline]
pub fn proximity(pointer: Vec2, target: &Rect, radius: f32) -> f32 {
    let dist = pointer.distance(target.center());
    let p = 1.0 - (dist / radius.max(PROXIMITY_RADIUS_MIN)).min(1.0);
    p * p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_number_prefix() {
        assert_eq!(parse_css_number(" 42.5% "), Some(42.5));
        assert_eq!(parse_css_number("-3px"), Some(-3.0));
        assert_eq!(parse_css_number(".5"), Some(0.5));
        assert_eq!(parse_css_number(""), None);
        assert_eq!(parse_css_number("auto"), None);
    }

    #[test]
    fn proximity_falls_off_quadratically() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(proximity(Vec2::new(5.0, 5.0), &target, 100.0), 1.0);
        let half = proximity(Vec2::new(55.0, 5.0), &target, 100.0);
        assert!((half - 0.25).abs() < 1e-5);
        assert_eq!(proximity(Vec2::new(500.0, 5.0), &target, 100.0), 0.0);
    }

    #[test]
    fn radius_has_floor() {
        assert_eq!(proximity_radius(&Rect::new(0.0, 0.0, 0.0, 0.0)), 1.0);
        assert!((proximity_radius(&Rect::new(0.0, 0.0, 400.0, 200.0)) - 120.0).abs() < 1e-4);
    }
}
