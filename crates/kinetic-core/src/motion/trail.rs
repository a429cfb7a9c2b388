use glam::Vec2;

use super::idle::IdleMotion;
use super::smoothing::MotionState;
use crate::constants::{ORBIT_BASE_SPEED, ORBIT_SPEED_FALLOFF, PERCENT_CENTER};

/// Follow speed for the `index`-th trail dot: an explicit positive speed
/// wins, otherwise each later dot is a little slower.
pub fn follower_speed(index: usize, explicit: Option<f32>) -> f32 {
    explicit
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or_else(|| ORBIT_BASE_SPEED * ORBIT_SPEED_FALLOFF.powi(index as i32))
}

/// A group of lagging followers sharing one target, driven by idle autoplay
/// until the first pointer input.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    followers: Vec<MotionState>,
    idle: IdleMotion,
}

impl Trail {
    pub fn new(speeds: impl IntoIterator<Item = f32>) -> Self {
        let start = Vec2::splat(PERCENT_CENTER);
        Self {
            followers: speeds
                .into_iter()
                .map(|speed| MotionState::new(start, speed))
                .collect(),
            idle: IdleMotion::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.idle.is_enabled()
    }

    /// Pointer press: stops autoplay without moving the target.
    pub fn hold(&mut self) {
        self.idle.disable();
    }

    /// Pointer move: stops autoplay and retargets every follower.
    pub fn point_at(&mut self, target: Vec2) {
        self.idle.disable();
        self.aim(target);
    }

    fn aim(&mut self, target: Vec2) {
        for f in &mut self.followers {
            f.set_target(target);
        }
    }

    /// Advance one frame. `write` gets the index and new position of each
    /// follower that moved.
    pub fn step(&mut self, dt_sec: f32, mut write: impl FnMut(usize, Vec2)) {
        if let Some(target) = self.idle.step(dt_sec) {
            self.aim(target);
        }
        for (i, f) in self.followers.iter_mut().enumerate() {
            if f.is_settled() {
                continue;
            }
            write(i, f.step(dt_sec));
        }
    }

    /// Nothing left to animate until the next pointer input.
    pub fn is_at_rest(&self) -> bool {
        !self.idle.is_enabled() && self.followers.iter().all(MotionState::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds_fall_off_unless_explicit() {
        assert_eq!(follower_speed(0, None), ORBIT_BASE_SPEED);
        assert!(follower_speed(2, None) < follower_speed(1, None));
        assert_eq!(follower_speed(3, Some(0.5)), 0.5);
        assert_eq!(follower_speed(0, Some(-1.0)), ORBIT_BASE_SPEED);
        assert_eq!(follower_speed(0, Some(f32::NAN)), ORBIT_BASE_SPEED);
    }

    #[test]
    fn autoplay_is_never_at_rest() {
        let mut trail = Trail::new([0.2]);
        for _ in 0..600 {
            trail.step(1.0 / 60.0, |_, _| {});
            assert!(!trail.is_at_rest());
        }
    }
}
