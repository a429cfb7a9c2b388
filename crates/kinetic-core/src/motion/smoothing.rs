use glam::Vec2;

use crate::constants::{MAX_FRAME_DT_SEC, ORBIT_SETTLE_EPSILON, REFERENCE_FRAME_SEC};

/// Lagging follower for one animated element.
///
/// `speed` is the fraction of the remaining distance covered per reference
/// (60 Hz) frame; other frame rates are corrected so the lag looks the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub current: Vec2,
    pub target: Vec2,
    pub speed: f32,
}

impl MotionState {
    pub fn new(start: Vec2, speed: f32) -> Self {
        Self {
            current: start,
            target: start,
            speed: speed.clamp(0.0, 1.0),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance by `dt_sec`; returns the new position.
    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        let frames = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) / REFERENCE_FRAME_SEC;
        let alpha = 1.0 - (1.0 - self.speed).powf(frames);
        self.current = self.current.lerp(self.target, alpha);
        if self.is_settled() {
            self.current = self.target;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current.distance(self.target) < ORBIT_SETTLE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_moves_by_speed() {
        let mut m = MotionState::new(Vec2::ZERO, 0.25);
        m.set_target(Vec2::new(100.0, 0.0));
        let p = m.step(REFERENCE_FRAME_SEC);
        assert!((p.x - 25.0).abs() < 1e-3);
    }

    #[test]
    fn frame_rate_independent() {
        let mut fast = MotionState::new(Vec2::ZERO, 0.2);
        let mut slow = fast;
        fast.set_target(Vec2::new(50.0, 50.0));
        slow.set_target(Vec2::new(50.0, 50.0));
        for _ in 0..4 {
            fast.step(REFERENCE_FRAME_SEC / 2.0);
        }
        slow.step(REFERENCE_FRAME_SEC * 2.0);
        assert!(fast.current.distance(slow.current) < 1e-3);
    }

    #[test]
    fn converges_and_snaps() {
        let mut m = MotionState::new(Vec2::ZERO, 0.3);
        m.set_target(Vec2::new(80.0, 20.0));
        for _ in 0..200 {
            m.step(REFERENCE_FRAME_SEC);
        }
        assert!(m.is_settled());
        assert_eq!(m.current, m.target);
    }
}
