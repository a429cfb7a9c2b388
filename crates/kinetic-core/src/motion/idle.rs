use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::{
    IDLE_AMPLITUDE_X, IDLE_AMPLITUDE_Y, IDLE_CYCLE_SEC, MAX_FRAME_DT_SEC, PERCENT_CENTER,
};

/// Figure-eight path: `(cos t, sin t cos t) / (sin^2 t + 1)`.
#[inline]
pub fn lemniscate(theta: f32) -> Vec2 {
    let (s, c) = theta.sin_cos();
    let d = s * s + 1.0;
    Vec2::new(c / d, s * c / d)
}

/// Autoplay pan shown until the visitor first moves the pointer.
///
/// Disabling is one-way for the lifetime of the value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleMotion {
    phase: f32,
    enabled: bool,
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self {
            phase: 0.0,
            enabled: true,
        }
    }
}

impl IdleMotion {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance the phase and return the autoplay target in percent space.
    pub fn step(&mut self, dt_sec: f32) -> Option<Vec2> {
        if !self.enabled {
            return None;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.phase = (self.phase + dt * TAU / IDLE_CYCLE_SEC).rem_euclid(TAU);
        let p = lemniscate(self.phase);
        Some(Vec2::new(
            PERCENT_CENTER + p.x * IDLE_AMPLITUDE_X,
            PERCENT_CENTER + p.y * IDLE_AMPLITUDE_Y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemniscate_passes_through_origin_and_tips() {
        let tip = lemniscate(0.0);
        assert!((tip - Vec2::new(1.0, 0.0)).length() < 1e-6);
        let mid = lemniscate(std::f32::consts::FRAC_PI_2);
        assert!(mid.length() < 1e-6);
    }

    #[test]
    fn full_cycle_takes_six_seconds() {
        let mut idle = IdleMotion::default();
        for _ in 0..600 {
            idle.step(0.01);
        }
        let phase = idle.phase();
        assert!(phase < 1e-2 || (TAU - phase) < 1e-2, "phase {phase}");
    }

    #[test]
    fn stays_inside_percent_space() {
        let mut idle = IdleMotion::default();
        for _ in 0..360 {
            let p = idle.step(1.0 / 60.0).unwrap();
            assert!((0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y));
        }
    }

    #[test]
    fn disable_is_permanent() {
        let mut idle = IdleMotion::default();
        assert!(idle.step(0.016).is_some());
        idle.disable();
        assert!(idle.step(0.016).is_none());
        assert!(!idle.is_enabled());
    }
}
