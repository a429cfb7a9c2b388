use glam::Vec2;

use super::pointer::Rect;
use crate::constants::{
    CALIBRATION_CENTER_TOLERANCE, CALIBRATION_MAX_ATTEMPTS, CALIBRATION_MIN_DELTA_PX,
    PERCENT_CENTER,
};

/// Outcome of one calibration attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalibrationStep {
    /// Nothing (more) to correct.
    Done,
    /// Write this offset (px) and measure again next frame.
    Nudge(f32),
}

/// Bounded retry loop that centers an element whose layout box differs from
/// its visual box, by accumulating the measured vertical error into an offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Calibration {
    attempts: u32,
}

impl Calibration {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// One measurement. `position` is the element's percent placement in the
    /// stage; only a centered element is calibrated.
    pub fn step(
        &mut self,
        position: Vec2,
        stage: &Rect,
        element: &Rect,
        current_offset: f32,
    ) -> CalibrationStep {
        if self.attempts >= CALIBRATION_MAX_ATTEMPTS {
            return CalibrationStep::Done;
        }
        let off_center = (position - Vec2::splat(PERCENT_CENTER)).abs();
        if off_center.max_element() > CALIBRATION_CENTER_TOLERANCE {
            return CalibrationStep::Done;
        }
        if stage.height <= 0.0 || element.height <= 0.0 {
            return CalibrationStep::Done;
        }
        let delta =
            element.top - stage.top + element.height / 2.0 - stage.height / 2.0;
        if delta.abs() < CALIBRATION_MIN_DELTA_PX {
            return CalibrationStep::Done;
        }
        self.attempts += 1;
        CalibrationStep::Nudge(current_offset + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_center_elements_are_left_alone() {
        let mut c = Calibration::default();
        let stage = Rect::new(0.0, 0.0, 100.0, 100.0);
        let el = Rect::new(40.0, 10.0, 20.0, 20.0);
        assert_eq!(c.step(Vec2::new(60.0, 50.0), &stage, &el, 0.0), CalibrationStep::Done);
    }

    #[test]
    fn accumulates_delta_into_offset() {
        let mut c = Calibration::default();
        let stage = Rect::new(0.0, 0.0, 100.0, 100.0);
        // element visually 15px below center
        let el = Rect::new(40.0, 55.0, 20.0, 20.0);
        assert_eq!(c.step(Vec2::splat(50.0), &stage, &el, 4.0), CalibrationStep::Nudge(19.0));
        assert_eq!(c.attempts(), 1);
    }
}
