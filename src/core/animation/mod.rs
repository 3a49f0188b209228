//! Frame-driven animations
//!
//! Each animation is a pure function of time that returns ready-to-apply
//! transforms. The browser side only owns the frame loop and writes the
//! resulting CSS.

pub mod castle;
pub mod helmet;
pub mod showcase;

use std::fmt::Write;

/// Seconds of animation time per rendered frame
pub const TIME_PER_FRAME: f64 = 0.02;

/// A 2D CSS transform. Identity parts are left out of the CSS string.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: Option<f64>,
}

impl Transform {
    pub fn rotate(deg: f64) -> Self {
        Self {
            rotate_deg: deg,
            ..Self::default()
        }
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Render as a CSS `transform` value, in px and degrees
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            let _ = write!(
                css,
                "translate({:.3}px, {:.3}px) ",
                self.translate_x, self.translate_y
            );
        }
        let _ = write!(css, "rotateZ({:.3}deg)", self.rotate_deg);
        if let Some(scale) = self.scale {
            let _ = write!(css, " scale({scale:.3})");
        }
        css
    }
}

/// Counts rendered frames and converts them to animation time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(frame: u64) -> Self {
        Self { frame }
    }

    /// Advance by one frame and return the new clock
    pub fn tick(&mut self) -> Self {
        self.frame += 1;
        *self
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time(&self) -> f64 {
        self.frame as f64 * TIME_PER_FRAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.time(), 0.0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame(), 2);
        assert!((clock.time() - 0.04).abs() < 1e-12);
        assert_eq!(FrameClock::at(50).time(), 1.0);
    }

    #[test]
    fn test_rotation_css() {
        assert_eq!(Transform::rotate(8.0).to_css(), "rotateZ(8.000deg)");
        assert_eq!(Transform::default().to_css(), "rotateZ(0.000deg)");
    }

    #[test]
    fn test_translate_and_scale_css() {
        let css = Transform::translate(0.0, -10.0).with_scale(1.02).to_css();
        assert_eq!(css, "translate(0.000px, -10.000px) rotateZ(0.000deg) scale(1.020)");
    }
}
