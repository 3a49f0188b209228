//! Cursor-reveal scene
//!
//! A glowing AI core floats above the scales of justice with three document
//! rings orbiting it. A second layer of the scene shows through a soft circular
//! mask that follows the pointer.

use super::{TIME_PER_FRAME, Transform};

/// Pointer position before the first move; far off screen, so nothing shows
pub const POINTER_REST: (f64, f64) = (99.0, 99.0);

/// Radius of the reveal circle in px
pub const REVEAL_RADIUS: f64 = 180.0;

/// Scene units to CSS pixels
pub const PX_PER_UNIT: f64 = 100.0;

pub const RING_COUNT: usize = 3;

/// Everything that moves in one frame of the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmetFrame {
    /// Vertical bob of the core, scene units
    pub core_lift: f64,
    /// Core spin, degrees
    pub core_spin: f64,
    /// Spin of each ring, degrees, innermost first
    pub ring_spin: [f64; RING_COUNT],
    /// Horizontal sway of the camera, scene units
    pub camera_x: f64,
}

/// Scene state at animation time `t`
pub fn frame(t: f64) -> HelmetFrame {
    let frames = t / TIME_PER_FRAME;
    let mut ring_spin = [0.0; RING_COUNT];
    for (i, spin) in ring_spin.iter_mut().enumerate() {
        *spin = (frames * (0.002 + i as f64 * 0.001)).to_degrees();
    }

    HelmetFrame {
        core_lift: (t * 2.0).sin() * 0.05,
        core_spin: (frames * 0.01).to_degrees(),
        ring_spin,
        camera_x: (t * 0.1).sin() * 0.5,
    }
}

impl HelmetFrame {
    pub fn core_transform(&self) -> Transform {
        Transform {
            translate_y: -self.core_lift * PX_PER_UNIT,
            rotate_deg: self.core_spin,
            ..Transform::default()
        }
    }

    /// Rings lie flat, seen from slightly above
    pub fn ring_css(&self, index: usize) -> String {
        let spin = self.ring_spin.get(index).copied().unwrap_or_default();
        format!("translate(-50%, -50%) rotateX(72deg) rotateZ({spin:.3}deg)")
    }

    /// The camera moves right, so the scene shifts left
    pub fn scene_transform(&self) -> Transform {
        Transform::translate(-self.camera_x * PX_PER_UNIT, 0.0)
    }
}

/// Diameter in px of ring `index`
pub fn ring_size(index: usize) -> f64 {
    (1.25 + index as f64 * 0.3) * 2.0 * PX_PER_UNIT
}

/// Map a pointer position inside a `width` x `height` viewport to [-1, 1]
/// on both axes, y pointing up
pub fn normalize_pointer(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return POINTER_REST;
    }
    ((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Centre of the reveal circle as viewport percentages
pub fn mask_center(nx: f64, ny: f64) -> (f64, f64) {
    ((nx + 1.0) * 50.0, (1.0 - ny) * 50.0)
}

/// CSS mask that shows the hidden layer around the pointer
pub fn reveal_mask(nx: f64, ny: f64, radius: f64) -> String {
    let (x, y) = mask_center(nx, ny);
    format!(
        "radial-gradient(circle {radius:.0}px at {x:.2}% {y:.2}%, #000 0%, #000 55%, transparent 100%)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_at_rest() {
        let f = frame(0.0);
        assert_eq!(f.core_lift, 0.0);
        assert_eq!(f.core_spin, 0.0);
        assert_eq!(f.ring_spin, [0.0; RING_COUNT]);
        assert_eq!(f.camera_x, 0.0);
    }

    #[test]
    fn test_outer_rings_spin_faster() {
        let f = frame(10.0);
        assert!(f.ring_spin[0] < f.ring_spin[1]);
        assert!(f.ring_spin[1] < f.ring_spin[2]);
    }

    #[test]
    fn test_core_bob_is_small() {
        for i in 0..500 {
            let f = frame(i as f64 * 0.05);
            assert!(f.core_lift.abs() <= 0.05);
            assert!(f.camera_x.abs() <= 0.5);
        }
    }

    #[test]
    fn test_normalize_pointer_corners() {
        assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(normalize_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn test_normalize_pointer_empty_viewport() {
        assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 600.0), POINTER_REST);
    }

    #[test]
    fn test_mask_follows_pointer() {
        let (nx, ny) = normalize_pointer(200.0, 150.0, 800.0, 600.0);
        assert_eq!(mask_center(nx, ny), (25.0, 25.0));
        assert!(reveal_mask(nx, ny, 180.0).contains("at 25.00% 25.00%"));
    }

    #[test]
    fn test_resting_pointer_reveals_nothing_on_screen() {
        let (x, y) = mask_center(POINTER_REST.0, POINTER_REST.1);
        assert!(x - REVEAL_RADIUS > 100.0 || y + REVEAL_RADIUS < 0.0);
        assert!(!(0.0..=100.0).contains(&x));
    }

    #[test]
    fn test_ring_sizes_grow() {
        assert!(ring_size(0) < ring_size(1));
        assert!(ring_size(1) < ring_size(2));
    }
}
