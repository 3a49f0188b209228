//! Walking castle illustration
//!
//! The castle is a rig of SVG sprites. Each moving part swings on a sine of
//! the animation time, clouds drift left to right and wrap, and the whole
//! castle can be tilted by dragging once mouse control is switched on.

use super::Transform;

/// Where the sprite sheets are hosted
pub const ASSET_BASE: &str = "https://assets.codepen.io/721952/";

/// Tilt of the castle before any drag
pub const INITIAL_ANGLE: f64 = 9.0;
pub const MIN_ANGLE: f64 = -20.0;
pub const MAX_ANGLE: f64 = 30.0;
/// Degrees of tilt per pixel of horizontal drag
pub const DRAG_SENSITIVITY: f64 = 0.1;

/// Clouds past this left offset (percent) jump back to [`CLOUD_RESET`]
pub const CLOUD_WRAP: f64 = 150.0;
pub const CLOUD_RESET: f64 = -80.0;

/// Moving parts of the rig
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlePart {
    BackRightLeg,
    FrontRightLeg,
    BackLeftLeg,
    FrontLeftLeg,
    /// Feet in back-right, front-right, back-left, front-left order
    Foot(u8),
    /// Lower leg groups, back-left then front-left
    LowerLeg(u8),
    Wing,
    Antenna,
    /// Chimneys in paint order: chimney3, chimney2, chimney1
    Chimney(u8),
    Houses,
    Mound,
    /// Spires in paint order: point6 down to point1
    Spire(u8),
    Knob,
    Tele,
    Wind,
    Cannon,
    Treehouse,
}

impl CastlePart {
    /// Every animated part, in paint order of the rig
    pub const ALL: [CastlePart; 28] = [
        CastlePart::BackRightLeg,
        CastlePart::FrontRightLeg,
        CastlePart::BackLeftLeg,
        CastlePart::FrontLeftLeg,
        CastlePart::Foot(0),
        CastlePart::Foot(1),
        CastlePart::Foot(2),
        CastlePart::Foot(3),
        CastlePart::LowerLeg(0),
        CastlePart::LowerLeg(1),
        CastlePart::Wing,
        CastlePart::Antenna,
        CastlePart::Chimney(0),
        CastlePart::Chimney(1),
        CastlePart::Chimney(2),
        CastlePart::Houses,
        CastlePart::Mound,
        CastlePart::Spire(0),
        CastlePart::Spire(1),
        CastlePart::Spire(2),
        CastlePart::Spire(3),
        CastlePart::Spire(4),
        CastlePart::Spire(5),
        CastlePart::Knob,
        CastlePart::Tele,
        CastlePart::Wind,
        CastlePart::Cannon,
        CastlePart::Treehouse,
    ];

    /// Rotation in degrees at animation time `t`
    pub fn angle(self, t: f64) -> f64 {
        match self {
            CastlePart::BackRightLeg => t.sin() * 8.0,
            CastlePart::FrontRightLeg => (t + 1.0).sin() * 8.0,
            CastlePart::BackLeftLeg => (t + 2.0).sin() * 8.0,
            CastlePart::FrontLeftLeg => (t + 3.0).sin() * 8.0,
            CastlePart::Foot(i) => (t + f64::from(i)).sin() * -12.0,
            CastlePart::LowerLeg(i) => (t + f64::from(i) * 2.0).sin() * 5.0,
            CastlePart::Wing => (t * 2.0).sin() * 15.0,
            CastlePart::Antenna => (t * 1.5).sin() * 8.0,
            CastlePart::Chimney(i) => (t + f64::from(i)).sin() * 3.0,
            CastlePart::Houses => 1.0 + (t * 0.5).sin() * 2.0,
            CastlePart::Mound => (t * 0.5).sin() * 1.5,
            CastlePart::Spire(i) => (t + f64::from(i) * 0.5).sin() * 4.0,
            CastlePart::Knob => (t * 3.0).sin() * 10.0,
            CastlePart::Tele => (t * 0.8).sin() * 5.0,
            CastlePart::Wind => (t * 4.0).sin() * 3.0,
            CastlePart::Cannon => (t * 0.3).sin() * 2.0,
            CastlePart::Treehouse => (t * 0.7).sin() * 3.0,
        }
    }

    pub fn transform(self, t: f64) -> Transform {
        Transform::rotate(self.angle(t))
    }
}

/// Transforms for every animated part at time `t`
pub fn pose(t: f64) -> Vec<(CastlePart, Transform)> {
    CastlePart::ALL
        .into_iter()
        .map(|part| (part, part.transform(t)))
        .collect()
}

/// Horizontal offset, in percent, of the `index`-th cloud after `frame` frames.
///
/// Cloud `index` moves `(0.1 + index * 0.02) * 0.1` percent per frame. Once it
/// passes [`CLOUD_WRAP`] it restarts at [`CLOUD_RESET`].
pub fn cloud_left(index: usize, start: f64, frame: u64) -> f64 {
    let step = cloud_step(index);
    let frame = frame as f64;

    // Frames until the first wrap, then the length of each full lap
    let first_wrap = (((CLOUD_WRAP - start) / step).floor() + 1.0).max(0.0);
    if frame < first_wrap {
        return start + frame * step;
    }
    let lap = ((CLOUD_WRAP - CLOUD_RESET) / step).floor() + 1.0;
    let into_lap = (frame - first_wrap) % lap;
    CLOUD_RESET + into_lap * step
}

/// Per-frame movement of cloud `index`, in percent
pub fn cloud_step(index: usize) -> f64 {
    (0.1 + index as f64 * 0.02) * 0.1
}

/// New castle tilt after a horizontal drag of `dx` pixels
pub fn drag_angle(current: f64, dx: f64) -> f64 {
    (current + dx * DRAG_SENSITIVITY).clamp(MIN_ANGLE, MAX_ANGLE)
}

/// CSS transform of the whole castle at `angle` degrees of tilt
pub fn castle_transform(angle: f64) -> String {
    format!("translate(-50%, -70%) rotateZ({angle:.3}deg)")
}

/// Pointer drag over the castle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    angle: f64,
    last_x: Option<f64>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            angle: INITIAL_ANGLE,
            last_x: None,
        }
    }
}

impl DragState {
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }

    pub fn press(&mut self, x: f64) {
        self.last_x = Some(x);
    }

    pub fn release(&mut self) {
        self.last_x = None;
    }

    /// Pointer moved to `x`. Only tilts while pressed.
    pub fn move_to(&mut self, x: f64) {
        if let Some(last) = self.last_x {
            self.angle = drag_angle(self.angle, x - last);
            self.last_x = Some(x);
        }
    }
}

/// Loading gate: the scene starts once every sprite has settled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    loaded: usize,
    total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    /// Gate sized for the whole castle scene
    pub fn for_scene() -> Self {
        Self::new(sprite_count())
    }

    /// One image finished, successfully or not
    pub fn record(&mut self) {
        self.loaded = (self.loaded + 1).min(self.total);
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.loaded as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= self.total
    }
}

// ---------------------------------------------------------------------------
// Scene layout
// ---------------------------------------------------------------------------

/// A drifting cloud or cloud shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    pub class: &'static str,
    pub file: &'static str,
    /// Static placement (bottom, width, rotation)
    pub style: &'static str,
    /// Starting left offset, percent
    pub start: f64,
}

/// Sky layers. Drift speed follows the index in this list.
pub const CLOUDS: &[Cloud] = &[
    Cloud { class: "cloud-bg", file: "cloud-bg.svg", style: "bottom: 17%; width: 80%;", start: -30.0 },
    Cloud { class: "cloud-bg2", file: "cloud-bg.svg", style: "bottom: 17%; width: 80%;", start: 40.0 },
    Cloud { class: "cloud1", file: "cloud.svg", style: "bottom: 30%; width: 80%;", start: -30.0 },
    Cloud { class: "cloud2", file: "cloud.svg", style: "bottom: 46%; width: 80%;", start: -29.0 },
    Cloud { class: "cloud3", file: "cloud.svg", style: "bottom: 38%; width: 80%;", start: 17.0 },
    Cloud { class: "cloud4", file: "cloud.svg", style: "bottom: 18%; width: 80%;", start: -18.0 },
    Cloud { class: "cloud5", file: "cloud.svg", style: "bottom: 8%; width: 80%;", start: 40.0 },
];

/// Shadows drift with their own index sequence
pub const CLOUD_SHADOWS: &[Cloud] = &[
    Cloud { class: "cloud-shadow1", file: "cloud-shadow.svg", style: "bottom: 43%; width: 80%; transform: rotate(5deg);", start: -30.0 },
    Cloud { class: "cloud-shadow2", file: "cloud-shadow.svg", style: "bottom: 12%; width: 80%; transform: rotate(5deg);", start: 36.0 },
    Cloud { class: "cloud-shadow3", file: "cloud-shadow.svg", style: "bottom: 31%; width: 80%; transform: rotate(5deg);", start: -30.0 },
];

/// Static scenery around the castle
pub const BACKGROUND: (&str, &str) = ("background.svg", "bottom: 25.5%; left: 0; width: 100%;");
pub const FOREGROUND: (&str, &str) = ("foreground.svg", "bottom: 0; left: 0; width: 100%;");

/// A node of the castle rig
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sprite {
    Image {
        class: &'static str,
        file: &'static str,
        style: &'static str,
        part: Option<CastlePart>,
    },
    Group {
        class: &'static str,
        style: &'static str,
        part: Option<CastlePart>,
        children: &'static [Sprite],
    },
}

const fn img(class: &'static str, file: &'static str, style: &'static str) -> Sprite {
    Sprite::Image { class, file, style, part: None }
}

const fn moving(class: &'static str, file: &'static str, style: &'static str, part: CastlePart) -> Sprite {
    Sprite::Image { class, file, style, part: Some(part) }
}

const fn group(
    class: &'static str,
    style: &'static str,
    part: CastlePart,
    children: &'static [Sprite],
) -> Sprite {
    Sprite::Group { class, style, part: Some(part), children }
}

impl Sprite {
    pub fn part(&self) -> Option<CastlePart> {
        match self {
            Sprite::Image { part, .. } | Sprite::Group { part, .. } => *part,
        }
    }

    /// Number of images in this node and below
    pub fn image_count(&self) -> usize {
        match self {
            Sprite::Image { .. } => 1,
            Sprite::Group { children, .. } => children.iter().map(Sprite::image_count).sum(),
        }
    }
}

/// The rig, in paint order
pub const CASTLE: &[Sprite] = &[
    group("brleg", "left: 400px; top: 625px; transform-origin: 10px -10px;", CastlePart::BackRightLeg, &[
        img("", "brleg.svg", "position: relative;"),
        moving("brfoot", "brfoot.svg", "left: -18px; top: 82px; transform-origin: 56% 44%;", CastlePart::Foot(0)),
    ]),
    group("frleg", "left: 240px; top: 653px; transform-origin: 8px -10px;", CastlePart::FrontRightLeg, &[
        img("", "frleg.svg", "position: relative;"),
        moving("frfoot", "frfoot.svg", "left: -18px; top: 51px; transform-origin: 56% 44%;", CastlePart::Foot(1)),
    ]),
    moving("chimney3", "chimney3.svg", "left: 400px; top: 30px; transform-origin: 45% 120%;", CastlePart::Chimney(0)),
    group("houses-group", "left: 305px; top: 130px; transform-origin: -50px 300px;", CastlePart::Houses, &[
        moving("point6", "point6.svg", "left: 84px; top: 19px; transform-origin: 40% 120%;", CastlePart::Spire(0)),
        moving("point5", "point5.svg", "left: 70px; top: -23px; transform-origin: -40% 200%;", CastlePart::Spire(1)),
        moving("point4", "point4.svg", "left: 40px; top: -17px; transform-origin: 0% 100%;", CastlePart::Spire(2)),
        img("houses", "houses.svg", "position: relative;"),
        moving("treehouse", "treehouse.svg", "left: 220px; top: 10px; transform-origin: 50% 150%;", CastlePart::Treehouse),
    ]),
    moving("chimney2", "chimney2.svg", "left: 430px; top: 120px; transform-origin: 0% 90%;", CastlePart::Chimney(1)),
    moving("chimney1", "chimney1.svg", "left: 420px; top: 90px; transform-origin: -10% 90%;", CastlePart::Chimney(2)),
    moving("wing", "wing.svg", "left: 420px; top: 370px; transform-origin: 0% 50%;", CastlePart::Wing),
    moving("antenna", "antenna.svg", "left: -100px; top: 90px; transform-origin: 100% 65%;", CastlePart::Antenna),
    group("mound-group", "left: 115px; top: 110px; transform-origin: 110px 220px;", CastlePart::Mound, &[
        moving("point3", "point3.svg", "left: 125px; top: -13px; transform-origin: 50% 400%;", CastlePart::Spire(3)),
        moving("point2", "point2.svg", "left: 50px; top: -22px; transform-origin: 120% 200%;", CastlePart::Spire(4)),
        moving("point1", "point1.svg", "left: 4px; top: 55px; transform-origin: 150% 150%;", CastlePart::Spire(5)),
        img("mound", "mound.svg", "position: relative;"),
    ]),
    moving("wind", "wind.svg", "left: 400px; top: 260px; transform-origin: 0% 90%;", CastlePart::Wind),
    moving("cannon", "cannon.svg", "left: 30px; top: 460px; transform-origin: 100% 60%;", CastlePart::Cannon),
    img("main", "main.svg", "left: 80px; top: 230px;"),
    group("blleg", "left: 410px; top: 615px; transform-origin: 10px 15px;", CastlePart::BackLeftLeg, &[
        group("blbottom-group", "left: 0px; top: 60px; transform-origin: 10px 0px;", CastlePart::LowerLeg(0), &[
            moving("blfoot", "blfoot.svg", "left: -19px; top: 68px; transform-origin: 56% 44%;", CastlePart::Foot(2)),
            img("blbottom", "blbottom.svg", "position: relative;"),
        ]),
        img("bltop", "bltop.svg", "position: relative;"),
    ]),
    img("blcover", "blcover.svg", "left: 360px; top: 573px;"),
    moving("knob", "knob.svg", "left: 214px; top: 524px; transform-origin: 30% 63%;", CastlePart::Knob),
    moving("tele", "tele.svg", "left: 90px; top: 430px; transform-origin: 90% 50%;", CastlePart::Tele),
    img("telecover", "telecover.svg", "left: 161px; top: 399px;"),
    group("flleg", "left: 250px; top: 615px; transform-origin: 10px 15px;", CastlePart::FrontLeftLeg, &[
        group("flbottom-group", "left: 0px; top: 60px; transform-origin: 10px 0px;", CastlePart::LowerLeg(1), &[
            moving("flfoot", "flfoot.svg", "left: -19px; top: 68px; transform-origin: 56% 44%;", CastlePart::Foot(3)),
            img("flbottom", "flbottom.svg", "position: relative;"),
        ]),
        img("fltop", "fltop.svg", "position: relative;"),
    ]),
    img("flcover", "flcover.svg", "left: 244px; top: 567px;"),
];

/// Every image the page loads: sky, scenery and the rig
pub fn sprite_count() -> usize {
    CLOUDS.len() + CLOUD_SHADOWS.len() + 2 + CASTLE.iter().map(Sprite::image_count).sum::<usize>()
}

pub fn asset_url(file: &str) -> String {
    format!("{ASSET_BASE}{file}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pose_covers_every_part_once() {
        let pose = pose(1.3);
        let parts: HashSet<_> = pose.iter().map(|(part, _)| *part).collect();
        assert_eq!(parts.len(), pose.len());
        assert_eq!(pose.len(), 28);
    }

    #[test]
    fn test_rest_pose() {
        assert_eq!(CastlePart::BackRightLeg.angle(0.0), 0.0);
        assert_eq!(CastlePart::Houses.angle(0.0), 1.0);
        assert!((CastlePart::FrontRightLeg.angle(0.0) - 1f64.sin() * 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_amplitudes_are_bounded() {
        for frame in 0..2000 {
            let t = frame as f64 * 0.02;
            assert!(CastlePart::Wing.angle(t).abs() <= 15.0);
            assert!(CastlePart::Foot(2).angle(t).abs() <= 12.0);
            let houses = CastlePart::Houses.angle(t);
            assert!((-1.0..=3.0).contains(&houses));
        }
    }

    #[test]
    fn test_every_part_has_a_sprite() {
        fn collect(sprites: &[Sprite], out: &mut HashSet<CastlePart>) {
            for sprite in sprites {
                if let Some(part) = sprite.part() {
                    out.insert(part);
                }
                if let Sprite::Group { children, .. } = sprite {
                    collect(children, out);
                }
            }
        }
        let mut rigged = HashSet::new();
        collect(CASTLE, &mut rigged);
        for (part, _) in pose(0.0) {
            assert!(rigged.contains(&part), "{part:?} has no sprite");
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_drag_angle_is_clamped() {
        assert!(approx(drag_angle(INITIAL_ANGLE, 50.0), 14.0));
        assert_eq!(drag_angle(INITIAL_ANGLE, 10_000.0), MAX_ANGLE);
        assert_eq!(drag_angle(INITIAL_ANGLE, -10_000.0), MIN_ANGLE);
        assert_eq!(drag_angle(MAX_ANGLE, 1.0), MAX_ANGLE);
    }

    #[test]
    fn test_drag_only_while_pressed() {
        let mut drag = DragState::default();
        drag.move_to(500.0);
        assert_eq!(drag.angle(), INITIAL_ANGLE);

        drag.press(100.0);
        drag.move_to(150.0);
        assert!(approx(drag.angle(), 14.0));
        drag.move_to(100.0);
        assert!(approx(drag.angle(), INITIAL_ANGLE));

        drag.release();
        assert!(!drag.is_dragging());
        drag.move_to(900.0);
        assert!(approx(drag.angle(), INITIAL_ANGLE));
    }

    #[test]
    fn test_drag_stays_in_range() {
        let mut drag = DragState::default();
        drag.press(0.0);
        for x in [3000.0, -4000.0, 120.0, 9999.0, -20.0] {
            drag.move_to(x);
            assert!((MIN_ANGLE..=MAX_ANGLE).contains(&drag.angle()));
        }
    }

    #[test]
    fn test_cloud_moves_from_start() {
        assert_eq!(cloud_left(0, -30.0, 0), -30.0);
        let after = cloud_left(0, -30.0, 100);
        assert!((after - (-30.0 + 100.0 * 0.01)).abs() < 1e-9);
        assert!(cloud_left(3, 0.0, 10) > cloud_left(0, 0.0, 10));
    }

    #[test]
    fn test_clouds_wrap_around() {
        let step = cloud_step(0);
        let frames_to_wrap = ((CLOUD_WRAP - 140.0) / step).floor() as u64 + 1;
        assert!(cloud_left(0, 140.0, frames_to_wrap - 1) <= CLOUD_WRAP);
        assert_eq!(cloud_left(0, 140.0, frames_to_wrap), CLOUD_RESET);

        for frame in (0..200_000).step_by(997) {
            let left = cloud_left(6, 40.0, frame);
            assert!((CLOUD_RESET..=CLOUD_WRAP).contains(&left), "frame {frame}: {left}");
        }
    }

    #[test]
    fn test_load_progress() {
        let mut progress = LoadProgress::new(4);
        assert_eq!(progress.percent(), 0);
        progress.record();
        assert_eq!(progress.percent(), 25);
        for _ in 0..10 {
            progress.record();
        }
        assert!(progress.is_complete());
        assert_eq!(progress.loaded(), 4);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_scene_gate_counts_every_image() {
        let gate = LoadProgress::for_scene();
        assert_eq!(gate.total(), 44);
        assert!(!gate.is_complete());
    }

    #[test]
    fn test_castle_transform() {
        assert_eq!(castle_transform(9.0), "translate(-50%, -70%) rotateZ(9.000deg)");
        assert_eq!(asset_url("wing.svg"), "https://assets.codepen.io/721952/wing.svg");
    }
}
