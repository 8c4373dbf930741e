use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Affine transform mapping normalized clock space onto window pixels.
///
/// Applied as `x' = xx*x + xy*y + x0`, `y' = yx*x + yy*y + y0`. The
/// combinators post-multiply and take `self` by value, so deriving a
/// hand's transform from the frame transform never mutates the latter.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    xx: f32,
    xy: f32,
    yx: f32,
    yy: f32,
    x0: f32,
    y0: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            xx: 1.0,
            xy: 0.0,
            yx: 0.0,
            yy: 1.0,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// Transform for the clock coordinate system: origin at the center
    /// of the largest centered square that fits the window, radius 1.0
    /// spanning its half-side, rotation 0 at 12 o'clock, rotation
    /// increasing clockwise.
    pub fn clock_space(width: i32, height: i32) -> Self {
        let box_size = width.min(height) as f32;

        // Center the clock box, scale so -1.0..1.0 spans it, move the
        // origin to its middle, then rotate CCW by 90 degrees so that
        // rotation 0 points up. The rotation direction needs no flip:
        // angles already grow clockwise in the Y-down pixel space.
        Self::identity()
            .translate(
                (width as f32 - box_size) / 2.0,
                (height as f32 - box_size) / 2.0,
            )
            .scale(box_size / 2.0, box_size / 2.0)
            .translate(1.0, 1.0)
            .rotate(-PI / 2.0)
    }

    pub fn translate(self, tx: f32, ty: f32) -> Self {
        Self {
            x0: self.xx * tx + self.xy * ty + self.x0,
            y0: self.yx * tx + self.yy * ty + self.y0,
            ..self
        }
    }

    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self {
            xx: self.xx * sx,
            yx: self.yx * sx,
            xy: self.xy * sy,
            yy: self.yy * sy,
            ..self
        }
    }

    pub fn rotate(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            xx: self.xx * cos + self.xy * sin,
            xy: -self.xx * sin + self.xy * cos,
            yx: self.yx * cos + self.yy * sin,
            yy: -self.yx * sin + self.yy * cos,
            ..self
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.xx * p.x + self.xy * p.y + self.x0,
            y: self.yx * p.x + self.yy * p.y + self.y0,
        }
    }

    pub fn invert(&self) -> Option<Self> {
        let det = self.xx * self.yy - self.xy * self.yx;
        if det == 0.0 {
            return None;
        }

        Some(Self {
            xx: self.yy / det,
            xy: -self.xy / det,
            yx: -self.yx / det,
            yy: self.xx / det,
            x0: (self.xy * self.y0 - self.yy * self.x0) / det,
            y0: (self.yx * self.x0 - self.xx * self.y0) / det,
        })
    }

    /// Pixels per normalized unit. Valid because the clock transform is
    /// a uniform scale plus rotation and translation.
    pub fn scale_factor(&self) -> f32 {
        (self.xx * self.xx + self.yx * self.yx).sqrt()
    }
}

pub struct Angle;

// Hand rotations in radians, clockwise from 12 o'clock
impl Angle {
    pub fn hour(hour: u32) -> f32 {
        (hour % 12) as f32 * PI / 6.0
    }

    pub fn minute(minute: u32) -> f32 {
        minute as f32 * PI / 30.0
    }

    pub fn second(second: u32) -> f32 {
        second as f32 * PI / 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_close(p: Point, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn clock_space_centers_wide_window() {
        // 400x200: box is 200, horizontally centered with 100px margins
        let t = Transform::clock_space(400, 200);
        assert_close(t.apply(Point::new(0.0, 0.0)), 200.0, 100.0);
        // 12 o'clock edge is the top of the box
        assert_close(t.apply(Point::new(1.0, 0.0)), 200.0, 0.0);
        // 3 and 9 o'clock edges sit on the box sides, 100px from the window edges
        assert_close(t.apply(Point::new(0.0, 1.0)), 300.0, 100.0);
        assert_close(t.apply(Point::new(0.0, -1.0)), 100.0, 100.0);
    }

    #[test]
    fn clock_space_centers_tall_window() {
        let t = Transform::clock_space(200, 400);
        assert_close(t.apply(Point::new(0.0, 0.0)), 100.0, 200.0);
        assert_close(t.apply(Point::new(1.0, 0.0)), 100.0, 100.0);
        assert_close(t.apply(Point::new(-1.0, 0.0)), 100.0, 300.0);
    }

    #[test]
    fn clock_space_square_window() {
        let t = Transform::clock_space(256, 256);
        assert_close(t.apply(Point::new(0.0, 0.0)), 128.0, 128.0);
        assert_close(t.apply(Point::new(1.0, 0.0)), 128.0, 0.0);
        assert_eq!(t.scale_factor(), 128.0);
    }

    #[test]
    fn rotation_turns_clockwise() {
        // A quarter turn takes the 12 o'clock direction to 3 o'clock
        let t = Transform::clock_space(256, 256).rotate(PI / 2.0);
        assert_close(t.apply(Point::new(1.0, 0.0)), 256.0, 128.0);
        let t = Transform::clock_space(256, 256).rotate(PI);
        assert_close(t.apply(Point::new(1.0, 0.0)), 128.0, 256.0);
    }

    #[test]
    fn invert_round_trips() {
        let t = Transform::clock_space(400, 200).rotate(1.2345);
        let inv = t.invert().unwrap();
        for &(x, y) in &[(0.0, 0.0), (0.6, -0.1), (-0.95, 0.5)] {
            let p = Point::new(x, y);
            let back = inv.apply(t.apply(p));
            assert_close(back, x, y);
        }
    }

    #[test]
    fn hour_angle_ignores_am_pm() {
        assert!((Angle::hour(3) - PI / 2.0).abs() < EPS);
        assert!((Angle::hour(15) - PI / 2.0).abs() < EPS);
        assert_eq!(Angle::hour(0), 0.0);
        assert_eq!(Angle::hour(12), 0.0);
    }

    #[test]
    fn minute_and_second_angles() {
        assert!((Angle::minute(30) - PI).abs() < EPS);
        assert!((Angle::minute(15) - PI / 2.0).abs() < EPS);
        assert!((Angle::second(45) - 3.0 * PI / 2.0).abs() < EPS);
        assert_eq!(Angle::second(0), 0.0);
    }
}
