use chrono::{Local, Timelike};

use super::geometry::{Angle, Point, Transform};
use super::theme::{Bgra, Theme};

/// Wall-clock snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

pub struct Canvas {
    pub width: i32,
    pub height: i32,
    pixel_data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        self.pixel_data = vec![0u8; (width * height * 4) as usize];
    }

    pub fn get_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn fill(&mut self, color: Bgra) {
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(color.as_ref());
        }
    }

    /// Draws the whole clock for the given time: background, face,
    /// hour, minute and second hands, and the center pin on top.
    pub fn draw_clock(&mut self, time: ClockTime, theme: Theme) {
        self.fill(theme.background);

        if self.width.min(self.height) < 2 {
            return;
        }

        let space = Transform::clock_space(self.width, self.height);

        self.draw_face(&space, theme.ink);
        self.draw_hour_hand(&space, time.hour, theme.ink);
        self.draw_minute_hand(&space, time.minute, theme.ink);
        self.draw_second_hand(&space, time.second, theme.ink);
        self.draw_pin(&space, theme.ink);
    }

    fn draw_face(&mut self, space: &Transform, color: Bgra) {
        self.stroke_circle(space, 0.95, 0.01, color);
    }

    // The hour hand snaps to the hour mark, no sub-hour motion
    fn draw_hour_hand(&mut self, space: &Transform, hour: u32, color: Bgra) {
        self.fill_hand(&space.rotate(Angle::hour(hour)), 0.6, 0.1, color);
    }

    fn draw_minute_hand(&mut self, space: &Transform, minute: u32, color: Bgra) {
        self.fill_hand(&space.rotate(Angle::minute(minute)), 0.8, 0.05, color);
    }

    fn draw_second_hand(&mut self, space: &Transform, second: u32, color: Bgra) {
        self.fill_hand(&space.rotate(Angle::second(second)), 0.9, 0.025, color);
    }

    fn draw_pin(&mut self, space: &Transform, color: Bgra) {
        self.fill_circle(space, 0.1, color);
    }

    fn stroke_circle(&mut self, space: &Transform, radius: f32, line_width: f32, color: Bgra) {
        self.paint(space, color, move |p| {
            ((p.x * p.x + p.y * p.y).sqrt() - radius).abs() - line_width / 2.0
        });
    }

    fn fill_circle(&mut self, space: &Transform, radius: f32, color: Bgra) {
        self.paint(space, color, move |p| {
            (p.x * p.x + p.y * p.y).sqrt() - radius
        });
    }

    // A hand is a filled rectangle along local +x, centered on the axis
    fn fill_hand(&mut self, space: &Transform, length: f32, half_width: f32, color: Bgra) {
        self.paint(space, color, move |p| {
            (-p.x).max(p.x - length).max(p.y.abs() - half_width)
        });
    }

    /// Rasterizes one shape: walks the pixels of the clock box, maps
    /// each pixel center back into clock space through the inverse
    /// transform, and covers it by signed distance with a one-pixel
    /// fade at the edge.
    fn paint<F>(&mut self, space: &Transform, color: Bgra, distance: F)
    where
        F: Fn(Point) -> f32,
    {
        let Some(inverse) = space.invert() else {
            return;
        };
        let scale = space.scale_factor();

        let box_size = self.width.min(self.height);
        let box_x = (self.width - box_size) / 2;
        let box_y = (self.height - box_size) / 2;

        for py in box_y..box_y + box_size {
            for px in box_x..box_x + box_size {
                let center = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = distance(inverse.apply(center)) * scale;

                if dist >= 0.5 {
                    continue;
                }

                if dist <= -0.5 {
                    self.set_pixel(px, py, color);
                } else {
                    // Fade out at the edges
                    let alpha = ((0.5 - dist) * 255.0) as u8;
                    Self::alpha_blending(
                        &mut self.pixel_data,
                        Self::pixel_idx(self.width, px, py),
                        color,
                        alpha,
                    );
                }
            }
        }
    }

    #[inline]
    fn pixel_idx(width: i32, x: i32, y: i32) -> usize {
        ((y * width + x) * 4) as usize
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Bgra) {
        let index = Self::pixel_idx(self.width, x, y);
        if index + 3 < self.pixel_data.len() {
            self.pixel_data[index..index + 4].copy_from_slice(color.as_ref());
        }
    }

    fn alpha_blending(pxl_data: &mut [u8], idx: usize, color: Bgra, alpha: u8) {
        if idx + 3 >= pxl_data.len() {
            return;
        }

        let inv_alpha = 255 - alpha;

        pxl_data[idx] = Self::blend_color(color.b(), alpha, pxl_data[idx], inv_alpha);
        pxl_data[idx + 1] = Self::blend_color(color.g(), alpha, pxl_data[idx + 1], inv_alpha);
        pxl_data[idx + 2] = Self::blend_color(color.r(), alpha, pxl_data[idx + 2], inv_alpha);
    }

    #[inline]
    fn blend_color(src: u8, alpha: u8, dst: u8, inv_alpha: u8) -> u8 {
        ((src as u16 * alpha as u16 + dst as u16 * inv_alpha as u16) >> 8) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn rendered(width: i32, height: i32, hour: u32, minute: u32, second: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.draw_clock(
            ClockTime {
                hour,
                minute,
                second,
            },
            Theme::default(),
        );
        canvas
    }

    fn px(canvas: &Canvas, x: i32, y: i32) -> [u8; 4] {
        let idx = Canvas::pixel_idx(canvas.width, x, y);
        canvas.get_data()[idx..idx + 4].try_into().unwrap()
    }

    #[test]
    fn three_oclock_hands() {
        let canvas = rendered(256, 256, 3, 0, 0);
        // hour hand points right
        assert_eq!(px(&canvas, 172, 128), BLACK);
        // nothing points left
        assert_eq!(px(&canvas, 83, 128), WHITE);
        // minute and second hands point up
        assert_eq!(px(&canvas, 128, 64), BLACK);
        // pin covers the center
        assert_eq!(px(&canvas, 128, 128), BLACK);
        // hour hand ends at 0.6, the face ring is farther out
        assert_eq!(px(&canvas, 240, 128), WHITE);
    }

    #[test]
    fn face_ring_at_its_radius() {
        let canvas = rendered(256, 256, 3, 0, 0);
        // radius 0.95 puts the ring ~121.6px right of center
        let [b, g, r, _] = px(&canvas, 249, 128);
        assert!(b < 128 && g < 128 && r < 128, "face ring missing");
    }

    #[test]
    fn hour_hand_ignores_am_pm() {
        let morning = rendered(256, 256, 3, 0, 0);
        let afternoon = rendered(256, 256, 15, 0, 0);
        assert_eq!(morning.get_data(), afternoon.get_data());
    }

    #[test]
    fn six_thirty_hands_point_down() {
        let canvas = rendered(256, 256, 6, 30, 30);
        assert_eq!(px(&canvas, 128, 192), BLACK);
        assert_eq!(px(&canvas, 128, 64), WHITE);
    }

    #[test]
    fn wide_window_margins_stay_clear() {
        let canvas = rendered(400, 200, 3, 0, 0);
        // box is 200px wide, centered with 100px margins
        assert_eq!(px(&canvas, 50, 100), WHITE);
        assert_eq!(px(&canvas, 350, 100), WHITE);
        // hour hand inside the centered box
        assert_eq!(px(&canvas, 250, 100), BLACK);
    }

    #[test]
    fn rendering_is_idempotent() {
        let time = ClockTime {
            hour: 10,
            minute: 9,
            second: 30,
        };
        let mut canvas = rendered(256, 256, 10, 9, 30);
        let first = canvas.get_data().to_vec();
        canvas.draw_clock(time, Theme::default());
        assert_eq!(canvas.get_data(), first.as_slice());
    }

    #[test]
    fn degenerate_canvas_clears_without_panicking() {
        let canvas = rendered(1, 1, 3, 0, 0);
        assert_eq!(px(&canvas, 0, 0), WHITE);
    }

    #[test]
    fn resize_reallocates() {
        let mut canvas = Canvas::new(256, 256);
        canvas.resize(400, 200);
        assert_eq!(canvas.get_data().len(), 400 * 200 * 4);
        assert_eq!((canvas.width, canvas.height), (400, 200));
    }
}
