//! Raster drawing surface.
//!
//! [`Surface`] is the small set of drawing operations cover rendering needs.
//! [`TextureBuffer`] is the in-memory implementation used for PNG export;
//! other back ends (a browser canvas, a test recorder) can implement the same
//! trait and replay a cover plan.

use crate::color::Color;
use crate::font::{self, TextStyle};

/// A linear gradient between two points, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub start: Color,
    pub end: Color,
}

impl LinearGradient {
    /// Color at a point, projected onto the gradient axis and clamped.
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        let dx = self.x1 - self.x0;
        let dy = self.y1 - self.y0;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f64::EPSILON {
            return self.start;
        }
        let t = ((x - self.x0) * dx + (y - self.y0) * dy) / len_sq;
        self.start.lerp(&self.end, t)
    }
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawing operations needed to paint a cover.
///
/// All fills composite source-over using the color's alpha.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rectangle with a linear gradient.
    fn fill_linear_gradient(&mut self, rect: Rect, gradient: &LinearGradient);

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);

    /// Draw text with its baseline at `baseline_y`. Returns the drawn width.
    ///
    /// The default rasterizes the built-in bitmap font through `fill_rect`.
    fn draw_text(&mut self, text: &str, x: f64, baseline_y: f64, style: &TextStyle) -> f64 {
        font::draw_text(self, text, x, baseline_y, style)
    }
}

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Composite a color over the pixel at the given coordinates.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = self.data[idx].over(&color);
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel range covered by `rect`, clipped to the buffer.
    ///
    /// A pixel is covered when its center lies inside the rectangle.
    fn clip(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let to_px = |v: f64, max: u32| (v - 0.5).ceil().clamp(0.0, max as f64) as u32;
        let x0 = to_px(rect.x, self.width);
        let y0 = to_px(rect.y, self.height);
        let x1 = to_px(rect.x + rect.width, self.width);
        let y1 = to_px(rect.y + rect.height, self.height);
        (x0, y0, x1, y1)
    }
}

impl Surface for TextureBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color);
            }
        }
    }

    fn fill_linear_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let color = gradient.color_at(x as f64 + 0.5, y as f64 + 0.5);
                self.blend(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let (x0, y0, x1, y1) = self.clip(bounds);
        let r_sq = radius * radius;
        for y in y0..y1 {
            let dy = y as f64 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut buf = TextureBuffer::new(10, 10, Color::black());
        buf.fill_rect(Rect::new(-5.0, 8.0, 100.0, 100.0), Color::white());
        assert_eq!(buf.get(0, 7), Color::black());
        assert_eq!(buf.get(0, 8), Color::white());
        assert_eq!(buf.get(9, 9), Color::white());
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut buf = TextureBuffer::new(4, 4, Color::black());
        buf.fill_rect(Rect::new(10.0, 10.0, 5.0, 5.0), Color::white());
        assert!(buf.data.iter().all(|c| *c == Color::black()));
    }

    #[test]
    fn test_gradient_endpoints() {
        let gradient = LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: 100.0,
            y1: 100.0,
            start: Color::black(),
            end: Color::white(),
        };
        assert_eq!(gradient.color_at(0.0, 0.0), Color::black());
        assert_eq!(gradient.color_at(100.0, 100.0), Color::white());
        assert_eq!(gradient.color_at(-50.0, -50.0), Color::black());
        let mid = gradient.color_at(100.0, 0.0);
        assert!((mid.r - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_gradient_uses_start() {
        let gradient = LinearGradient {
            x0: 5.0,
            y0: 5.0,
            x1: 5.0,
            y1: 5.0,
            start: Color::white(),
            end: Color::black(),
        };
        assert_eq!(gradient.color_at(1.0, 2.0), Color::white());
    }

    #[test]
    fn test_fill_circle_covers_center_not_corner() {
        let mut buf = TextureBuffer::new(20, 20, Color::black());
        buf.fill_circle(10.0, 10.0, 5.0, Color::white());
        assert_eq!(buf.get(10, 10), Color::white());
        assert_eq!(buf.get(0, 0), Color::black());
        assert_eq!(buf.get(14, 14), Color::black());
    }

    #[test]
    fn test_translucent_circle_blends() {
        let mut buf = TextureBuffer::new(8, 8, Color::black());
        buf.fill_circle(4.0, 4.0, 3.0, Color::white().with_alpha(0.3));
        let c = buf.get(4, 4);
        assert!((c.r - 0.3).abs() < 1e-9);
        assert!((c.a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_rgba8_length() {
        let buf = TextureBuffer::new(3, 2, Color::white());
        assert_eq!(buf.to_rgba8().len(), 3 * 2 * 4);
    }
}
