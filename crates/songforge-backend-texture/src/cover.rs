//! Procedural cover art.
//!
//! A cover is fully described by a [`CoverPlan`]: two hues and twenty circle
//! draws taken from a Mulberry32 stream seeded with the item seed. The plan is
//! the reproducibility contract; rasterization replays it onto any
//! [`Surface`].

use std::path::Path;

use songforge_spec::Mulberry32;
use thiserror::Error;

use crate::canvas::{LinearGradient, Rect, Surface, TextureBuffer};
use crate::color::Color;
use crate::font::TextStyle;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};

/// Cover width and height in pixels.
pub const COVER_SIZE: u32 = 300;
/// Number of translucent circles overlaid on the gradient.
pub const CIRCLE_COUNT: usize = 20;
/// Longest title drawn before truncation.
pub const TITLE_MAX_CHARS: usize = 18;
/// Longest artist name drawn before truncation.
pub const ARTIST_MAX_CHARS: usize = 20;
/// Appended to truncated text.
pub const ELLIPSIS: &str = "...";

const SIZE: f64 = COVER_SIZE as f64;
const CIRCLE_ALPHA: f64 = 0.3;
const BAND_TOP: f64 = 200.0;
const BAND_ALPHA: f64 = 0.9;
const TEXT_LEFT: f64 = 15.0;
const TITLE_BASELINE: f64 = 250.0;
const ARTIST_BASELINE: f64 = 275.0;
const TEXT_SCALE: u32 = 2;
const ARTIST_GRAY: [u8; 3] = [0xcc, 0xcc, 0xcc];

/// Errors from cover export.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("failed to encode cover: {0}")]
    Png(#[from] PngError),
}

/// One circle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDraw {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// HSL lightness in percent, 30 to 70.
    pub lightness: f64,
}

/// Every random draw a cover makes, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverPlan {
    /// Gradient start hue in degrees, 0 to 359.
    pub hue1: u32,
    /// Gradient end hue in degrees, 60 to 179 degrees past `hue1`.
    pub hue2: u32,
    pub circles: Vec<CircleDraw>,
}

impl CoverPlan {
    /// Draws the plan for an item seed.
    ///
    /// Order: hue1, hue2, then x, y, radius, lightness per circle.
    pub fn from_seed(item_seed: u32) -> Self {
        let mut rng = Mulberry32::new(item_seed);

        let hue1 = (rng.next_f64() * 360.0).floor() as u32;
        let hue2 = (hue1 + 60 + (rng.next_f64() * 120.0).floor() as u32) % 360;

        let circles = (0..CIRCLE_COUNT)
            .map(|_| {
                let x = rng.next_f64() * SIZE;
                let y = rng.next_f64() * SIZE;
                let radius = rng.next_f64() * 50.0 + 10.0;
                let lightness = 30.0 + rng.next_f64() * 40.0;
                CircleDraw {
                    x,
                    y,
                    radius,
                    lightness,
                }
            })
            .collect();

        Self {
            hue1,
            hue2,
            circles,
        }
    }

    /// Paint this plan onto a surface.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, title: &str, artist: &str) {
        let full = Rect::new(0.0, 0.0, SIZE, SIZE);
        let background = LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: SIZE,
            y1: SIZE,
            start: Color::from_hsl(self.hue1 as f64, 0.7, 0.5),
            end: Color::from_hsl(self.hue2 as f64, 0.7, 0.3),
        };
        surface.fill_linear_gradient(full, &background);

        for circle in &self.circles {
            let fill = Color::from_hsl(self.hue1 as f64, 0.5, circle.lightness / 100.0)
                .with_alpha(CIRCLE_ALPHA);
            surface.fill_circle(circle.x, circle.y, circle.radius, fill);
        }

        let band = LinearGradient {
            x0: 0.0,
            y0: BAND_TOP,
            x1: 0.0,
            y1: SIZE,
            start: Color::transparent(),
            end: Color::black().with_alpha(BAND_ALPHA),
        };
        surface.fill_linear_gradient(Rect::new(0.0, BAND_TOP, SIZE, SIZE - BAND_TOP), &band);

        let title_style = TextStyle::new(Color::white(), TEXT_SCALE).bold();
        surface.draw_text(
            &truncate_text(title, TITLE_MAX_CHARS),
            TEXT_LEFT,
            TITLE_BASELINE,
            &title_style,
        );

        let artist_style = TextStyle::new(Color::from_rgb8(ARTIST_GRAY), TEXT_SCALE);
        surface.draw_text(
            &truncate_text(artist, ARTIST_MAX_CHARS),
            TEXT_LEFT,
            ARTIST_BASELINE,
            &artist_style,
        );
    }
}

/// Cut `text` to `max_chars` characters, appending "..." when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &text[..end], ELLIPSIS),
        None => text.to_string(),
    }
}

/// A rendered cover and the plan it was painted from.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub plan: CoverPlan,
    pub image: TextureBuffer,
}

/// Encoded cover image.
#[derive(Debug, Clone)]
pub struct CoverPng {
    /// PNG bytes.
    pub data: Vec<u8>,
    /// BLAKE3 hash of `data`.
    pub hash: String,
}

impl CoverArt {
    /// Encode with the default PNG settings.
    pub fn to_png(&self) -> Result<CoverPng, CoverError> {
        self.to_png_with(&PngConfig::default())
    }

    /// Encode with explicit PNG settings.
    pub fn to_png_with(&self, config: &PngConfig) -> Result<CoverPng, CoverError> {
        let (data, hash) = write_rgba_to_vec_with_hash(&self.image, config)?;
        Ok(CoverPng { data, hash })
    }

    /// Encode and write to `path`, returning the hash.
    pub fn write_png(&self, path: &Path) -> Result<String, CoverError> {
        let png = self.to_png()?;
        std::fs::write(path, &png.data).map_err(PngError::from)?;
        Ok(png.hash)
    }
}

/// Render the cover for a song.
pub fn render_cover(title: &str, artist: &str, item_seed: u32) -> CoverArt {
    tracing::debug!(item_seed, title, artist, "rendering cover");
    let plan = CoverPlan::from_seed(item_seed);
    let mut image = TextureBuffer::new(COVER_SIZE, COVER_SIZE, Color::black());
    plan.paint(&mut image, title, artist);
    CoverArt { plan, image }
}
