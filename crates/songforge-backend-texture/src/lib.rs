//! Songforge Cover Backend
//!
//! Renders a song's cover art from its title, artist and item seed.
//!
//! The random part of a cover is a [`CoverPlan`]: two hues and twenty circle
//! draws in a fixed order from a Mulberry32 stream. Painting replays the plan
//! onto a [`Surface`]; the bundled [`TextureBuffer`] rasterizes it and
//! [`png`] encodes it with fixed settings for byte-stable output.
//!
//! ```
//! use songforge_backend_texture::{render_cover, COVER_SIZE};
//!
//! let art = render_cover("Quiet Storm", "Ada Lovelace", 42);
//! assert_eq!(art.plan.hue1, 216);
//! assert_eq!(art.image.width, COVER_SIZE);
//! ```

pub mod canvas;
pub mod color;
pub mod cover;
pub mod font;
pub mod png;

pub use canvas::{LinearGradient, Rect, Surface, TextureBuffer};
pub use color::Color;
pub use cover::{
    render_cover, truncate_text, CircleDraw, CoverArt, CoverError, CoverPlan, CoverPng,
    ARTIST_MAX_CHARS, CIRCLE_COUNT, COVER_SIZE, TITLE_MAX_CHARS,
};
pub use font::TextStyle;
pub use png::{PngConfig, PngError};
