//! Songforge shared types and determinism primitives.
//!
//! Songforge synthesizes an unbounded, paginated catalog of fictitious songs
//! from a locale, a 64-bit user seed, a page number and a slot index. Identical
//! inputs always reproduce identical output; nothing is persisted.
//!
//! This crate holds what every generator needs:
//!
//! - [`rng`]: the seeded Mulberry32 stream
//! - [`seed`]: page and item seed derivation
//! - [`locale`]: the closed set of supported locales
//! - [`model`]: generated value types (songs, reviews, melodies)
//! - [`request`]: page requests and boundary validation
//! - [`error`]: validation error codes
//!
//! # Example
//!
//! ```
//! use songforge_spec::{page_seed, item_seed, Mulberry32};
//!
//! let ps = page_seed(42, 3);
//! let mut rng = Mulberry32::new(item_seed(ps, 0));
//! let value = rng.next_f64();
//! assert!((0.0..1.0).contains(&value));
//! ```

pub mod error;
pub mod locale;
pub mod model;
pub mod request;
pub mod rng;
pub mod seed;

pub use error::{ErrorCode, ValidationError};
pub use locale::Locale;
pub use model::{Melody, MelodyNote, ScaleKind, SongDetail, SongSummary, SINGLE_ALBUM};
pub use request::{
    parse_seed, validate_avg_likes, validate_duration, GenerationRequest, DEFAULT_PAGE_SIZE,
    MAX_MELODY_DURATION, MAX_PAGE_SIZE,
};
pub use rng::{make_rng, Mulberry32};
pub use seed::{item_seed, normalize_seed, page_seed};
