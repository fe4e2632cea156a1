//! Songforge Catalog Backend
//!
//! Deterministic song metadata for the Songforge catalog. Given a locale,
//! a user seed and a page, this crate assembles the page's song summaries;
//! given a locale and an item seed it writes the song's review.
//!
//! # Determinism
//!
//! Every field except `likes` is a pure function of its inputs:
//! - Structural choices come from a Mulberry32 stream seeded with the page seed.
//! - Text comes from a PCG32-backed [`LexicalGenerator`] seeded with the item seed.
//! - Likes use the thread-local RNG; see [`likes`].
//!
//! # Example
//!
//! ```
//! use songforge_backend_catalog::generate_page;
//! use songforge_spec::Locale;
//!
//! let songs = generate_page(Locale::EnUs, 42, 1, 5, 0.0);
//! assert_eq!(songs.len(), 5);
//! assert_eq!(songs[0].index, 1);
//! ```

pub mod detail;
pub mod generator;
pub mod lexicon;
pub mod likes;
pub mod page;
pub mod rng;

pub use detail::{generate_detail, REVIEW_PARAGRAPHS};
pub use generator::LexicalGenerator;
pub use lexicon::{genres, lexicon, Lexicon, GENRE_COUNT};
pub use likes::{live_likes, roll_likes};
pub use page::{generate_page, generate_request};
