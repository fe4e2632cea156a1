//! Songforge End-to-End Test Infrastructure
//!
//! Integration tests for the guarantees the catalog is built on:
//!
//! - **Determinism**: identical inputs give byte-identical pages, reviews,
//!   covers and melodies
//! - **Seed sensitivity**: different pages and seeds give different content
//! - **Boundary validation**: malformed requests are rejected before generation
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p songforge-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use songforge_tests::{verify_determinism, fixtures};
//!
//! let result = verify_determinism(|| fixtures::page_bytes(Locale::DeDe, 42, 3, 20), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, verify_hash_determinism,
    DeterminismResult, DiffInfo,
};
