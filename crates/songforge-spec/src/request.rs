//! Page generation requests and boundary validation.
//!
//! The generators themselves are total: they accept any input and produce
//! something. Validation lives here so the serving shell can reject malformed
//! requests before generation runs.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError};
use crate::locale::Locale;

/// Largest page size the shell will serve.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Longest melody, in seconds, the shell will render.
pub const MAX_MELODY_DURATION: f64 = 60.0;

/// Default page size used by web clients.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Everything needed to generate one catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Content locale; unknown tags resolve to the default locale.
    #[serde(default)]
    pub locale: Locale,
    /// User supplied seed.
    #[serde(rename = "seed", default, with = "seed_serde")]
    pub user_seed: u64,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of songs per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Average like count per song.
    #[serde(default)]
    pub avg_likes: f64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl GenerationRequest {
    /// Creates a request.
    pub fn new(locale: Locale, user_seed: u64, page: u64, page_size: u32, avg_likes: f64) -> Self {
        Self {
            locale,
            user_seed,
            page,
            page_size,
            avg_likes,
        }
    }

    /// Index of the first song on this page (1-based).
    pub fn first_index(&self) -> u64 {
        self.page
            .wrapping_sub(1)
            .wrapping_mul(u64::from(self.page_size))
            .wrapping_add(1)
    }

    /// Check the request against the serving limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::with_field(
                ErrorCode::InvalidPage,
                "page must be at least 1",
                "page",
            ));
        }
        if self.page_size == 0 {
            return Err(ValidationError::with_field(
                ErrorCode::InvalidPageSize,
                "pageSize must be at least 1",
                "pageSize",
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::with_field(
                ErrorCode::PageSizeTooLarge,
                format!("pageSize must be at most {}, got {}", MAX_PAGE_SIZE, self.page_size),
                "pageSize",
            ));
        }
        validate_avg_likes(self.avg_likes)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(Locale::DEFAULT, 0, 1, DEFAULT_PAGE_SIZE, 0.0)
    }
}

/// Check that an average like count is usable.
pub fn validate_avg_likes(avg_likes: f64) -> Result<(), ValidationError> {
    if !avg_likes.is_finite() {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidAvgLikes,
            format!("avgLikes must be finite, got {}", avg_likes),
            "avgLikes",
        ));
    }
    if avg_likes < 0.0 {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidAvgLikes,
            format!("avgLikes must be non-negative, got {}", avg_likes),
            "avgLikes",
        ));
    }
    Ok(())
}

/// Check that a melody duration is usable.
pub fn validate_duration(duration: f64) -> Result<(), ValidationError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidDuration,
            format!("duration must be finite and positive, got {}", duration),
            "duration",
        ));
    }
    if duration > MAX_MELODY_DURATION {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidDuration,
            format!(
                "duration must be at most {} seconds, got {}",
                MAX_MELODY_DURATION, duration
            ),
            "duration",
        ));
    }
    Ok(())
}

/// Parse seed text for the shell, normalizing out-of-range values.
pub fn parse_seed(text: &str) -> Result<u64, ValidationError> {
    crate::seed::normalize_seed(text).ok_or_else(|| {
        ValidationError::with_field(
            ErrorCode::InvalidSeed,
            format!("seed must be an integer, got '{}'", text),
            "seed",
        )
    })
}

/// Serde adapter accepting seeds as JSON numbers or decimal strings.
///
/// Clients holding 64-bit seeds often send them as strings to avoid float
/// precision loss; both forms wrap into `u64` instead of failing.
pub mod seed_serde {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    use crate::seed::{normalize_seed, seed_from_f64};

    pub fn serialize<S: Serializer>(seed: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(*seed)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(SeedVisitor)
    }

    struct SeedVisitor;

    impl<'de> Visitor<'de> for SeedVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer seed or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(v as u64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            Ok(seed_from_f64(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            normalize_seed(v).ok_or_else(|| E::custom(format!("invalid seed '{}'", v)))
        }
    }
}
