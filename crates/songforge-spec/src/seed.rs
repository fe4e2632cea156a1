//! Seed derivation.
//!
//! A user supplies a 64-bit seed; each page gets a 32-bit page seed and each
//! slot on that page a 32-bit item seed:
//!
//! ```text
//! page_seed = low32((user_seed * 1103515245 + page * 12345) mod 2^64)
//! item_seed = (page_seed + slot) mod 2^32
//! ```
//!
//! All arithmetic is wrapping integer math. Floating point would silently drop
//! low bits for seeds at or above 2^53.

/// Multiplier applied to the user seed.
pub const SEED_MULTIPLIER: u64 = 1_103_515_245;

/// Multiplier applied to the page number.
pub const PAGE_MULTIPLIER: u64 = 12_345;

/// Combine a user seed and page number into the full 64-bit page state.
pub fn combine_seed(user_seed: u64, page: u64) -> u64 {
    user_seed
        .wrapping_mul(SEED_MULTIPLIER)
        .wrapping_add(page.wrapping_mul(PAGE_MULTIPLIER))
}

/// Derive the 32-bit seed for one page of results.
///
/// # Example
/// ```
/// use songforge_spec::seed::page_seed;
///
/// assert_eq!(page_seed(0, 1), 12345);
/// assert_eq!(page_seed(1, 0), 1103515245);
/// ```
pub fn page_seed(user_seed: u64, page: u64) -> u32 {
    combine_seed(user_seed, page) as u32
}

/// Derive the seed for the item at `slot` on a page.
pub fn item_seed(page_seed: u32, slot: u32) -> u32 {
    page_seed.wrapping_add(slot)
}

/// Parse a decimal seed string, wrapping out-of-range values into `u64`.
///
/// Accepts optional surrounding whitespace, a leading `+` or `-`, and
/// magnitudes up to 128 bits. Negative values wrap two's-complement style, so
/// `"-1"` becomes `u64::MAX`. Returns `None` only for text that is not a
/// number at all.
pub fn normalize_seed(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let (negative, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Accumulate mod 2^128 so arbitrarily long inputs still wrap.
    let magnitude = digits.bytes().fold(0u128, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u128::from(b - b'0'))
    });
    let wrapped = magnitude as u64;
    Some(if negative {
        wrapped.wrapping_neg()
    } else {
        wrapped
    })
}

/// Fold a seed given as a float (for example from a loosely typed client)
/// into `u64` by truncation, mapping non-finite values to 0.
pub fn seed_from_f64(value: f64) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc();
    if truncated < 0.0 {
        (truncated as i64) as u64
    } else {
        truncated as u64
    }
}
