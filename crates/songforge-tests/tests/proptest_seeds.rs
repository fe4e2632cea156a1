//! Property-based tests for seeds, PRNG output and boundary validation.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p songforge-tests --test proptest_seeds
//! ```

use proptest::prelude::*;

use songforge_backend_catalog::{generate_page, genres, roll_likes};
use songforge_spec::{
    item_seed, normalize_seed, page_seed, parse_seed, validate_avg_likes, ErrorCode,
    GenerationRequest, Locale, Mulberry32, MAX_PAGE_SIZE,
};

fn any_locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

// ============================================================================
// 1. PRNG and seed derivation
// ============================================================================

proptest! {
    /// Every draw lies in [0, 1).
    #[test]
    fn prng_draws_in_unit_interval(seed in any::<u32>()) {
        let mut rng = Mulberry32::new(seed);
        for _ in 0..64 {
            let v = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    /// Index draws stay in range for any length.
    #[test]
    fn prng_index_in_range(seed in any::<u32>(), len in 1usize..1000) {
        let mut rng = Mulberry32::new(seed);
        for _ in 0..16 {
            prop_assert!(rng.next_index(len) < len);
        }
    }

    /// Page seed is the low 32 bits of the wrapping 64-bit combination.
    #[test]
    fn page_seed_matches_formula(user_seed in any::<u64>(), page in any::<u64>()) {
        let combined = user_seed
            .wrapping_mul(1_103_515_245)
            .wrapping_add(page.wrapping_mul(12_345));
        prop_assert_eq!(page_seed(user_seed, page), combined as u32);
    }

    /// Item seeds are page seed plus slot, wrapping.
    #[test]
    fn item_seed_wraps(page in any::<u32>(), slot in 0u32..1000) {
        prop_assert_eq!(item_seed(page, slot), page.wrapping_add(slot));
    }

    /// Any decimal text is a seed; it wraps rather than failing.
    #[test]
    fn decimal_text_always_parses(digits in "[0-9]{1,60}", negative in any::<bool>()) {
        let text = if negative { format!("-{}", digits) } else { digits };
        prop_assert!(parse_seed(&text).is_ok());
    }

    /// In-range seeds round-trip through text.
    #[test]
    fn u64_text_round_trips(seed in any::<u64>()) {
        prop_assert_eq!(normalize_seed(&seed.to_string()), Some(seed));
    }

    /// Non-numeric text is rejected with the seed code.
    #[test]
    fn non_numeric_text_rejected(text in "[a-z ]{1,20}") {
        let err = parse_seed(&text).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::InvalidSeed);
    }
}

// ============================================================================
// 2. Page generation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pages have the requested size and consecutive indices.
    #[test]
    fn page_shape(
        locale in any_locale(),
        user_seed in any::<u64>(),
        page in 1u64..10_000,
        page_size in 0u32..40,
    ) {
        let songs = generate_page(locale, user_seed, page, page_size, 0.0);
        prop_assert_eq!(songs.len(), page_size as usize);
        let first = (page - 1) * u64::from(page_size) + 1;
        for (slot, song) in songs.iter().enumerate() {
            prop_assert_eq!(song.index, first + slot as u64);
        }
    }

    /// Genres always come from the locale's vocabulary.
    #[test]
    fn genres_in_vocabulary(locale in any_locale(), user_seed in any::<u64>(), page in 1u64..100) {
        let vocabulary = genres(locale);
        for song in generate_page(locale, user_seed, page, 10, 0.0) {
            prop_assert!(vocabulary.contains(&song.genre.as_str()));
        }
    }

    /// Same inputs, same page (likes pinned by avg 0).
    #[test]
    fn page_reproducible(locale in any_locale(), user_seed in any::<u64>(), page in 1u64..100) {
        prop_assert_eq!(
            generate_page(locale, user_seed, page, 5, 0.0),
            generate_page(locale, user_seed, page, 5, 0.0)
        );
    }
}

// ============================================================================
// 3. Likes and boundary validation
// ============================================================================

proptest! {
    /// Likes are floor(avg) or floor(avg) + 1.
    #[test]
    fn likes_bracket_average(avg in 0.0f64..10_000.0, seed in any::<u64>()) {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
        let likes = roll_likes(avg, &mut rng);
        let floor = avg.floor() as u64;
        prop_assert!(likes == floor || likes == floor + 1);
    }

    /// Negative averages are rejected.
    #[test]
    fn negative_average_rejected(avg in -1e9f64..-1e-9) {
        prop_assert!(validate_avg_likes(avg).is_err());
    }

    /// Requests inside the limits validate; page 0 never does.
    #[test]
    fn request_validation(
        user_seed in any::<u64>(),
        page in 0u64..1000,
        page_size in 0u32..2000,
        avg in 0.0f64..100.0,
    ) {
        let request = GenerationRequest::new(Locale::EnUs, user_seed, page, page_size, avg);
        let expected = page >= 1 && page_size >= 1 && page_size <= MAX_PAGE_SIZE;
        prop_assert_eq!(request.validate().is_ok(), expected);
    }
}
