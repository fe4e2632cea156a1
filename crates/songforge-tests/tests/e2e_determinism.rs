//! Determinism tests for every generator.
//!
//! Each generator is run several times with the same inputs and the outputs
//! are compared byte for byte.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p songforge-tests --test e2e_determinism
//! ```

use songforge_spec::Locale;
use songforge_tests::fixtures::{
    cover_plan_bytes, cover_png, melody_bytes, page_bytes, preview_wav, review_bytes,
    SAMPLE_SEEDS,
};
use songforge_tests::{assert_deterministic, compute_hash, verify_determinism};

#[test]
fn test_pages_deterministic_across_locales_and_seeds() {
    for locale in Locale::ALL {
        for seed in SAMPLE_SEEDS {
            let result = verify_determinism(|| page_bytes(locale, seed, 3, 20), 3);
            assert!(
                result.is_deterministic,
                "page not deterministic for {} seed {}: {:?}",
                locale, seed, result.diff_info
            );
            assert!(result.output_size > 0);
        }
    }
}

#[test]
fn test_reviews_deterministic() {
    for locale in Locale::ALL {
        assert_deterministic(3, || review_bytes(locale, 123_456));
    }
}

#[test]
fn test_cover_plan_deterministic() {
    assert_deterministic(3, || cover_plan_bytes(42));
}

#[test]
fn test_cover_png_byte_identical() {
    let result = verify_determinism(|| cover_png("A", "B", 42).unwrap(), 3);
    result.assert_deterministic();
    assert!(result.output_size > 1000);
}

#[test]
fn test_melody_deterministic() {
    assert_deterministic(3, || melody_bytes(42));
}

#[test]
fn test_melody_preview_byte_identical() {
    assert_deterministic(2, || preview_wav(42).unwrap());
}

#[test]
fn test_page_hash_stable_between_calls() {
    let a = compute_hash(&page_bytes(Locale::DeDe, 42, 3, 20));
    let b = compute_hash(&page_bytes(Locale::DeDe, 42, 3, 20));
    assert_eq!(a, b);
}

#[test]
fn test_threads_agree() {
    let expected = page_bytes(Locale::UkUa, 7, 2, 50);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| page_bytes(Locale::UkUa, 7, 2, 50)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
