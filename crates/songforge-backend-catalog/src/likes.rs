//! Like counts.
//!
//! Likes simulate live engagement and are deliberately drawn from an unseeded
//! source, so two identical page requests may report different counts. This
//! is the only non-reproducible field in a generated page.

use rand::Rng;

/// Rolls a like count around `avg_likes`.
///
/// Returns `floor(avg_likes)`, plus one with probability equal to the
/// fractional part. Non-positive or non-finite averages yield 0.
pub fn roll_likes<R: Rng>(avg_likes: f64, rng: &mut R) -> u64 {
    if !avg_likes.is_finite() || avg_likes <= 0.0 {
        return 0;
    }

    let whole = avg_likes.floor();
    let fraction = avg_likes - whole;
    let bump = u64::from(fraction > 0.0 && rng.gen::<f64>() < fraction);
    (whole as u64).saturating_add(bump)
}

/// Rolls a like count from the thread-local RNG.
pub fn live_likes(avg_likes: f64) -> u64 {
    roll_likes(avg_likes, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_zero_and_negative_average() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(roll_likes(0.0, &mut rng), 0);
        assert_eq!(roll_likes(-3.0, &mut rng), 0);
        assert_eq!(roll_likes(f64::NAN, &mut rng), 0);
        assert_eq!(roll_likes(f64::INFINITY, &mut rng), 0);
    }

    #[test]
    fn test_whole_average_is_exact() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(roll_likes(4.0, &mut rng), 4);
        }
    }

    #[test]
    fn test_fractional_average_stays_in_range() {
        let mut seen = [false; 2];
        for _ in 0..2000 {
            let likes = live_likes(2.5);
            assert!(likes == 2 || likes == 3, "likes out of range: {}", likes);
            seen[(likes - 2) as usize] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_mean_tracks_average() {
        let mut rng = Pcg32::seed_from_u64(3);
        let trials = 10_000;
        let total: u64 = (0..trials).map(|_| roll_likes(0.3, &mut rng)).sum();
        let mean = total as f64 / trials as f64;
        assert!((mean - 0.3).abs() < 0.05, "mean {}", mean);
    }
}
