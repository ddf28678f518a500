//! Uniform draws over the session's ChaCha stream.

use rand_chacha::rand_core::Rng;

/// Uniform value in `min_value..=max_value`.
pub(crate) fn roll_range<R: Rng>(rng: &mut R, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as usize
}

/// Uniform value in `0..upper`; `upper` must be positive.
pub(crate) fn roll_below<R: Rng>(rng: &mut R, upper: usize) -> usize {
    debug_assert!(upper > 0);
    (rng.next_u64() % upper as u64) as usize
}

pub(crate) fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.next_u64() >> 63 == 0
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn roll_range_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for _ in 0..500 {
            let value = roll_range(&mut rng, 3, 8);
            assert!((3..=8).contains(&value));
        }
    }

    #[test]
    fn roll_range_reaches_both_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let draws: Vec<usize> = (0..500).map(|_| roll_range(&mut rng, 5, 10)).collect();
        assert!(draws.contains(&5));
        assert!(draws.contains(&10));
    }

    #[test]
    fn roll_below_excludes_upper_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            assert!(roll_below(&mut rng, 4) < 4);
        }
    }

    #[test]
    fn coin_flip_produces_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(2026);
        let heads = (0..200).filter(|_| coin_flip(&mut rng)).count();
        assert!(heads > 50 && heads < 150, "coin looks biased: {heads}/200");
    }
}
