use rand::Rng;

/// Samples a float uniformly from `[min, max]`.
///
/// Bounds given in the wrong order are swapped; an empty range returns `min`.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };

    if low == high {
        return low;
    }

    rng.gen_range(low..=high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value = random_in_range(&mut rng, -257.5, -107.5);
            assert!((-257.5..=-107.5).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_degenerate_and_swapped_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_in_range(&mut rng, 3.0, 3.0), 3.0);

        let value = random_in_range(&mut rng, 10.0, 5.0);
        assert!((5.0..=10.0).contains(&value));
    }
}
