//! Tests for reproducible coordinate sampling

#[cfg(test)]
mod tests {
    use edgewalk::algorithm::sampler::CoordinateSampler;
    use edgewalk::spatial::Coordinate;
    use edgewalk::spatial::window::SearchWindow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests equal seeds reproduce equal draws
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = CoordinateSampler::seeded(42);
        let mut b = CoordinateSampler::new(StdRng::seed_from_u64(42));

        let draws_a: Vec<_> = (0..50).map(|_| a.sample_anywhere((30, 30))).collect();
        let draws_b: Vec<_> = (0..50).map(|_| b.sample_anywhere((30, 30))).collect();
        assert_eq!(draws_a, draws_b);
    }

    // Tests different seeds diverge
    // Verified by ignoring the seed in the constructor
    #[test]
    fn test_different_seeds_diverge() {
        let mut a = CoordinateSampler::seeded(1);
        let mut b = CoordinateSampler::seeded(2);

        let draws_a: Vec<_> = (0..50).map(|_| a.sample_anywhere((100, 100))).collect();
        let draws_b: Vec<_> = (0..50).map(|_| b.sample_anywhere((100, 100))).collect();
        assert_ne!(draws_a, draws_b);
    }

    // Tests local samples stay inside the clipped window
    // Verified by sampling radius + 1 around the center
    #[test]
    fn test_sample_within_stays_in_window() {
        let mut sampler = CoordinateSampler::seeded(7);
        let center = Coordinate::new(1, 18);

        for _ in 0..500 {
            let c = sampler
                .sample_within(center, 3, (20, 20))
                .expect("non-empty grid");
            assert!(c.row <= 4);
            assert!((15..=19).contains(&c.col));
        }
    }

    // Tests global samples cover the whole grid and stay in bounds
    // Verified by excluding the last row from the range
    #[test]
    fn test_sample_anywhere_covers_grid() {
        let mut sampler = CoordinateSampler::seeded(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..2000 {
            let c = sampler.sample_anywhere((4, 5)).expect("non-empty grid");
            assert!(c.row < 4 && c.col < 5);
            seen.insert(c);
        }
        assert_eq!(seen.len(), 20);
    }

    // Tests empty grids yield no coordinate
    // Verified by sampling from an inverted range
    #[test]
    fn test_empty_grid_yields_none() {
        let mut sampler = CoordinateSampler::seeded(0);
        assert!(sampler.sample_anywhere((0, 10)).is_none());
        assert!(sampler.sample_within(Coordinate::new(0, 0), 5, (10, 0)).is_none());
    }

    // Tests window sampling honors the inclusive ranges
    // Verified by sampling with exclusive upper bounds
    #[test]
    fn test_sample_window_inclusive() {
        let mut sampler = CoordinateSampler::seeded(11);
        let window = SearchWindow::around(Coordinate::new(5, 5), 1, (10, 10))
            .expect("non-empty grid");
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let c = sampler.sample_window(&window);
            assert!(window.contains(c));
            seen.insert(c);
        }
        assert_eq!(seen.len(), 9);
    }
}
