//! Tests for displacement magnitude, normalization and cosine similarity

#[cfg(test)]
mod tests {
    use edgewalk::math::vector::Displacement;

    // Tests Euclidean magnitude on a 3-4-5 triangle
    // Verified by summing absolute components instead
    #[test]
    fn test_magnitude() {
        let d = Displacement::new(3.0, -4.0);
        assert!((d.magnitude() - 5.0).abs() < 1e-12);
    }

    // Tests normalization yields unit length and keeps direction
    // Verified by dividing by squared magnitude
    #[test]
    fn test_normalized_is_unit_length() {
        let unit = Displacement::new(0.0, 7.0)
            .normalized()
            .expect("non-zero vector normalizes");
        assert!((unit.magnitude() - 1.0).abs() < 1e-12);
        assert!(unit.d_row.abs() < 1e-12);
        assert!((unit.d_col - 1.0).abs() < 1e-12);
    }

    // Tests zero vectors have no direction
    // Verified by returning the zero vector unchanged
    #[test]
    fn test_zero_vector_has_no_direction() {
        let zero = Displacement::new(0.0, 0.0);
        assert!(zero.is_zero());
        assert!(zero.normalized().is_none());
        assert!(zero.cosine_with(&Displacement::new(1.0, 0.0)).is_none());
        assert!(Displacement::new(1.0, 0.0).cosine_with(&zero).is_none());
    }

    // Tests dot product on perpendicular and parallel vectors
    // Verified by swapping components in the product
    #[test]
    fn test_dot_product() {
        let a = Displacement::new(1.0, 2.0);
        let b = Displacement::new(-2.0, 1.0);
        assert!(a.dot(&b).abs() < 1e-12);
        assert!((a.dot(&a) - 5.0).abs() < 1e-12);
    }

    // Tests cosine similarity for forward, reverse and diagonal turns
    // Verified by omitting normalization of the second vector
    #[test]
    fn test_cosine_with() {
        let east = Displacement::new(0.0, 2.0);
        let west = Displacement::new(0.0, -5.0);
        let south_east = Displacement::new(3.0, 3.0);

        let forward = east.cosine_with(&Displacement::new(0.0, 9.0)).unwrap_or(0.0);
        let reverse = east.cosine_with(&west).unwrap_or(0.0);
        let diagonal = east.cosine_with(&south_east).unwrap_or(0.0);

        assert!((forward - 1.0).abs() < 1e-12);
        assert!((reverse + 1.0).abs() < 1e-12);
        assert!((diagonal - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
