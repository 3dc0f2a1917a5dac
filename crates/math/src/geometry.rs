//! Pure geometry helpers over the vector types.
//!
//! Unlike the in-place methods on the vectors themselves (notably
//! [`Vec3::crs`](crate::Vec3::crs)), everything here returns a new value and
//! never mutates its inputs, so results are safe to use as temporaries.

use crate::{Vec2, Vec3, Vector};

/// Dot product of two 2D vectors.
pub fn dot2(v1: Vec2, v2: Vec2) -> f32 {
    v1.dot(&v2)
}

/// Dot product of two 3D vectors.
pub fn dot3(v1: Vec3, v2: Vec3) -> f32 {
    v1.dot(&v2)
}

/// Right-handed cross product, orthogonal to both inputs.
pub fn cross(v1: Vec3, v2: Vec3) -> Vec3 {
    Vec3::new(
        v1.y * v2.z - v1.z * v2.y,
        v1.z * v2.x - v1.x * v2.z,
        v1.x * v2.y - v1.y * v2.x,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot2_literals() {
        assert_eq!(dot2(Vec2::new(1.0, 5.0), Vec2::new(0.0, 1.0)), 5.0);
        assert_eq!(dot2(Vec2::ZERO, Vec2::ZERO), 0.0);
        assert_eq!(dot2(Vec2::new(61.0, 17.0), Vec2::new(15.0, 4.0)), 983.0);
        assert_eq!(dot2(Vec2::new(1.0, 1.0), Vec2::new(-1.0, 1.0)), 0.0);
    }

    #[test]
    fn dot3_literals() {
        assert_eq!(
            dot3(Vec3::new(61.0, 17.0, 0.0), Vec3::new(15.0, 4.0, 1.0)),
            983.0
        );
        assert_eq!(
            dot3(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)),
            1.0
        );
        assert_eq!(
            dot3(Vec3::new(-2.0, 3.0, 2.0), Vec3::new(6.0, 2.0, 3.0)),
            0.0
        );
    }

    #[test]
    fn cross_literals() {
        assert_eq!(
            cross(Vec3::new(1.0, 0.0, 2.0), Vec3::new(6.0, 1.0, 0.0)),
            Vec3::new(-2.0, 12.0, 1.0)
        );
        // Parallel vectors cross to zero; face-normal callers must guard
        // for this themselves.
        assert_eq!(
            cross(Vec3::new(1.0, 1.0, 1.0), Vec3::new(16.0, 16.0, 16.0)),
            Vec3::ZERO
        );
        assert_eq!(
            cross(Vec3::new(-2.0, 3.0, 2.0), Vec3::new(6.0, 2.0, 3.0)),
            Vec3::new(5.0, 18.0, -22.0)
        );
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(0.25, 4.0, -1.0);
        let n = cross(a, b);
        float_eq::assert_float_eq!(dot3(n, a), 0.0, abs <= 1e-4);
        float_eq::assert_float_eq!(dot3(n, b), 0.0, abs <= 1e-4);
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(cross(a, b), -cross(b, a));
    }

    #[test]
    fn cross_does_not_mutate_inputs() {
        let a = Vec3::new(1.0, 0.0, 2.0);
        let b = Vec3::new(6.0, 1.0, 0.0);
        let _ = cross(a, b);
        assert_eq!(a, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(b, Vec3::new(6.0, 1.0, 0.0));
    }
}
