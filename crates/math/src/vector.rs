/// Operations shared by the float vectors of every arity.
///
/// All comparisons use plain `f32` equality unless an `_eps` variant is
/// called; epsilon tests are absolute-difference tests, not relative ones.
/// In-place operations take `&mut self` and return nothing. Where a caller
/// wants the untouched value as well, the types are `Copy`.
pub trait Vector: Copy + PartialEq + Default {
    /// Fixed-size float array matching this vector's dimension.
    type Array: AsRef<[f32]>;

    /// The components of this vector, in x, y, z, w order.
    fn to_array(&self) -> Self::Array;

    /// Whether every component of `v` is within `epsilon` of this vector's.
    fn eps_eq(&self, v: &Self, epsilon: f32) -> bool;

    /// The Euclidean length of this vector.
    fn len(&self) -> f32;

    /// The squared length of this vector.
    ///
    /// Avoids the square root; prefer over [`len`](Vector::len) when only
    /// comparing magnitudes.
    fn len2(&self) -> f32;

    /// Normalizes this vector in place.
    ///
    /// A vector whose every component is exactly zero is left unchanged. A
    /// non-zero vector whose length rounds to zero is not guarded and will
    /// produce non-finite components.
    fn nor(&mut self);

    /// Caps the length of this vector at `limit`.
    fn limit(&mut self, limit: f32);

    /// Caps the squared length of this vector at `limit2`.
    fn limit2(&mut self, limit2: f32);

    /// Rescales this vector to the given length.
    ///
    /// Precondition: the current vector is non-zero. A zero vector produces
    /// NaN components; this is not checked at runtime.
    fn set_length(&mut self, length: f32);

    /// Rescales this vector to the given squared length.
    ///
    /// Same zero-vector precondition as [`set_length`](Vector::set_length).
    fn set_length2(&mut self, length2: f32);

    /// Clamps the length of this vector between `min_length` and
    /// `max_length`. A zero vector is left unchanged.
    fn clamp_length(&mut self, min_length: f32, max_length: f32);

    /// The dot product of this vector and `v`.
    fn dot(&self, v: &Self) -> f32;

    /// The distance from this vector to `v`.
    fn dst(&self, v: &Self) -> f32;

    /// The squared distance from this vector to `v`.
    fn dst2(&self, v: &Self) -> f32;

    /// Linearly interpolates this vector towards `v` in place:
    /// `self += alpha * (v - self)`.
    fn lerp(&mut self, v: &Self, alpha: f32);

    /// Linear interpolation between `v1` and `v2` without mutating either.
    fn lerped(v1: Self, v2: Self, alpha: f32) -> Self {
        let mut out = v1;
        out.lerp(&v2, alpha);
        out
    }

    /// Scales `v` by `scalar` and adds it to this vector in place.
    fn add_mul(&mut self, v: &Self, scalar: f32);

    /// Multiplies `v` and `v2` component-wise and adds the result to this
    /// vector in place.
    fn add_mul_v(&mut self, v: &Self, v2: &Self);

    /// Whether this vector and `v` are parallel, in either direction.
    fn is_on_line(&self, v: &Self) -> bool;

    /// Approximate [`is_on_line`](Vector::is_on_line).
    fn is_on_line_eps(&self, v: &Self, epsilon: f32) -> bool;

    /// Whether this vector and `v` are parallel and point the same way.
    fn is_collinear(&self, v: &Self) -> bool {
        self.is_on_line(v) && self.has_same_direction(v)
    }

    /// Approximate [`is_collinear`](Vector::is_collinear).
    fn is_collinear_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.is_on_line_eps(v, epsilon) && self.has_same_direction(v)
    }

    /// Whether this vector and `v` are parallel and point opposite ways.
    fn is_collinear_opposite(&self, v: &Self) -> bool {
        self.is_on_line(v) && self.has_opposite_direction(v)
    }

    /// Approximate [`is_collinear_opposite`](Vector::is_collinear_opposite).
    fn is_collinear_opposite_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.is_on_line_eps(v, epsilon) && self.has_opposite_direction(v)
    }

    /// Whether the dot product with `v` is exactly zero.
    fn is_orthogonal(&self, v: &Self) -> bool {
        self.dot(v) == 0.0
    }

    /// Whether the dot product with `v` is within `epsilon` of zero.
    fn is_orthogonal_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.dot(v).abs() < epsilon
    }

    /// Whether the dot product with `v` is positive.
    fn has_same_direction(&self, v: &Self) -> bool {
        self.dot(v) > 0.0
    }

    /// Whether the dot product with `v` is negative.
    fn has_opposite_direction(&self, v: &Self) -> bool {
        self.dot(v) < 0.0
    }

    /// Whether this vector's squared length is exactly one.
    fn is_unit(&self) -> bool {
        self.len2() == 1.0
    }

    /// Whether every component of this vector is exactly zero.
    fn is_zero(&self) -> bool;

    /// Sets every component of this vector to zero.
    fn set_zero(&mut self) {
        *self = Self::default();
    }
}
