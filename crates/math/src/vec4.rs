use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Vec2, Vec3, Vector};

/// A mutable four-dimensional float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

static_assertions::assert_eq_size!(Vec4, [f32; 4]);
static_assertions::assert_eq_align!(Vec4, f32);

impl Vec4 {
    pub const ZERO: Vec4 = Vec4 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };
    pub const UNIT_X: Vec4 = Vec4 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };
    pub const UNIT_Y: Vec4 = Vec4 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
        w: 0.0,
    };
    pub const UNIT_Z: Vec4 = Vec4 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        w: 0.0,
    };
    pub const UNIT_W: Vec4 = Vec4 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops the w component, producing a 3D vector.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component-wise (Hadamard) product.
    pub fn mul_element_wise(self, v: Vec4) -> Vec4 {
        Vec4::new(self.x * v.x, self.y * v.y, self.z * v.z, self.w * v.w)
    }

    /// Component-wise quotient.
    pub fn div_element_wise(self, v: Vec4) -> Vec4 {
        Vec4::new(self.x / v.x, self.y / v.y, self.z / v.z, self.w / v.w)
    }

    /// Adds `v` to every component.
    pub fn add_scalar(self, v: f32) -> Vec4 {
        Vec4::new(self.x + v, self.y + v, self.z + v, self.w + v)
    }

    /// Subtracts `v` from every component.
    pub fn sub_scalar(self, v: f32) -> Vec4 {
        Vec4::new(self.x - v, self.y - v, self.z - v, self.w - v)
    }
}

impl Vector for Vec4 {
    type Array = [f32; 4];

    fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn eps_eq(&self, v: &Self, epsilon: f32) -> bool {
        float_eq::float_eq!(self.x, v.x, abs <= epsilon)
            && float_eq::float_eq!(self.y, v.y, abs <= epsilon)
            && float_eq::float_eq!(self.z, v.z, abs <= epsilon)
            && float_eq::float_eq!(self.w, v.w, abs <= epsilon)
    }

    fn len(&self) -> f32 {
        self.len2().sqrt()
    }

    fn len2(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    fn nor(&mut self) {
        if self.is_zero() {
            return;
        }
        let len = self.len();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self.w /= len;
    }

    fn limit(&mut self, limit: f32) {
        let len2 = self.len2();
        if len2 > limit * limit {
            let alpha = limit / len2.sqrt();
            self.x *= alpha;
            self.y *= alpha;
            self.z *= alpha;
            self.w *= alpha;
        }
    }

    fn limit2(&mut self, limit2: f32) {
        let len2 = self.len2();
        if len2 > limit2 {
            let alpha = (limit2 / len2).sqrt();
            self.x *= alpha;
            self.y *= alpha;
            self.z *= alpha;
            self.w *= alpha;
        }
    }

    fn set_length(&mut self, length: f32) {
        let alpha = length / self.len();
        self.x *= alpha;
        self.y *= alpha;
        self.z *= alpha;
        self.w *= alpha;
    }

    fn set_length2(&mut self, length2: f32) {
        let alpha = (length2 / self.len2()).sqrt();
        self.x *= alpha;
        self.y *= alpha;
        self.z *= alpha;
        self.w *= alpha;
    }

    fn clamp_length(&mut self, min_length: f32, max_length: f32) {
        let len2 = self.len2();
        if len2 == 0.0 {
            return;
        }

        let max2 = max_length * max_length;
        if len2 > max2 {
            let alpha = (max2 / len2).sqrt();
            self.x *= alpha;
            self.y *= alpha;
            self.z *= alpha;
            self.w *= alpha;
            return;
        }

        let min2 = min_length * min_length;
        if len2 < min2 {
            let alpha = (min2 / len2).sqrt();
            self.x *= alpha;
            self.y *= alpha;
            self.z *= alpha;
            self.w *= alpha;
        }
    }

    fn dot(&self, v: &Self) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z + self.w * v.w
    }

    fn dst(&self, v: &Self) -> f32 {
        self.dst2(v).sqrt()
    }

    fn dst2(&self, v: &Self) -> f32 {
        let a = v.x - self.x;
        let b = v.y - self.y;
        let c = v.z - self.z;
        let d = v.w - self.w;
        a * a + b * b + c * c + d * d
    }

    fn lerp(&mut self, v: &Self, alpha: f32) {
        self.x += alpha * (v.x - self.x);
        self.y += alpha * (v.y - self.y);
        self.z += alpha * (v.z - self.z);
        self.w += alpha * (v.w - self.w);
    }

    fn add_mul(&mut self, v: &Self, scalar: f32) {
        self.x += v.x * scalar;
        self.y += v.y * scalar;
        self.z += v.z * scalar;
        self.w += v.w * scalar;
    }

    fn add_mul_v(&mut self, v: &Self, v2: &Self) {
        self.x += v.x * v2.x;
        self.y += v.y * v2.y;
        self.z += v.z * v2.z;
        self.w += v.w * v2.w;
    }

    // Ratio comparison; zero components of `self` are undefined here, same
    // as the 3D variant.
    fn is_on_line(&self, v: &Self) -> bool {
        let a = v.x / self.x;
        let b = v.y / self.y;
        let c = v.z / self.z;
        let d = v.w / self.w;
        a == b && b == c && c == d && a == d
    }

    fn is_on_line_eps(&self, v: &Self, epsilon: f32) -> bool {
        let a = v.x / self.x;
        let b = v.y / self.y;
        let c = v.z / self.z;
        let d = v.w / self.w;
        (a - b).abs() <= epsilon
            && (b - c).abs() <= epsilon
            && (c - d).abs() <= epsilon
            && (a - d).abs() <= epsilon
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v4f(x={}, y={}, z={}, w={})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(values: [f32; 4]) -> Self {
        Vec4::new(values[0], values[1], values[2], values[3])
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

/// Zero-pads the z and w components.
impl From<Vec2> for Vec4 {
    fn from(v: Vec2) -> Self {
        Vec4::new(v.x, v.y, 0.0, 0.0)
    }
}

/// Zero-pads the w component.
impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        Vec4::new(v.x, v.y, v.z, 0.0)
    }
}

impl Add for Vec4 {
    type Output = Vec4;

    fn add(self, v: Vec4) -> Vec4 {
        Vec4::new(self.x + v.x, self.y + v.y, self.z + v.z, self.w + v.w)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, v: Vec4) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self.w += v.w;
    }
}

impl Sub for Vec4 {
    type Output = Vec4;

    fn sub(self, v: Vec4) -> Vec4 {
        Vec4::new(self.x - v.x, self.y - v.y, self.z - v.z, self.w - v.w)
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, v: Vec4) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self.w -= v.w;
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Vec4 {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, scalar: f32) -> Vec4 {
        Vec4::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, scalar: f32) -> Vec4 {
        Vec4::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self.w /= scalar;
    }
}
