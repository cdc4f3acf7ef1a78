//! 3x3 matrix (single precision) for 2D homogeneous transforms.

use crate::vec::Vec2;

/// Flattened offset of element `(row, col)` in column-major storage.
#[inline]
const fn idx(row: usize, col: usize) -> usize {
    row + col * 3
}

/// 3x3 column-major matrix over homogeneous 3-vectors.
///
/// The 2D counterpart of [`crate::Mat4`]: element `(row, col)` sits at
/// flattened index `row + col * 3`, the translation column at slots 6..9.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Mat3(pub [f32; 9]);

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = {
        let mut m = [0.0; 9];
        m[idx(0, 0)] = 1.0;
        m[idx(1, 1)] = 1.0;
        m[idx(2, 2)] = 1.0;
        Self(m)
    };

    /// Zero matrix.
    pub const ZERO: Self = Self([0.0; 9]);

    /// Create a new matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(arr: &[f32; 9]) -> Self {
        Self(*arr)
    }

    /// Convert the matrix to a column-major array.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 9] {
        self.0
    }

    /// Element at `(row, col)`.
    #[inline]
    pub const fn element(&self, row: usize, col: usize) -> f32 {
        self.0[idx(row, col)]
    }

    /// Translation matrix moving points by `v`.
    #[inline]
    pub const fn from_translation(v: Vec2) -> Self {
        let mut m = Self::IDENTITY.0;
        m[idx(0, 2)] = v.x;
        m[idx(1, 2)] = v.y;
        Self(m)
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY.0;
        m[idx(0, 0)] = c;
        m[idx(1, 0)] = s;
        m[idx(0, 1)] = -s;
        m[idx(1, 1)] = c;
        Self(m)
    }

    /// Non-uniform scale matrix with `v` on the diagonal.
    #[inline]
    pub const fn from_scale(v: Vec2) -> Self {
        let mut m = Self::IDENTITY.0;
        m[idx(0, 0)] = v.x;
        m[idx(1, 1)] = v.y;
        Self(m)
    }

    /// Matrix product `self * rhs` written into a caller-owned destination.
    pub fn mul_into(&self, rhs: &Self, dst: &mut Self) {
        for col in 0..3 {
            for row in 0..3 {
                let mut acc = 0.0;
                for k in 0..3 {
                    acc += self.0[idx(row, k)] * rhs.0[idx(k, col)];
                }
                dst.0[idx(row, col)] = acc;
            }
        }
    }

    /// Transpose of the matrix.
    pub fn transpose(self) -> Self {
        let mut dst = Self::ZERO;
        for col in 0..3 {
            for row in 0..3 {
                dst.0[idx(col, row)] = self.0[idx(row, col)];
            }
        }
        dst
    }

    /// Transpose the matrix in place by swapping symmetric pairs.
    pub fn transpose_in_place(&mut self) {
        for col in 1..3 {
            for row in 0..col {
                self.0.swap(idx(row, col), idx(col, row));
            }
        }
    }

    /// Determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        let (a00, a01, a02) = (m[0], m[1], m[2]);
        let (a10, a11, a12) = (m[3], m[4], m[5]);
        let (a20, a21, a22) = (m[6], m[7], m[8]);

        a00 * (a22 * a11 - a12 * a21) + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Inverse of the matrix, written into a caller-owned destination.
    ///
    /// Same singular-input contract as [`crate::Mat4::inverse_into`]: a zero
    /// determinant yields non-finite components, never an error.
    pub fn inverse_into(&self, dst: &mut Self) {
        let m = &self.0;
        let (a00, a01, a02) = (m[0], m[1], m[2]);
        let (a10, a11, a12) = (m[3], m[4], m[5]);
        let (a20, a21, a22) = (m[6], m[7], m[8]);

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        let inv_det = 1.0 / det;

        dst.0[0] = b01 * inv_det;
        dst.0[1] = (-a22 * a01 + a02 * a21) * inv_det;
        dst.0[2] = (a12 * a01 - a02 * a11) * inv_det;
        dst.0[3] = b11 * inv_det;
        dst.0[4] = (a22 * a00 - a02 * a20) * inv_det;
        dst.0[5] = (-a12 * a00 + a02 * a10) * inv_det;
        dst.0[6] = b21 * inv_det;
        dst.0[7] = (-a21 * a00 + a01 * a20) * inv_det;
        dst.0[8] = (a11 * a00 - a01 * a10) * inv_det;
    }

    /// Inverse of the matrix.
    #[inline]
    pub fn inverse(self) -> Self {
        let mut dst = Self::ZERO;
        self.inverse_into(&mut dst);
        dst
    }

    /// Check if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }

    /// Transform a homogeneous 3-vector.
    pub fn mul_vec3(&self, v: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            *out_row = self.0[idx(row, 0)] * v[0]
                + self.0[idx(row, 1)] * v[1]
                + self.0[idx(row, 2)] * v[2];
        }
        out
    }

    /// Transform a 2D point (`w = 1`).
    #[inline]
    pub fn transform_point2(&self, p: Vec2) -> Vec2 {
        let [x, y, _] = self.mul_vec3([p.x, p.y, 1.0]);
        Vec2::new(x, y)
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut dst = Self::ZERO;
        self.mul_into(&rhs, &mut dst);
        dst
    }
}

impl std::ops::Deref for Mat3 {
    type Target = [f32; 9];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Mat3 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(arr: [f32; 9]) -> Self {
        Self(arr)
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.0
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Mat3 {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f32 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| <f32 as approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Mat3 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f32 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| <f32 as approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative))
    }
}
