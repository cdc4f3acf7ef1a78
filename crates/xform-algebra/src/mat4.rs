//! 4x4 matrix (single precision) for 3D homogeneous transforms.

use crate::vec::Vec3;

/// Flattened offset of element `(row, col)` in column-major storage.
///
/// Every element access in this module goes through this helper; the
/// flattening convention lives in exactly one place.
#[inline]
const fn idx(row: usize, col: usize) -> usize {
    row + col * 4
}

/// 4x4 column-major matrix over homogeneous 4-vectors.
///
/// Stored as 16 floats with element `(row, col)` at flattened index
/// `row + col * 4`, so the translation column occupies slots 12..15 and the
/// array layout can be uploaded directly as a shader uniform.
///
/// Composition order follows the usual convention: in `t * r * s` the
/// rightmost factor applies first to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    /// Identity matrix.
    pub const IDENTITY: Self = {
        let mut m = [0.0; 16];
        m[idx(0, 0)] = 1.0;
        m[idx(1, 1)] = 1.0;
        m[idx(2, 2)] = 1.0;
        m[idx(3, 3)] = 1.0;
        Self(m)
    };

    /// Zero matrix.
    pub const ZERO: Self = Self([0.0; 16]);

    /// Create a new matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(arr: &[f32; 16]) -> Self {
        Self(*arr)
    }

    /// Convert the matrix to a column-major array.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.0
    }

    /// Element at `(row, col)`.
    #[inline]
    pub const fn element(&self, row: usize, col: usize) -> f32 {
        self.0[idx(row, col)]
    }

    /// Translation matrix moving points by `v`.
    ///
    /// `v` occupies the last column, so `m.mul_vec4([x, y, z, 1])` yields
    /// the translated point.
    #[inline]
    pub const fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY.0;
        m[idx(0, 3)] = v.x;
        m[idx(1, 3)] = v.y;
        m[idx(2, 3)] = v.z;
        Self(m)
    }

    /// Right-handed rotation about the x axis by `angle` radians.
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY.0;
        m[idx(1, 1)] = c;
        m[idx(2, 1)] = s;
        m[idx(1, 2)] = -s;
        m[idx(2, 2)] = c;
        Self(m)
    }

    /// Right-handed rotation about the y axis by `angle` radians.
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY.0;
        m[idx(0, 0)] = c;
        m[idx(2, 0)] = -s;
        m[idx(0, 2)] = s;
        m[idx(2, 2)] = c;
        Self(m)
    }

    /// Right-handed rotation about the z axis by `angle` radians.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY.0;
        m[idx(0, 0)] = c;
        m[idx(1, 0)] = s;
        m[idx(0, 1)] = -s;
        m[idx(1, 1)] = c;
        Self(m)
    }

    /// Non-uniform scale matrix with `v` on the diagonal.
    ///
    /// Zero components collapse that axis; the matrix becomes singular and
    /// its inverse is non-finite.
    #[inline]
    pub const fn from_scale(v: Vec3) -> Self {
        let mut m = Self::IDENTITY.0;
        m[idx(0, 0)] = v.x;
        m[idx(1, 1)] = v.y;
        m[idx(2, 2)] = v.z;
        Self(m)
    }

    /// Model matrix from translation, xyz Euler angles (radians) and scale.
    ///
    /// Composes `T * Rz * Ry * Rx * S`: a point is scaled first, rotated
    /// about x, then y, then z, and translated last.
    ///
    /// Example:
    ///
    /// ```
    /// use xform_algebra::{Mat4, Vec3};
    ///
    /// let model = Mat4::from_translation_euler_scale(
    ///     Vec3::new(5.0, 0.0, 0.0),
    ///     Vec3::ZERO,
    ///     Vec3::new(2.0, 2.0, 2.0),
    /// );
    /// let p = model.mul_vec4([1.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(p, [7.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn from_translation_euler_scale(translation: Vec3, euler: Vec3, scale: Vec3) -> Self {
        let m = Self::from_rotation_x(euler.x) * Self::from_scale(scale);
        let m = Self::from_rotation_y(euler.y) * m;
        let m = Self::from_rotation_z(euler.z) * m;
        Self::from_translation(translation) * m
    }

    /// Matrix product `self * rhs` written into a caller-owned destination.
    ///
    /// The borrow rules rule out aliasing between `dst` and the operands.
    pub fn mul_into(&self, rhs: &Self, dst: &mut Self) {
        for col in 0..4 {
            for row in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.0[idx(row, k)] * rhs.0[idx(k, col)];
                }
                dst.0[idx(row, col)] = acc;
            }
        }
    }

    /// Transpose of the matrix.
    pub fn transpose(self) -> Self {
        let mut dst = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                dst.0[idx(col, row)] = self.0[idx(row, col)];
            }
        }
        dst
    }

    /// Transpose the matrix in place.
    ///
    /// Swaps symmetric off-diagonal pairs, so no element is read after it
    /// has been overwritten.
    pub fn transpose_in_place(&mut self) {
        for col in 1..4 {
            for row in 0..col {
                self.0.swap(idx(row, col), idx(col, row));
            }
        }
    }

    /// Determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
        let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
        let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
        let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Inverse of the matrix, written into a caller-owned destination.
    ///
    /// Cofactor expansion scaled by the reciprocal determinant. A singular
    /// input (zero determinant) produces non-finite components rather than
    /// an error; callers in singularity-prone paths must check
    /// [`Mat4::is_finite`] before using the result.
    pub fn inverse_into(&self, dst: &mut Self) {
        let m = &self.0;
        let (a00, a01, a02, a03) = (m[0], m[1], m[2], m[3]);
        let (a10, a11, a12, a13) = (m[4], m[5], m[6], m[7]);
        let (a20, a21, a22, a23) = (m[8], m[9], m[10], m[11]);
        let (a30, a31, a32, a33) = (m[12], m[13], m[14], m[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        // 1/0 propagates to infinity, by contract
        let inv_det = 1.0 / det;

        dst.0[0] = (a11 * b11 - a12 * b10 + a13 * b09) * inv_det;
        dst.0[1] = (a02 * b10 - a01 * b11 - a03 * b09) * inv_det;
        dst.0[2] = (a31 * b05 - a32 * b04 + a33 * b03) * inv_det;
        dst.0[3] = (a22 * b04 - a21 * b05 - a23 * b03) * inv_det;
        dst.0[4] = (a12 * b08 - a10 * b11 - a13 * b07) * inv_det;
        dst.0[5] = (a00 * b11 - a02 * b08 + a03 * b07) * inv_det;
        dst.0[6] = (a32 * b02 - a30 * b05 - a33 * b01) * inv_det;
        dst.0[7] = (a20 * b05 - a22 * b02 + a23 * b01) * inv_det;
        dst.0[8] = (a10 * b10 - a11 * b08 + a13 * b06) * inv_det;
        dst.0[9] = (a01 * b08 - a00 * b10 - a03 * b06) * inv_det;
        dst.0[10] = (a30 * b04 - a31 * b02 + a33 * b00) * inv_det;
        dst.0[11] = (a21 * b02 - a20 * b04 - a23 * b00) * inv_det;
        dst.0[12] = (a11 * b07 - a10 * b09 - a12 * b06) * inv_det;
        dst.0[13] = (a00 * b09 - a01 * b07 + a02 * b06) * inv_det;
        dst.0[14] = (a31 * b01 - a30 * b03 - a32 * b00) * inv_det;
        dst.0[15] = (a20 * b03 - a21 * b01 + a22 * b00) * inv_det;
    }

    /// Inverse of the matrix.
    ///
    /// See [`Mat4::inverse_into`] for the singular-input contract.
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

    /// Transform a homogeneous 4-vector.
    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            *out_row = self.0[idx(row, 0)] * v[0]
                + self.0[idx(row, 1)] * v[1]
                + self.0[idx(row, 2)] * v[2]
                + self.0[idx(row, 3)] * v[3];
        }
        out
    }

    /// Transform a point (`w = 1`), without perspective divide.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let [x, y, z, _] = self.mul_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transform a point (`w = 1`) and apply the perspective divide.
    ///
    /// A projective transform with `w = 0` at this point divides to
    /// non-finite components, consistent with the numeric-propagation
    /// contract.
    #[inline]
    pub fn project_point3(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.mul_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x / w, y / w, z / w)
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut dst = Self::ZERO;
        self.mul_into(&rhs, &mut dst);
        dst
    }
}

impl std::ops::Deref for Mat4 {
    type Target = [f32; 16];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Mat4 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(arr: [f32; 16]) -> Self {
        Self(arr)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.0
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Mat4 {
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
impl approx::RelativeEq for Mat4 {
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
