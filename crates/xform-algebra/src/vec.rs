//! Macro-defined fixed-length vector types.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(
            #[doc = concat!("The `", stringify!($field), "` component.")]
            pub $field: f32
            ),+
        }

        impl $name {
            /// Create a new vector from its components.
            ///
            /// No validation is performed; non-finite components are accepted
            /// and propagate through later operations.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub const fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub const fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0),+
            };

            /// Euclidean length (magnitude) of the vector.
            ///
            /// NaN components propagate; the zero vector has length 0.
            #[inline]
            pub fn length(self) -> f32 {
                ($(self.$field * self.$field +)+ 0.0).sqrt()
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                $(self.$field * rhs.$field +)+ 0.0
            }

            /// Normalize the vector to unit length.
            ///
            /// Lengths at or below `1e-5` (the zero vector, tiny vectors
            /// whose squared components underflow to subnormals, NaN
            /// components) return the zero vector, not NaN. `length` does
            /// not share this fallback.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len > 1e-5 {
                    Self { $($field: self.$field / len),+ }
                } else {
                    Self::ZERO
                }
            }

            /// Check if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$field.is_finite())&&+
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(<f32 as approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(<f32 as approx::RelativeEq>::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name { $($field: self * rhs.$field),+ }
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

define_vector_type!(
    /// 2-component single precision vector.
    Vec2,
    [f32; 2],
    [x, y]
);

define_vector_type!(
    /// 3-component single precision vector.
    Vec3,
    [f32; 3],
    [x, y, z]
);

impl Vec3 {
    /// Cross product between two vectors.
    ///
    /// Parallel (and anti-parallel) inputs yield the zero vector.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_length_3_4_5() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_length_zero_vector() {
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_length_nan_propagates() {
        let v = Vec3::new(f32::NAN, 3.0, 4.0);
        assert!(v.length().is_nan());
    }

    #[test]
    fn test_normalize_3_4() {
        let n = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(n.x, 0.6, epsilon = EPS);
        assert_relative_eq!(n.y, 0.8, epsilon = EPS);
        assert_relative_eq!(n.z, 0.0, epsilon = EPS);
        assert_relative_eq!(n.length(), 1.0, epsilon = EPS);
    }

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_tiny_vector_is_zero() {
        // 1e-20 squared underflows to the subnormal range where the f32
        // length is too noisy to divide by; the length guard maps it to zero
        assert_eq!(Vec3::new(1e-20, 0.0, 0.0).normalize(), Vec3::ZERO);
        assert_eq!(Vec2::new(0.0, -1e-20).normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_just_above_guard() {
        let n = Vec3::new(2e-5, 0.0, 0.0).normalize();
        assert_relative_eq!(n.x, 1.0, epsilon = EPS);
        assert_relative_eq!(n.length(), 1.0, epsilon = EPS);
    }

    #[test]
    fn test_normalize_infinite_vector() {
        // inf / inf divides to NaN; callers detect this with is_finite().
        let n = Vec3::new(f32::INFINITY, 0.0, 0.0).normalize();
        assert!(n.x.is_nan());
        assert!(!n.is_finite());
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_dot_opposite_units() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(-1.0, 0.0, 0.0);
        assert_eq!(a.dot(b), -1.0);
    }

    #[test]
    fn test_cross_i_j_is_k() {
        let i = Vec3::new(1.0, 0.0, 0.0);
        let j = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(i.cross(j), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cross_parallel_is_zero() {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(4.0, 6.0, 8.0);
        assert_eq!(a.cross(b), Vec3::ZERO);
        assert_eq!(a.cross(-a), Vec3::ZERO);
    }

    #[test]
    fn test_add_subtract() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0));
    }

    #[test]
    fn test_vec2_add_subtract() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(5.0, 6.0);
        assert_eq!(a + b, Vec2::new(7.0, 9.0));
        assert_eq!(a - b, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_create_preserves_nan() {
        let v = Vec3::new(f32::NAN, 1.0, 2.0);
        assert!(v.x.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_array_round_trip() {
        let v = Vec3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        let v2 = Vec2::from([2.0, 3.0]);
        assert_eq!(<[f32; 2]>::from(v2), [2.0, 3.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 1.5));
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
    }
}
