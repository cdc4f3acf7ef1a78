//! Camera placement and view-projection composition.

use crate::projection::perspective;
use xform_algebra::{Mat4, Vec3};

/// Camera-to-world (look-at) matrix, written into a caller-owned
/// destination.
///
/// # Arguments
///
/// * `eye` - The position of the camera.
/// * `target` - The position being viewed.
/// * `up` - A hint vector pointing up.
/// * `dst` - Destination matrix; fully overwritten.
///
/// Builds the camera's local axes — z as `normalize(eye - target)`, x as
/// `normalize(cross(up, z))`, y as `normalize(cross(z, x))` — and places
/// them as the rotation columns with `eye` as the translation column. This
/// positions the camera itself; invert it to obtain a view matrix.
///
/// When `eye == target` the view direction is the zero vector and the
/// `normalize` degenerate-length fallback zeroes all three axes: the
/// rotation block comes
/// out all zeros while the translation column still holds `eye`. Downstream
/// consumers pin this exact output, so it is preserved rather than patched
/// to an identity rotation; callers that can reach the degenerate case must
/// detect it themselves.
pub fn look_at_into(eye: Vec3, target: Vec3, up: Vec3, dst: &mut Mat4) {
    let z_axis = (eye - target).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis).normalize();

    dst.0 = [
        x_axis.x, x_axis.y, x_axis.z, 0.0, //
        y_axis.x, y_axis.y, y_axis.z, 0.0, //
        z_axis.x, z_axis.y, z_axis.z, 0.0, //
        eye.x, eye.y, eye.z, 1.0,
    ];
}

/// Camera-to-world (look-at) matrix.
///
/// See [`look_at_into`].
///
/// Example:
///
/// ```
/// use xform_algebra::Vec3;
/// use xform_camera::look_at;
///
/// let camera = look_at(
///     Vec3::new(0.0, 0.0, 5.0),
///     Vec3::ZERO,
///     Vec3::new(0.0, 1.0, 0.0),
/// );
/// // straight down the z axis: the rotation block is the identity
/// assert_eq!(camera[0], 1.0);
/// assert_eq!(camera[14], 5.0);
/// ```
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let mut dst = Mat4::ZERO;
    look_at_into(eye, target, up, &mut dst);
    dst
}

/// View-projection matrix from camera placement and perspective parameters.
///
/// Composes `perspective(fov_y, aspect, z_near, z_far)` with the inverse of
/// the look-at matrix, yielding the single matrix that takes world-space
/// points to clip space. Left-multiply a model matrix onto it for a full
/// model-view-projection.
pub fn view_projection(
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    fov_y: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
) -> Mat4 {
    let camera = look_at(eye, target, up);
    perspective(fov_y, aspect, z_near, z_far) * camera.inverse()
}
