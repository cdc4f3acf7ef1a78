//! Projection matrix builders.
//!
//! All builders target the WebGL clip conventions: the visible volume maps
//! to the canonical clip cube prior to the perspective divide, with the view
//! direction along negative z. Degenerate parameters (equal near/far planes,
//! zero-span bounds) divide to non-finite components instead of raising;
//! callers gate on [`Mat4::is_finite`] where degeneracy is possible.

use xform_algebra::Mat4;

/// Perspective projection from a vertical field of view, written into a
/// caller-owned destination.
///
/// # Arguments
///
/// * `fov_y` - Vertical angle of the frustum, in radians.
/// * `aspect` - Width over height of the viewport.
/// * `z_near` - Distance to the near clipping plane along negative z.
/// * `z_far` - Distance to the far clipping plane along negative z.
/// * `dst` - Destination matrix; fully overwritten.
///
/// Near and far are distances, not z coordinates; negative values are not
/// rejected and remain meaningful under this contract. `z_near == z_far`
/// produces non-finite depth terms.
pub fn perspective_into(fov_y: f32, aspect: f32, z_near: f32, z_far: f32, dst: &mut Mat4) {
    let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fov_y).tan();
    let range_inv = 1.0 / (z_near - z_far);

    dst.0 = [0.0; 16];
    dst.0[0] = f / aspect;
    dst.0[5] = f;
    dst.0[10] = (z_near + z_far) * range_inv;
    dst.0[11] = -1.0;
    dst.0[14] = z_near * z_far * range_inv * 2.0;
}

/// Perspective projection from a vertical field of view.
///
/// See [`perspective_into`].
pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    let mut dst = Mat4::ZERO;
    perspective_into(fov_y, aspect, z_near, z_far, &mut dst);
    dst
}

/// Orthographic projection mapping the given box to the clip cube, written
/// into a caller-owned destination.
///
/// Equal bounds on any axis (`left == right`, `bottom == top`,
/// `near == far`) divide to non-finite components by design.
pub fn ortho_into(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    dst: &mut Mat4,
) {
    dst.0 = [0.0; 16];
    dst.0[0] = 2.0 / (right - left);
    dst.0[5] = 2.0 / (top - bottom);
    dst.0[10] = 2.0 / (near - far);
    dst.0[12] = (right + left) / (left - right);
    dst.0[13] = (top + bottom) / (bottom - top);
    dst.0[14] = (far + near) / (near - far);
    dst.0[15] = 1.0;
}

/// Orthographic projection mapping the given box to the clip cube.
///
/// See [`ortho_into`].
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let mut dst = Mat4::ZERO;
    ortho_into(left, right, bottom, top, near, far, &mut dst);
    dst
}

/// Off-axis perspective frustum projection, written into a caller-owned
/// destination.
///
/// `left`/`right`/`bottom`/`top` bound the near clipping plane; `near` and
/// `far` are distances along negative z. Same degeneracy contract as
/// [`ortho_into`].
pub fn frustum_into(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    dst: &mut Mat4,
) {
    let dx = right - left;
    let dy = top - bottom;
    let dz = near - far;

    dst.0 = [0.0; 16];
    dst.0[0] = 2.0 * near / dx;
    dst.0[5] = 2.0 * near / dy;
    dst.0[8] = (left + right) / dx;
    dst.0[9] = (top + bottom) / dy;
    dst.0[10] = far / dz;
    dst.0[11] = -1.0;
    dst.0[14] = near * far / dz;
}

/// Off-axis perspective frustum projection.
///
/// See [`frustum_into`].
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let mut dst = Mat4::ZERO;
    frustum_into(left, right, bottom, top, near, far, &mut dst);
    dst
}
