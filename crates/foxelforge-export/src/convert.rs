//! Geometry conversion from editor grid space to engine conventions
//!
//! The editor works on a 16-units-per-meter grid with Euler rotations in
//! degrees; the engine consumes meters and `[x, y, z, w]` quaternions.

use foxelforge_core::texture::Texture;
use foxelforge_core::types::{Quaternion, UvRect, Vec3, GRID_SCALE};

/// Rescale a grid-space vector to meters
pub fn to_meters(vec: Vec3) -> Vec3 {
    [
        vec[0] / GRID_SCALE,
        vec[1] / GRID_SCALE,
        vec[2] / GRID_SCALE,
    ]
}

/// Componentwise `to - from`
///
/// No clamping: a box with `from > to` on an axis yields a negative size,
/// which the engine receives as-is.
pub fn box_size(from: Vec3, to: Vec3) -> Vec3 {
    [to[0] - from[0], to[1] - from[1], to[2] - from[2]]
}

/// Convert `[roll, pitch, yaw]` Euler degrees to an `[x, y, z, w]` quaternion
///
/// All three angles are negated before conversion to match the engine's
/// handedness. The scalar component comes last; the engine rejects the
/// conventional `[w, x, y, z]` ordering.
pub fn euler_to_quaternion(euler: Vec3) -> Quaternion {
    let [roll, pitch, yaw] = euler.map(|deg| -deg.to_radians());

    let (sy, cy) = (yaw * 0.5).sin_cos();
    let (sp, cp) = (pitch * 0.5).sin_cos();
    let (sr, cr) = (roll * 0.5).sin_cos();

    let w = cr * cp * cy + sr * sp * sy;
    let x = sr * cp * cy - cr * sp * sy;
    let y = cr * sp * cy + sr * cp * sy;
    let z = cr * cp * sy - sr * sp * cy;

    [x, y, z, w].map(canonical_zero)
}

/// Rescale a UV rectangle into normalized texture space
///
/// With a texture, components divide by `[width, height, width, height]`
/// from that texture's declared UV-space size; without one, everything
/// divides by the fixed grid scale. The divisor choice is a format rule,
/// not interchangeable.
pub fn scale_uv(uv: UvRect, texture: Option<&Texture>) -> UvRect {
    match texture {
        Some(texture) => [
            uv[0] / texture.uv_width,
            uv[1] / texture.uv_height,
            uv[2] / texture.uv_width,
            uv[3] / texture.uv_height,
        ],
        None => [
            uv[0] / GRID_SCALE,
            uv[1] / GRID_SCALE,
            uv[2] / GRID_SCALE,
            uv[3] / GRID_SCALE,
        ],
    }
}

// The negation above turns +0.0 inputs into -0.0, and sin keeps the sign;
// collapse to +0.0 so identity rotations serialize as plain zeros.
fn canonical_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
