//! Shared primitive types for the Foxel grid space
//!
//! The editor models geometry on a 16-units-per-meter grid; the engine
//! consumes meters. These aliases and constants are used by both the
//! scene graph and the export document.

/// 3D vector (position, size, pivot, or Euler angles in degrees)
pub type Vec3 = [f64; 3];

/// Rotation quaternion stored vector-first: `[x, y, z, w]`
pub type Quaternion = [f64; 4];

/// UV rectangle `[u1, v1, u2, v2]` in texture space
pub type UvRect = [f64; 4];

/// Editor grid units per engine meter
pub const GRID_SCALE: f64 = 16.0;

/// All-zero vector
pub const VEC3_ZERO: Vec3 = [0.0, 0.0, 0.0];

/// All-one vector
pub const VEC3_ONE: Vec3 = [1.0, 1.0, 1.0];

/// Identity rotation in `[x, y, z, w]` order
pub const IDENTITY_ROTATION: Quaternion = [0.0, 0.0, 0.0, 1.0];

/// Center of one grid block in meters; pivot of the synthetic root part
pub const GRID_CENTER: Vec3 = [0.5, 0.5, 0.5];
