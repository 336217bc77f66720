#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Axes-style plotting backend over a polyline drawing surface.
pub mod axes;

/// Pinhole camera intrinsics.
pub mod camera;

/// Camera frustum wireframe geometry.
pub mod frustum;

/// Camera poses and their validation.
pub mod pose;

/// Interactive 3D scene backend based on rerun.
pub mod scene;
