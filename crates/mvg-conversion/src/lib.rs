#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Conversion between unit quaternions and rotation matrices.
pub mod rotation;
