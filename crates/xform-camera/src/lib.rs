#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Perspective, orthographic and frustum projection builders.
pub mod projection;

/// Camera placement (look-at) and view-projection composition.
pub mod view;

pub use projection::{frustum, ortho, perspective};
pub use view::{look_at, view_projection};
