#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use xform_algebra as algebra;

#[doc(inline)]
pub use xform_camera as camera;
