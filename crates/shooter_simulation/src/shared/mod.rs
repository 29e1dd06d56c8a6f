//! Shared domain — cross-cutting утилиты
//!
//! Содержит:
//! - Interpolation filters (approach, normalize_axis, ease_out_cubic)
//! - Camera rig (deprojection crosshair, camera interp location)

pub mod interp;
pub mod camera;

pub use interp::*;
pub use camera::*;
