//! Input mapping: discrete motion events resolved to elementary steps
//! through explicit per-entity control bindings.
//!
//! # Invariants
//! - The kernel consumes [`MotionStep`](twinview_kernel::MotionStep)s,
//!   never raw key events.
//! - Sign conventions are per-entity configuration, not inferred symmetry:
//!   the vehicle and camera legitimately disagree on yaw sign and on which
//!   translation sense means "forward".

pub mod bindings;
pub mod keymap;
pub mod motion;

pub use bindings::{AxisBindings, ControlBindings, ProfileError, Sign};
pub use keymap::KeyMap;
pub use motion::{Motion, MotionEvent};

pub fn crate_info() -> &'static str {
    "twinview-input v0.1.0"
}
