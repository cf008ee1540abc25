//! Shared types for the twinview scene core.
//!
//! # Invariants
//! - A [`Pose`] is always rigid: orthonormal rotation block plus a
//!   translation column. Updates compose rotation/translation steps only,
//!   so rigidity holds by construction.
//! - The entity set is closed: exactly three entities exist for the
//!   lifetime of the process.

pub mod approx;
pub mod pose;

pub use pose::{Entity, Pose};
