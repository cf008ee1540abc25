//! Scene kernel: pose registry, elementary step table, and view derivation.
//!
//! # Invariants
//! - All pose mutation flows through [`SceneRig::apply`]; no hidden
//!   globals, no ad hoc field writes.
//! - Increments compose on the right (`P · M`), so every step is
//!   interpreted in the entity's current local frame.
//! - A camera's view matrix is rederived in the same call that mutated its
//!   pose; a render pass can never observe a stale view.

pub mod rig;
pub mod steps;

pub use rig::SceneRig;
pub use steps::{MotionStep, ROTATE_STEP_DEG, StepTable, TRANSLATE_STEP};
