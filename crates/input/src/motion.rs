use serde::{Deserialize, Serialize};
use twinview_common::Entity;

/// A pilot's logical motion intent, before sign resolution.
///
/// Logical directions are entity-agnostic; what matrix a direction maps to
/// depends on the target's [`AxisBindings`](crate::AxisBindings) (a camera
/// flies "forward" along its local -Z, a vehicle along +Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    Forward,
    Backward,
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
}

/// One discrete input event: a logical motion aimed at a target entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionEvent {
    pub target: Entity,
    pub motion: Motion,
}

impl MotionEvent {
    pub fn new(target: Entity, motion: Motion) -> Self {
        Self { target, motion }
    }
}
