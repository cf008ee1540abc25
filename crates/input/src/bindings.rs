use serde::{Deserialize, Serialize};
use tracing::warn;
use twinview_common::Entity;
use twinview_kernel::MotionStep;

use crate::motion::{Motion, MotionEvent};

/// Which of a +/- matrix pair a canonical logical direction selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    fn pick(self, positive: MotionStep, negative: MotionStep) -> MotionStep {
        match self {
            Sign::Positive => positive,
            Sign::Negative => negative,
        }
    }
}

/// Sign bindings for one entity's control axes.
///
/// Each field names the step sign selected by the canonical direction of
/// that axis: `forward` for [`Motion::Forward`], `roll` for
/// [`Motion::RollRight`], `pitch` for [`Motion::PitchUp`], `yaw` for
/// [`Motion::YawRight`]. The opposite logical direction always selects the
/// flipped sign, so an axis is one configuration choice, not two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBindings {
    pub forward: Sign,
    pub roll: Sign,
    pub pitch: Sign,
    pub yaw: Sign,
}

impl AxisBindings {
    /// Resolve a logical motion to the elementary step it selects under
    /// these bindings.
    pub fn resolve(&self, motion: Motion) -> MotionStep {
        use MotionStep::*;
        match motion {
            Motion::Forward => self.forward.pick(TranslateForward, TranslateBackward),
            Motion::Backward => self.forward.flip().pick(TranslateForward, TranslateBackward),
            Motion::RollRight => self.roll.pick(RollPositive, RollNegative),
            Motion::RollLeft => self.roll.flip().pick(RollPositive, RollNegative),
            Motion::PitchUp => self.pitch.pick(PitchPositive, PitchNegative),
            Motion::PitchDown => self.pitch.flip().pick(PitchPositive, PitchNegative),
            Motion::YawRight => self.yaw.pick(YawPositive, YawNegative),
            Motion::YawLeft => self.yaw.flip().pick(YawPositive, YawNegative),
        }
    }
}

/// Per-entity control bindings for the two steerable entities.
///
/// Defaults reproduce the original control scheme, asymmetries included:
/// the vehicle flies forward along its local +Z while the camera flies
/// forward along -Z (a camera looks down its own -Z axis), and the two
/// use opposite yaw signs. Both are deliberate configuration, serialized
/// so alternative profiles can be loaded rather than patched in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBindings {
    pub vehicle: AxisBindings,
    pub camera: AxisBindings,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            vehicle: AxisBindings {
                forward: Sign::Positive,
                roll: Sign::Positive,
                pitch: Sign::Positive,
                yaw: Sign::Negative,
            },
            camera: AxisBindings {
                forward: Sign::Negative,
                roll: Sign::Positive,
                pitch: Sign::Positive,
                yaw: Sign::Positive,
            },
        }
    }
}

/// Errors from loading or saving a bindings profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("bindings profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ControlBindings {
    /// Parse a profile from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the profile as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve an event to the step the kernel should apply, or `None`
    /// when the target takes no input (the fixed secondary camera).
    pub fn resolve(&self, event: MotionEvent) -> Option<MotionStep> {
        match event.target {
            Entity::Vehicle => Some(self.vehicle.resolve(event.motion)),
            Entity::PrimaryCamera => Some(self.camera.resolve(event.motion)),
            Entity::SecondaryCamera => {
                warn!(motion = ?event.motion, "secondary camera takes no input");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_and_camera_forward_are_opposite_steps() {
        let bindings = ControlBindings::default();
        let vehicle = bindings
            .resolve(MotionEvent::new(Entity::Vehicle, Motion::Forward))
            .unwrap();
        let camera = bindings
            .resolve(MotionEvent::new(Entity::PrimaryCamera, Motion::Forward))
            .unwrap();
        assert_eq!(vehicle, MotionStep::TranslateForward);
        assert_eq!(camera, MotionStep::TranslateBackward);
        assert_eq!(camera, vehicle.inverse());
    }

    #[test]
    fn yaw_signs_differ_per_entity() {
        let bindings = ControlBindings::default();
        let vehicle = bindings.vehicle.resolve(Motion::YawRight);
        let camera = bindings.camera.resolve(Motion::YawRight);
        assert_eq!(vehicle, MotionStep::YawNegative);
        assert_eq!(camera, MotionStep::YawPositive);
    }

    #[test]
    fn opposite_directions_resolve_to_inverse_steps() {
        let bindings = ControlBindings::default();
        let pairs = [
            (Motion::Forward, Motion::Backward),
            (Motion::RollRight, Motion::RollLeft),
            (Motion::PitchUp, Motion::PitchDown),
            (Motion::YawRight, Motion::YawLeft),
        ];
        for axis in [bindings.vehicle, bindings.camera] {
            for (a, b) in pairs {
                assert_eq!(axis.resolve(a).inverse(), axis.resolve(b));
            }
        }
    }

    #[test]
    fn secondary_camera_resolves_to_none() {
        let bindings = ControlBindings::default();
        assert!(
            bindings
                .resolve(MotionEvent::new(Entity::SecondaryCamera, Motion::Forward))
                .is_none()
        );
    }

    #[test]
    fn bindings_round_trip_through_json() {
        let mut bindings = ControlBindings::default();
        bindings.vehicle.yaw = Sign::Positive;
        let json = bindings.to_json().unwrap();
        let back = ControlBindings::from_json(&json).unwrap();
        assert_eq!(back, bindings);
    }

    #[test]
    fn malformed_profile_is_a_json_error() {
        let err = ControlBindings::from_json("{\"vehicle\": 3}").unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }
}
