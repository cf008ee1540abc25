use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// World units moved per discrete translation step.
pub const TRANSLATE_STEP: f32 = 1.0;
/// Degrees turned per discrete rotation step.
pub const ROTATE_STEP_DEG: f32 = 5.0;

/// One discrete unit of rigid motion.
///
/// The key set is closed: a fixed-magnitude translation along local Z in
/// either sense, and a fixed-angle rotation about each local axis in either
/// sense. "Positive" follows the right-handed convention; each negative
/// variant is the exact inverse of its positive counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionStep {
    TranslateForward,
    TranslateBackward,
    RollPositive,
    RollNegative,
    PitchPositive,
    PitchNegative,
    YawPositive,
    YawNegative,
}

impl MotionStep {
    pub const ALL: [MotionStep; 8] = [
        MotionStep::TranslateForward,
        MotionStep::TranslateBackward,
        MotionStep::RollPositive,
        MotionStep::RollNegative,
        MotionStep::PitchPositive,
        MotionStep::PitchNegative,
        MotionStep::YawPositive,
        MotionStep::YawNegative,
    ];

    /// The step that exactly undoes this one.
    pub fn inverse(self) -> MotionStep {
        match self {
            MotionStep::TranslateForward => MotionStep::TranslateBackward,
            MotionStep::TranslateBackward => MotionStep::TranslateForward,
            MotionStep::RollPositive => MotionStep::RollNegative,
            MotionStep::RollNegative => MotionStep::RollPositive,
            MotionStep::PitchPositive => MotionStep::PitchNegative,
            MotionStep::PitchNegative => MotionStep::PitchPositive,
            MotionStep::YawPositive => MotionStep::YawNegative,
            MotionStep::YawNegative => MotionStep::YawPositive,
        }
    }
}

/// The eight elementary transform matrices, built once at startup and
/// immutable afterwards.
///
/// Positive entries use glam's right-handed rotation constructors (X
/// couples Y/Z, Y couples Z/X, Z couples X/Y). Each negative entry is the
/// matrix inverse of its positive counterpart, computed by inversion
/// rather than re-derived with a negated angle, so a step composed with
/// its opposite cancels to identity at floating-point precision.
#[derive(Debug, Clone)]
pub struct StepTable {
    // Indexed by MotionStep discriminant; order must match ALL.
    matrices: [Mat4; 8],
}

impl StepTable {
    pub fn new() -> Self {
        let theta = ROTATE_STEP_DEG.to_radians();

        let translate = Mat4::from_translation(Vec3::Z * TRANSLATE_STEP);
        let roll = Mat4::from_rotation_z(theta);
        let pitch = Mat4::from_rotation_x(theta);
        let yaw = Mat4::from_rotation_y(theta);

        Self {
            matrices: [
                translate,
                translate.inverse(),
                roll,
                roll.inverse(),
                pitch,
                pitch.inverse(),
                yaw,
                yaw.inverse(),
            ],
        }
    }

    /// The 4x4 matrix for one step.
    pub fn matrix(&self, step: MotionStep) -> Mat4 {
        self.matrices[step as usize]
    }
}

impl Default for StepTable {
    fn default() -> Self {
        Self::new()
    }
}
