use glam::{Mat4, Vec3};
use tracing::{debug, warn};
use twinview_common::{Entity, Pose};

use crate::steps::{MotionStep, StepTable};

/// Documented starting poses. The vehicle and primary camera sit at fixed
/// world offsets with identity rotation; the secondary camera is lifted
/// along +Y and tilted -90° about X so it looks straight down at the scene.
const VEHICLE_START: Vec3 = Vec3::new(1.0, 0.0, 4.0);
const PRIMARY_CAMERA_START: Vec3 = Vec3::new(2.0, 1.0, 15.0);
const SECONDARY_CAMERA_HEIGHT: f32 = 20.0;
const SECONDARY_CAMERA_TILT_DEG: f32 = -90.0;

/// The authoritative owner of all entity poses and the two derived view
/// matrices.
///
/// Exactly three poses exist for the lifetime of the process. The vehicle
/// and primary camera mutate through [`SceneRig::apply`]; the secondary
/// camera is fixed after construction and only serves as a reference frame
/// for the second viewport. View matrices are derived state: each is
/// always the inverse of its camera's current pose, recomputed inside the
/// mutating call, never lazily.
#[derive(Debug, Clone)]
pub struct SceneRig {
    steps: StepTable,
    vehicle: Pose,
    primary_camera: Pose,
    secondary_camera: Pose,
    primary_view: Mat4,
    secondary_view: Mat4,
}

impl SceneRig {
    pub fn new() -> Self {
        let vehicle = Pose::from_translation(VEHICLE_START);
        let primary_camera = Pose::from_translation(PRIMARY_CAMERA_START);
        let secondary_camera = Pose::from_mat4(
            Mat4::from_translation(Vec3::new(0.0, SECONDARY_CAMERA_HEIGHT, 0.0))
                * Mat4::from_rotation_x(SECONDARY_CAMERA_TILT_DEG.to_radians()),
        );

        let primary_view = primary_camera.view_matrix();
        let secondary_view = secondary_camera.view_matrix();

        Self {
            steps: StepTable::new(),
            vehicle,
            primary_camera,
            secondary_camera,
            primary_view,
            secondary_view,
        }
    }

    /// Apply one elementary step to an entity's pose, composed on the
    /// right: the new pose is `P · M`, so the step acts along the entity's
    /// current local axes. "Forward" always means the entity's own forward,
    /// regardless of accumulated rotation.
    ///
    /// Steps aimed at the secondary camera are ignored: its pose is fixed
    /// at initialization. This is a no-op, not an error, matching the
    /// policy for any input outside the closed control set.
    pub fn apply(&mut self, entity: Entity, step: MotionStep) {
        let m = self.steps.matrix(step);
        match entity {
            Entity::Vehicle => {
                self.vehicle = self.vehicle.then(m);
                debug!(?step, position = ?self.vehicle.position(), "vehicle pose updated");
            }
            Entity::PrimaryCamera => {
                self.primary_camera = self.primary_camera.then(m);
                // Rederive before returning so no reader sees a stale view.
                self.primary_view = self.primary_camera.view_matrix();
                debug!(?step, position = ?self.primary_camera.position(), "primary camera pose updated");
            }
            Entity::SecondaryCamera => {
                warn!(?step, "secondary camera pose is fixed; step ignored");
            }
        }
    }

    pub fn pose(&self, entity: Entity) -> Pose {
        match entity {
            Entity::Vehicle => self.vehicle,
            Entity::PrimaryCamera => self.primary_camera,
            Entity::SecondaryCamera => self.secondary_camera,
        }
    }

    pub fn vehicle_pose(&self) -> Pose {
        self.vehicle
    }

    pub fn primary_camera_pose(&self) -> Pose {
        self.primary_camera
    }

    pub fn secondary_camera_pose(&self) -> Pose {
        self.secondary_camera
    }

    /// View matrix of the movable camera: inverse of its current pose.
    pub fn primary_view(&self) -> Mat4 {
        self.primary_view
    }

    /// View matrix of the fixed camera; constant after construction.
    pub fn secondary_view(&self) -> Mat4 {
        self.secondary_view
    }

    pub fn step_table(&self) -> &StepTable {
        &self.steps
    }
}

impl Default for SceneRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::ROTATE_STEP_DEG;
    use twinview_common::approx::{mat4_approx_eq, vec3_approx_eq};

    #[test]
    fn initial_poses_match_documented_values() {
        let rig = SceneRig::new();
        assert_eq!(rig.vehicle_pose().position(), Vec3::new(1.0, 0.0, 4.0));
        assert_eq!(
            rig.primary_camera_pose().position(),
            Vec3::new(2.0, 1.0, 15.0)
        );
        assert_eq!(
            rig.secondary_camera_pose().position(),
            Vec3::new(0.0, 20.0, 0.0)
        );
    }

    #[test]
    fn forward_step_from_identity_rotation_moves_along_world_z() {
        let mut rig = SceneRig::new();
        rig.apply(Entity::Vehicle, MotionStep::TranslateForward);
        assert!(vec3_approx_eq(
            rig.vehicle_pose().position(),
            Vec3::new(1.0, 0.0, 5.0),
            1e-6
        ));
    }

    #[test]
    fn pitch_then_forward_moves_along_rotated_local_z() {
        let mut rig = SceneRig::new();
        rig.apply(Entity::Vehicle, MotionStep::PitchPositive);
        rig.apply(Entity::Vehicle, MotionStep::TranslateForward);

        let theta = ROTATE_STEP_DEG.to_radians();
        // Local +Z after a +X rotation is (0, -sinθ, cosθ) in world terms.
        let expected = Vec3::new(1.0, -theta.sin(), 4.0 + theta.cos());
        assert!(vec3_approx_eq(rig.vehicle_pose().position(), expected, 1e-5));
    }

    #[test]
    fn roll_then_forward_still_moves_along_world_z() {
        // The roll axis is parallel to the translation axis, so rolling
        // first cannot deflect a forward step.
        let mut rig = SceneRig::new();
        rig.apply(Entity::Vehicle, MotionStep::RollPositive);
        rig.apply(Entity::Vehicle, MotionStep::TranslateForward);
        assert!(vec3_approx_eq(
            rig.vehicle_pose().position(),
            Vec3::new(1.0, 0.0, 5.0),
            1e-5
        ));
    }

    #[test]
    fn yaw_and_translate_do_not_commute() {
        let mut a = SceneRig::new();
        a.apply(Entity::Vehicle, MotionStep::YawPositive);
        a.apply(Entity::Vehicle, MotionStep::TranslateForward);

        let mut b = SceneRig::new();
        b.apply(Entity::Vehicle, MotionStep::TranslateForward);
        b.apply(Entity::Vehicle, MotionStep::YawPositive);

        assert!(!vec3_approx_eq(
            a.vehicle_pose().position(),
            b.vehicle_pose().position(),
            1e-6
        ));

        // Both orders are deterministic: repeating them reproduces the
        // same matrices bit for bit.
        let mut a2 = SceneRig::new();
        a2.apply(Entity::Vehicle, MotionStep::YawPositive);
        a2.apply(Entity::Vehicle, MotionStep::TranslateForward);
        assert_eq!(a.vehicle_pose().matrix(), a2.vehicle_pose().matrix());
    }

    #[test]
    fn step_then_inverse_restores_pose() {
        let mut rig = SceneRig::new();
        // Put the vehicle in a generic orientation first.
        rig.apply(Entity::Vehicle, MotionStep::YawPositive);
        rig.apply(Entity::Vehicle, MotionStep::PitchNegative);
        let before = rig.vehicle_pose().matrix();

        for step in MotionStep::ALL {
            rig.apply(Entity::Vehicle, step);
            rig.apply(Entity::Vehicle, step.inverse());
            assert!(
                mat4_approx_eq(rig.vehicle_pose().matrix(), before, 1e-5),
                "{step:?} not undone by its inverse"
            );
        }
    }

    #[test]
    fn camera_view_tracks_pose_immediately() {
        let mut rig = SceneRig::new();
        for _ in 0..10 {
            rig.apply(Entity::PrimaryCamera, MotionStep::YawPositive);
            rig.apply(Entity::PrimaryCamera, MotionStep::TranslateBackward);
            assert!(mat4_approx_eq(
                rig.primary_view() * rig.primary_camera_pose().matrix(),
                Mat4::IDENTITY,
                1e-4
            ));
        }
    }

    #[test]
    fn secondary_camera_ignores_steps_and_view_stays_fixed() {
        let mut rig = SceneRig::new();
        let view_before = rig.secondary_view();
        let pose_before = rig.secondary_camera_pose().matrix();

        for _ in 0..50 {
            rig.apply(Entity::PrimaryCamera, MotionStep::YawPositive);
        }
        rig.apply(Entity::SecondaryCamera, MotionStep::TranslateForward);

        assert_eq!(rig.secondary_view(), view_before);
        assert_eq!(rig.secondary_camera_pose().matrix(), pose_before);
    }

    #[test]
    fn full_revolution_returns_within_tolerance() {
        // 72 steps of 5° is a full turn; undoing them must come back to the
        // start within 1e-4 despite accumulated floating-point error.
        let mut rig = SceneRig::new();
        let start = rig.primary_camera_pose().matrix();
        for _ in 0..72 {
            rig.apply(Entity::PrimaryCamera, MotionStep::YawPositive);
        }
        for _ in 0..72 {
            rig.apply(Entity::PrimaryCamera, MotionStep::YawNegative);
        }
        assert!(mat4_approx_eq(rig.primary_camera_pose().matrix(), start, 1e-4));
        assert!(rig.primary_camera_pose().is_rigid(1e-4));
    }

    #[test]
    fn long_runs_keep_rotation_orthonormal() {
        let mut rig = SceneRig::new();
        for i in 0..500 {
            let step = MotionStep::ALL[i % MotionStep::ALL.len()];
            rig.apply(Entity::Vehicle, step);
        }
        assert!(rig.vehicle_pose().rotation_drift() < 1e-4);
    }
}
