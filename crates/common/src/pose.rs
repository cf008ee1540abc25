use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::approx::mat4_approx_eq;

/// Identifier for a tracked scene entity.
///
/// The set is closed by design: one controllable vehicle, one movable
/// camera, and one camera that is fixed after initialization but still
/// participates in matrix chains as a rendering reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Entity {
    Vehicle,
    PrimaryCamera,
    SecondaryCamera,
}

impl Entity {
    pub const ALL: [Entity; 3] = [
        Entity::Vehicle,
        Entity::PrimaryCamera,
        Entity::SecondaryCamera,
    ];

    pub fn is_camera(self) -> bool {
        matches!(self, Entity::PrimaryCamera | Entity::SecondaryCamera)
    }
}

/// A rigid affine transform placing an entity relative to the world frame.
///
/// Stored as a 4x4 homogeneous matrix whose upper-left 3x3 block is
/// orthonormal (pure rotation) and whose fourth column is the translation.
/// All mutation goes through [`Pose::then`], which composes an increment on
/// the right so the increment is interpreted in the entity's own local
/// frame rather than the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose(Mat4);

impl Pose {
    pub const IDENTITY: Pose = Pose(Mat4::IDENTITY);

    /// Pose at the given world position with identity rotation.
    pub fn from_translation(position: Vec3) -> Self {
        Self(Mat4::from_translation(position))
    }

    /// Wrap an already-rigid matrix. The caller guarantees rigidity; this
    /// is checked in debug builds only.
    pub fn from_mat4(matrix: Mat4) -> Self {
        let pose = Self(matrix);
        debug_assert!(
            pose.is_rigid(1e-4),
            "Pose::from_mat4 given a non-rigid matrix"
        );
        pose
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// World-space position (the translation column).
    pub fn position(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Right-multiply by an increment: the result is `self · m`, so `m` is
    /// applied in this pose's local frame. Left-multiplication would move
    /// along fixed world axes instead and must not be used for incremental
    /// motion.
    #[must_use]
    pub fn then(&self, m: Mat4) -> Pose {
        Pose(self.0 * m)
    }

    /// The view matrix for a camera holding this pose: the algebraic
    /// inverse. A rigid pose is always invertible, so a failed residual
    /// check here is a programming defect, not a runtime condition.
    pub fn view_matrix(&self) -> Mat4 {
        let view = self.0.inverse();
        debug_assert!(
            mat4_approx_eq(view * self.0, Mat4::IDENTITY, 1e-4),
            "view · pose drifted from identity"
        );
        view
    }

    /// Maximum absolute deviation of `Rᵀ·R` from the identity, where `R` is
    /// the rotation block. Zero for a perfectly rigid pose; grows with
    /// accumulated floating-point error over many incremental rotations.
    pub fn rotation_drift(&self) -> f32 {
        let r = Mat3::from_mat4(self.0);
        let residual = r.transpose() * r;
        let mut worst = 0.0_f32;
        for col in 0..3 {
            for row in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                let d = (residual.col(col)[row] - expected).abs();
                if d > worst {
                    worst = d;
                }
            }
        }
        worst
    }

    /// Whether the rotation block is still orthonormal within `tol`.
    pub fn is_rigid(&self, tol: f32) -> bool {
        self.rotation_drift() <= tol && self.0.row(3) == glam::Vec4::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
