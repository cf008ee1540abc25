//! Tolerance comparison helpers for derived matrices.
//!
//! Used by correctness checks in the core (view/pose residuals) and by
//! tests across the workspace.

use glam::{Mat4, Vec3};

/// Largest absolute element-wise difference between two matrices.
pub fn max_abs_diff(a: Mat4, b: Mat4) -> f32 {
    let mut worst = 0.0_f32;
    for (x, y) in a
        .to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
    {
        let d = (x - y).abs();
        if d > worst {
            worst = d;
        }
    }
    worst
}

/// Element-wise matrix comparison within `tol`.
pub fn mat4_approx_eq(a: Mat4, b: Mat4, tol: f32) -> bool {
    max_abs_diff(a, b) <= tol
}

/// Element-wise vector comparison within `tol`.
pub fn vec3_approx_eq(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() <= tol
}
