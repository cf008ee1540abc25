use glam::Mat4;
use twinview_kernel::SceneRig;

use crate::viewport::{Viewport, compose};

/// Pixel rectangle of one viewport within the window. Passed through to
/// the backend untouched; the core does no projection math of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    /// Side-by-side halves of a window, primary on the left.
    pub fn split_horizontal(window_width: u32, window_height: u32) -> (ViewportRect, ViewportRect) {
        let half = window_width / 2;
        (
            ViewportRect {
                x: 0,
                y: 0,
                width: half,
                height: window_height,
            },
            ViewportRect {
                x: half,
                y: 0,
                width: half,
                height: window_height,
            },
        )
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective parameters forwarded to the projection stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Everything a backend needs to render one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportDesc {
    pub viewport: Viewport,
    pub rect: ViewportRect,
    pub projection: Projection,
}

/// Renderer-agnostic interface. The renderer reads rig state and viewport
/// descriptions, then produces output. It never mutates pose truth.
pub trait Renderer {
    type Output;

    fn render(&self, rig: &SceneRig, viewports: &[ViewportDesc]) -> Self::Output;
}

/// Debug text renderer — stand-in for a GPU backend.
///
/// Dumps every viewport's composed chains in a readable form. Useful for
/// CLI output, logging, and exercising the render interface in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn format_matrix(out: &mut String, m: Mat4) {
        for row in 0..4 {
            let r = m.row(row);
            out.push_str(&format!(
                "      [{:8.3} {:8.3} {:8.3} {:8.3}]\n",
                r.x, r.y, r.z, r.w
            ));
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, rig: &SceneRig, viewports: &[ViewportDesc]) -> String {
        let mut out = String::new();
        for desc in viewports {
            out.push_str(&format!(
                "=== {:?} viewport ({}x{} at {},{} aspect={:.3} fov={:.0}) ===\n",
                desc.viewport,
                desc.rect.width,
                desc.rect.height,
                desc.rect.x,
                desc.rect.y,
                desc.rect.aspect(),
                desc.projection.fov_y_degrees,
            ));
            for item in compose(desc.viewport, rig) {
                let pos = item.matrix.w_axis;
                out.push_str(&format!(
                    "  {:?} at ({:.2}, {:.2}, {:.2})\n",
                    item.drawable, pos.x, pos.y, pos.z
                ));
                Self::format_matrix(&mut out, item.matrix);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_viewports() -> Vec<ViewportDesc> {
        let (left, right) = ViewportRect::split_horizontal(800, 600);
        vec![
            ViewportDesc {
                viewport: Viewport::Primary,
                rect: left,
                projection: Projection::default(),
            },
            ViewportDesc {
                viewport: Viewport::Secondary,
                rect: right,
                projection: Projection::default(),
            },
        ]
    }

    #[test]
    fn split_covers_the_window() {
        let (left, right) = ViewportRect::split_horizontal(800, 600);
        assert_eq!(left.width + right.width, 800);
        assert_eq!(right.x, 400);
        assert!((left.aspect() - 400.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn projection_defaults_match_frustum_constants() {
        let p = Projection::default();
        assert_eq!(p.fov_y_degrees, 60.0);
        assert_eq!(p.near, 0.1);
        assert_eq!(p.far, 100.0);
    }

    #[test]
    fn debug_renderer_lists_both_viewports() {
        let rig = SceneRig::new();
        let out = DebugTextRenderer::new().render(&rig, &both_viewports());
        assert!(out.contains("Primary viewport"));
        assert!(out.contains("Secondary viewport"));
        assert!(out.contains("WorldAxes"));
        assert!(out.contains("CameraFrame"));
    }

    #[test]
    fn debug_renderer_does_not_mutate_rig() {
        let rig = SceneRig::new();
        let before = rig.vehicle_pose().matrix();
        let _ = DebugTextRenderer::new().render(&rig, &both_viewports());
        assert_eq!(rig.vehicle_pose().matrix(), before);
    }
}
