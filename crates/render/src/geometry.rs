//! Local-frame vertex data for the drawables.
//!
//! Pure data handed to the rendering collaborator; no drawing happens
//! here. The vehicle is a stylized craft with its nose along local +Z,
//! matching the forward translation step.

use glam::Vec3;

pub type Color = [f32; 3];

pub const RED: Color = [1.0, 0.0, 0.0];
pub const GREEN: Color = [0.0, 1.0, 0.0];
pub const BLUE: Color = [0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0];

/// Vehicle dimensions in local units.
pub const VEHICLE_WIDTH: f32 = 3.0;
pub const VEHICLE_LENGTH: f32 = 3.0;
pub const VEHICLE_HEIGHT: f32 = 1.5;

/// Gizmo axis length for the world frame.
pub const WORLD_AXES_LENGTH: f32 = 100.0;
/// Gizmo axis length for entity-local frames.
pub const LOCAL_AXES_LENGTH: f32 = 3.0;

/// A colored line segment in the drawable's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// A flat convex polygon in the drawable's local frame, vertices in fan
/// order, one color per face.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec3>,
    pub color: Color,
}

impl Polygon {
    fn new(color: Color, vertices: &[[f32; 3]]) -> Self {
        Self {
            vertices: vertices.iter().map(|v| Vec3::from_array(*v)).collect(),
            color,
        }
    }
}

/// The three principal axes: X red, Y green, Z blue.
pub fn axis_lines(length: f32) -> [Line; 3] {
    [
        Line {
            start: Vec3::ZERO,
            end: Vec3::X * length,
            color: RED,
        },
        Line {
            start: Vec3::ZERO,
            end: Vec3::Y * length,
            color: GREEN,
        },
        Line {
            start: Vec3::ZERO,
            end: Vec3::Z * length,
            color: BLUE,
        },
    ]
}

/// The vehicle body as colored faces: fuselage, nose, wings, tail fin and
/// tailplane. Nose at +Z, tail at -Z, wings spanning X.
pub fn vehicle_polygons() -> Vec<Polygon> {
    let w = VEHICLE_WIDTH / 2.0;
    let l = VEHICLE_LENGTH / 2.0;
    let h = VEHICLE_HEIGHT;

    vec![
        // Fuselage: flat diamond along the spine.
        Polygon::new(
            BLUE,
            &[
                [0.0, 0.0, l],
                [0.3, 0.25, 0.0],
                [0.0, 0.0, -l],
                [-0.3, 0.25, 0.0],
            ],
        ),
        // Nose cap.
        Polygon::new(
            WHITE,
            &[[0.0, 0.0, l + 0.5], [0.3, 0.25, l - 0.5], [-0.3, 0.25, l - 0.5]],
        ),
        // Right wing.
        Polygon::new(
            RED,
            &[[0.3, 0.1, 0.5], [w, 0.1, -0.5], [0.3, 0.1, -0.5]],
        ),
        // Left wing.
        Polygon::new(
            RED,
            &[[-0.3, 0.1, 0.5], [-w, 0.1, -0.5], [-0.3, 0.1, -0.5]],
        ),
        // Vertical tail fin.
        Polygon::new(
            WHITE,
            &[[0.0, 0.0, -l], [0.0, h, -l - 0.3], [0.0, 0.2, -l + 0.6]],
        ),
        // Tailplane.
        Polygon::new(
            YELLOW,
            &[
                [w / 2.0, 0.1, -l],
                [0.0, 0.1, -l + 0.5],
                [-w / 2.0, 0.1, -l],
                [0.0, 0.1, -l - 0.3],
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_lines_follow_principal_axes() {
        let [x, y, z] = axis_lines(10.0);
        assert_eq!(x.end, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(y.end, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(z.end, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(x.color, RED);
        assert_eq!(y.color, GREEN);
        assert_eq!(z.color, BLUE);
    }

    #[test]
    fn vehicle_faces_are_valid_polygons() {
        let faces = vehicle_polygons();
        assert!(!faces.is_empty());
        for face in &faces {
            assert!(face.vertices.len() >= 3);
        }
    }

    #[test]
    fn vehicle_fits_its_documented_dimensions() {
        let half_w = VEHICLE_WIDTH / 2.0;
        for face in vehicle_polygons() {
            for v in &face.vertices {
                assert!(v.x.abs() <= half_w + 1e-6);
                assert!(v.y <= VEHICLE_HEIGHT + 1e-6);
            }
        }
    }

    #[test]
    fn wings_are_mirrored_across_the_spine() {
        let faces = vehicle_polygons();
        let right = &faces[2];
        let left = &faces[3];
        for (r, l) in right.vertices.iter().zip(left.vertices.iter()) {
            assert_eq!(r.x, -l.x);
            assert_eq!(r.y, l.y);
            assert_eq!(r.z, l.z);
        }
    }
}
