use glam::Mat4;
use twinview_kernel::SceneRig;

/// The two rendered views of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
    /// The movable camera's eye view.
    Primary,
    /// The fixed camera's view, which additionally shows the movable
    /// camera as an object in the scene.
    Secondary,
}

/// What the rendering collaborator is asked to emit under a composed
/// matrix. The collaborator resolves each variant to vertex data via
/// [`geometry`](crate::geometry); the core only pairs it with a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawable {
    /// World coordinate axes (long gizmo at the origin).
    WorldAxes,
    /// The vehicle body.
    Vehicle,
    /// The vehicle's local coordinate axes (short gizmo).
    VehicleAxes,
    /// A camera rendered as an object (its local frame gizmo).
    CameraFrame,
}

/// One fully composed modelview chain paired with its drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub matrix: Mat4,
    pub drawable: Drawable,
}

impl DrawItem {
    fn new(matrix: Mat4, drawable: Drawable) -> Self {
        Self { matrix, drawable }
    }
}

/// Build the ordered draw list for one viewport from current rig state.
///
/// Chains are view-matrix-first: the world frame is drawn under the bare
/// view matrix `V`, the vehicle under `V · T` (T = vehicle pose). The
/// secondary viewport also places the movable camera as a drawable object
/// under `V · C` where `C` is that camera's **pose** — not its view
/// matrix, since the goal is to place a representation of the camera, not
/// to look through it.
pub fn compose(viewport: Viewport, rig: &SceneRig) -> Vec<DrawItem> {
    match viewport {
        Viewport::Primary => {
            let view = rig.primary_view();
            let vehicle = view * rig.vehicle_pose().matrix();
            vec![
                DrawItem::new(view, Drawable::WorldAxes),
                DrawItem::new(vehicle, Drawable::Vehicle),
                DrawItem::new(vehicle, Drawable::VehicleAxes),
            ]
        }
        Viewport::Secondary => {
            let view = rig.secondary_view();
            let vehicle = view * rig.vehicle_pose().matrix();
            let camera = view * rig.primary_camera_pose().matrix();
            vec![
                DrawItem::new(view, Drawable::WorldAxes),
                DrawItem::new(vehicle, Drawable::Vehicle),
                DrawItem::new(vehicle, Drawable::VehicleAxes),
                DrawItem::new(camera, Drawable::CameraFrame),
            ]
        }
    }
}
