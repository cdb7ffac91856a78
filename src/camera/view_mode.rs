use std::fmt;

use glam::Vec3;

use super::core::{Camera, CameraPose};
use crate::scene::Plane;

/// Which way the editor camera is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The free perspective view the editor starts in.
    #[default]
    Perspective,
    /// Straight down onto the ground plane from above the origin.
    TopView,
}

impl ViewMode {
    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Perspective => "Perspective",
            Self::TopView => "Top View",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::TopView,
            Self::TopView => Self::Perspective,
        }
    }

    /// Plane that pointer drags are projected onto in this mode.
    ///
    /// Top view drags across the ground (normal +Y); perspective drags
    /// across the screen-facing plane (normal +Z). Both pass through the
    /// world origin.
    #[must_use]
    pub fn drag_plane(self) -> Plane {
        match self {
            Self::TopView => Plane::new(Vec3::Y, 0.0),
            Self::Perspective => Plane::new(Vec3::Z, 0.0),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flips the camera between perspective and top view.
///
/// The pose at construction is remembered once; leaving top view always
/// returns to exactly that pose, whatever the camera did in between.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraModeController {
    mode: ViewMode,
    startup_pose: CameraPose,
    top_view_height: f32,
}

impl CameraModeController {
    /// Capture `camera`'s current pose as the one to restore.
    #[must_use]
    pub fn new(camera: &Camera, top_view_height: f32) -> Self {
        Self {
            mode: ViewMode::Perspective,
            startup_pose: camera.pose(),
            top_view_height,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the top view is active.
    #[must_use]
    pub fn is_top_view(&self) -> bool {
        self.mode == ViewMode::TopView
    }

    /// The pose captured at startup.
    #[must_use]
    pub fn startup_pose(&self) -> CameraPose {
        self.startup_pose
    }

    /// Drag plane for the current mode.
    #[must_use]
    pub fn drag_plane(&self) -> Plane {
        self.mode.drag_plane()
    }

    /// Switch modes and move `camera` accordingly. Returns the new mode.
    ///
    /// Entering top view places the camera above the origin, aims it at
    /// the origin, then sets its up reference to +Z. Leaving restores the
    /// startup pose.
    pub fn toggle_top_view(&mut self, camera: &mut Camera) -> ViewMode {
        self.mode = self.mode.toggled();
        match self.mode {
            ViewMode::TopView => {
                camera.position = Vec3::Y * self.top_view_height;
                camera.look_at(Vec3::ZERO);
                camera.up = Vec3::Z;
            }
            ViewMode::Perspective => camera.set_pose(self.startup_pose),
        }
        log::debug!("camera mode: {}", self.mode);
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    fn setup() -> (Camera, CameraModeController) {
        let camera = Camera::new(&CameraOptions::default(), 1.0);
        let controller = CameraModeController::new(&camera, 5.0);
        (camera, controller)
    }

    #[test]
    fn entering_top_view_looks_down_from_above() {
        let (mut camera, mut modes) = setup();
        assert_eq!(modes.toggle_top_view(&mut camera), ViewMode::TopView);
        assert_eq!(camera.position, Vec3::new(0.0, 5.0, 0.0));
        assert!((camera.forward() - Vec3::NEG_Y).length() < 1e-3);
        assert_eq!(camera.up, Vec3::Z);
        assert_eq!(modes.drag_plane(), Plane::new(Vec3::Y, 0.0));
    }

    #[test]
    fn leaving_top_view_restores_startup_pose() {
        let (mut camera, mut modes) = setup();
        let startup = camera.pose();
        let _ = modes.toggle_top_view(&mut camera);
        let _ = modes.toggle_top_view(&mut camera);
        assert!(!modes.is_top_view());
        assert!((camera.position - startup.position).length() < 1e-6);
        assert!(camera.orientation.abs_diff_eq(startup.orientation, 1e-6));
    }

    #[test]
    fn restore_discards_motion_made_before_entering_top_view() {
        let (mut camera, mut modes) = setup();
        camera.position = Vec3::new(3.0, 2.0, 8.0);
        camera.look_at(Vec3::ZERO);
        let _ = modes.toggle_top_view(&mut camera);
        let _ = modes.toggle_top_view(&mut camera);
        assert_eq!(camera.pose(), modes.startup_pose());
    }

    #[test]
    fn perspective_drags_across_depth_plane() {
        assert_eq!(
            ViewMode::Perspective.drag_plane(),
            Plane::new(Vec3::Z, 0.0)
        );
    }
}
