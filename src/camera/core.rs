use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::scene::Ray;

/// Position and orientation of the camera, without projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space eye position.
    pub position: Vec3,
    /// World-space orientation; the camera looks down its local -Z.
    pub orientation: Quat,
}

/// Perspective camera posed by position and orientation.
///
/// `up` is the reference vector [`look_at`](Self::look_at) aligns the
/// camera's local +Y with; it is not derived from the orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation in world space.
    pub orientation: Quat,
    /// Up reference used by `look_at`.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at the configured start position looking down -Z.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            position: Vec3::from_array(options.start_position),
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            fovy: options.fovy,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            orientation: self.orientation,
        }
    }

    /// Overwrite position and orientation.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.orientation = pose.orientation;
    }

    /// World-space viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Orient the camera toward `target`, keeping local +Y as close to
    /// `self.up` as possible.
    ///
    /// When the view direction is parallel to `up` the basis is undefined;
    /// the direction is nudged slightly so a valid orientation still comes
    /// out instead of NaNs.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z = Vec3::Z;
        }
        z = z.normalize();
        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 {
            if self.up.z.abs() == 1.0 {
                z.x += 1e-4;
            } else {
                z.z += 1e-4;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        let x = x.normalize();
        let y = z.cross(x);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// View-to-clip matrix (OpenGL depth range, matching the NDC cube the
    /// pointer mapping assumes).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the eye through a point in normalized device coordinates.
    ///
    /// Traces the same line as unprojecting `(ndc, 0.5)` through
    /// [`build_matrix`](Self::build_matrix), but builds the direction in
    /// view space so a ray along a world axis stays exactly on it.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fovy.to_radians() * 0.5).tan();
        let local = Vec3::new(
            ndc.x * half_height * self.aspect,
            ndc.y * half_height,
            -1.0,
        );
        Ray::new(self.position, self.orientation * local)
    }

    /// Update the aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Map a pixel position to normalized device coordinates.
///
/// Screen Y grows downward while device Y grows upward, hence the flip.
#[must_use]
pub fn screen_to_ndc(x: f32, y: f32, viewport: Vec2) -> Vec2 {
    let size = viewport.max(Vec2::ONE);
    Vec2::new(2.0 * (x / size.x) - 1.0, -(2.0 * (y / size.y) - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(&CameraOptions::default(), 1.0)
    }

    #[test]
    fn ndc_corners_and_centre() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(400.0, 300.0, viewport), Vec2::ZERO);
        assert_eq!(screen_to_ndc(0.0, 0.0, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(
            screen_to_ndc(800.0, 600.0, viewport),
            Vec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn centre_ray_points_down_view_axis() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 10.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn off_centre_ray_leans_toward_the_corner() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::new(1.0, 1.0));
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn ray_matches_unprojection() {
        let mut cam = Camera::new(&CameraOptions::default(), 4.0 / 3.0);
        cam.position = Vec3::new(3.0, 4.0, 8.0);
        cam.look_at(Vec3::new(-1.0, 0.0, 0.0));
        let ndc = Vec2::new(0.3, -0.6);
        let through = cam
            .build_matrix()
            .inverse()
            .project_point3(ndc.extend(0.5));
        let expected = (through - cam.position).normalize();
        assert!((cam.ray_from_ndc(ndc).direction - expected).length() < 1e-3);
    }

    #[test]
    fn look_at_faces_target() {
        let mut cam = camera();
        cam.position = Vec3::new(10.0, 0.0, 0.0);
        cam.look_at(Vec3::ZERO);
        assert!((cam.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn look_at_along_up_stays_finite() {
        let mut cam = camera();
        cam.position = Vec3::new(0.0, 5.0, 0.0);
        cam.look_at(Vec3::ZERO);
        assert!(cam.orientation.is_finite());
        assert!((cam.forward() - Vec3::NEG_Y).length() < 1e-3);
    }

    #[test]
    fn resize_ignores_degenerate_sizes() {
        let mut cam = camera();
        cam.resize(1600, 800);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(0, 800);
        assert_eq!(cam.aspect, 2.0);
    }
}
