//! # 3D Camera
//!
//! Camera abstraction producing the view and projection matrices the
//! probes print and verify.
//!
//! ## Coordinate System
//! View space is right-handed with the camera looking down -Z. The
//! projection maps depth to Vulkan's [0, 1] range but leaves Y pointing
//! up; converting to Vulkan's Y-down NDC is the single explicit sign flip
//! exposed by [`Camera::vulkan_projection_matrix`].

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Perspective camera for 3D matrix generation
///
/// Matrix calculations are performed on demand rather than cached; for a
/// print-once diagnostic that is all that is needed.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// The default target is the origin and the default up vector is +Y;
    /// both can be changed with [`Camera::look_at`].
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Configure camera to look at a specific point with a custom up vector
    ///
    /// The up vector need not be perpendicular to the view direction; the
    /// view matrix calculation orthonormalizes the basis.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Generate the view matrix for world-to-camera transformation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate the perspective projection matrix
    ///
    /// This is the untouched library output: Y up, depth in [0, 1]. Use
    /// [`Camera::vulkan_projection_matrix`] when the result feeds Vulkan
    /// clip space directly.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Generate the projection matrix with the Vulkan Y-axis correction
    ///
    /// Vulkan's NDC Y axis points down, so the `[1][1]` element of the
    /// standard perspective matrix has its sign inverted.
    pub fn vulkan_projection_matrix(&self) -> Mat4 {
        let mut projection = self.projection_matrix();
        projection[(1, 1)] *= -1.0;
        projection
    }
}

impl Default for Camera {
    /// Default perspective camera: above and behind the origin, looking at
    /// the scene center, 45-degree field of view
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_perspective_converts_degrees() {
        let camera = Camera::perspective(Vec3::zeros(), 45.0, 1.0, 0.1, 10.0);
        assert_relative_eq!(camera.fov, std::f32::consts::FRAC_PI_4, epsilon = EPSILON);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let mut camera = Camera::perspective(Vec3::new(2.0, 2.0, 2.0), 45.0, 1.0, 0.1, 10.0);
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));

        let expected = Mat4::look_at(
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 1.0),
        );

        assert_relative_eq!(camera.view_matrix(), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_vulkan_projection_flips_y_sign() {
        let camera = Camera::perspective(Vec3::zeros(), 45.0, 1200.0 / 675.0, 0.1, 10.0);

        let untouched = camera.projection_matrix();
        let flipped = camera.vulkan_projection_matrix();

        assert!(untouched[(1, 1)] > 0.0);
        assert_relative_eq!(flipped[(1, 1)], -untouched[(1, 1)], epsilon = EPSILON);

        // Every other element is unchanged
        for row in 0..4 {
            for col in 0..4 {
                if (row, col) != (1, 1) {
                    assert_relative_eq!(
                        flipped[(row, col)],
                        untouched[(row, col)],
                        epsilon = EPSILON
                    );
                }
            }
        }
    }
}
