//! Math utilities and types
//!
//! Provides the fundamental math types for the camera probes. The
//! graphics-convention constructors live in [`Mat4Ext`] because nalgebra's
//! own projection types target OpenGL's [-1, 1] clip depth, while
//! everything here targets Vulkan's [0, 1] range.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with graphics-convention constructors
pub trait Mat4Ext {
    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Create a right-handed perspective projection matrix with [0, 1] depth
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        // Right-handed look-at: camera looks down -Z in view space.
        // The up argument need not be perpendicular to the view direction;
        // the cross products orthonormalize the basis.
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let camera_up = side.cross(&forward);

        let translation = Mat4::new(
            1.0, 0.0, 0.0, -eye.x,
            0.0, 1.0, 0.0, -eye.y,
            0.0, 0.0, 1.0, -eye.z,
            0.0, 0.0, 0.0, 1.0,
        );

        let rotation = Mat4::new(
            side.x, side.y, side.z, 0.0,
            camera_up.x, camera_up.y, camera_up.z, 0.0,
            -forward.x, -forward.y, -forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * translation
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Right-handed, zero-to-one depth:
        //
        // P = [1/(a·tan(φ/2))   0             0            0           ]
        //     [0                1/tan(φ/2)    0            0           ]
        //     [0                0             f/(n-f)      -nf/(f-n)   ]
        //     [0                0             -1           0           ]
        //
        // View-space z = -near lands on depth 0, z = -far on depth 1.
        // [1][1] stays positive; the Vulkan Y-flip is a separate step.
        let tan_half_fovy = (fov_y * 0.5).tan();

        let mut result = Mat4::zeros();
        result[(0, 0)] = 1.0 / (aspect * tan_half_fovy);
        result[(1, 1)] = 1.0 / tan_half_fovy;
        result[(2, 2)] = far / (near - far);
        result[(2, 3)] = -(far * near) / (far - near);
        result[(3, 2)] = -1.0;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_deg_to_rad_round_trip() {
        assert_relative_eq!(utils::deg_to_rad(45.0), constants::PI / 4.0, epsilon = EPSILON);
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(utils::deg_to_rad(63.7)), 63.7, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at_reference_values() {
        // Camera at (2, 2, 2) looking at the origin with a Z-up world.
        let view = Mat4::look_at(
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 1.0),
        );

        let sqrt2_inv = 1.0 / 2.0_f32.sqrt();
        let sqrt3_inv = 1.0 / 3.0_f32.sqrt();
        let sqrt6_inv = 1.0 / 6.0_f32.sqrt();

        let expected = Mat4::new(
            -sqrt2_inv, sqrt2_inv, 0.0, 0.0,
            -sqrt6_inv, -sqrt6_inv, 2.0 * sqrt6_inv, 0.0,
            sqrt3_inv, sqrt3_inv, sqrt3_inv, -6.0 * sqrt3_inv,
            0.0, 0.0, 0.0, 1.0,
        );

        assert_relative_eq!(view, expected, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_basis_is_orthonormal() {
        let view = Mat4::look_at(
            Vec3::new(1.0, -3.0, 2.5),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let rows: Vec<Vec3> = (0..3)
            .map(|r| Vec3::new(view[(r, 0)], view[(r, 1)], view[(r, 2)]))
            .collect();

        for (i, row) in rows.iter().enumerate() {
            assert_relative_eq!(row.norm(), 1.0, epsilon = 1e-5);
            for other in rows.iter().skip(i + 1) {
                assert_relative_eq!(row.dot(other), 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(4.0, -1.0, 7.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

        let mapped = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
        assert_relative_eq!(mapped.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(mapped.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(mapped.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_reference_values() {
        let proj = Mat4::perspective(utils::deg_to_rad(45.0), 1200.0 / 675.0, 0.1, 10.0);

        assert_relative_eq!(proj[(0, 0)], 1.357_995_2, epsilon = 1e-5);
        assert_relative_eq!(proj[(1, 1)], 2.414_213_6, epsilon = 1e-5);
        assert_relative_eq!(proj[(2, 2)], -1.010_101_0, epsilon = 1e-5);
        assert_relative_eq!(proj[(2, 3)], -0.101_010_1, epsilon = 1e-5);
        assert_relative_eq!(proj[(3, 2)], -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_depth_range_is_zero_to_one() {
        let near = 0.1;
        let far = 10.0;
        let proj = Mat4::perspective(utils::deg_to_rad(45.0), 16.0 / 9.0, near, far);

        // A point on the near plane divides out to depth 0.
        let on_near = proj * Vec4::new(0.0, 0.0, -near, 1.0);
        assert_relative_eq!(on_near.z / on_near.w, 0.0, epsilon = 1e-5);

        // A point on the far plane divides out to depth 1.
        let on_far = proj * Vec4::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(on_far.z / on_far.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_y_scale_is_positive() {
        // The untouched projection keeps Y up; flipping it for Vulkan is
        // the caller's explicit step and is verified in the camera tests.
        let proj = Mat4::perspective(utils::deg_to_rad(60.0), 4.0 / 3.0, 0.5, 100.0);
        assert!(proj[(1, 1)] > 0.0);
    }
}
