use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

/// Camera pose handed to the scene-graph adapter once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub look_at: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_projection_maps_target_in_front() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 70.0,
            znear: 0.1,
            zfar: 100.0,
        };

        let clip = camera.build_matrix() * Vec3::ZERO.extend(1.0);
        // The look-at target projects onto the view axis: x = y = 0 and a
        // depth strictly inside the clip range.
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        assert!(clip.z > 0.0 && clip.z < clip.w);
    }
}
