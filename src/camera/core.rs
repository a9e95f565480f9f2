use glam::{Mat4, Vec3};

/// Perspective camera defined by a position, a look-at target, and
/// projection parameters.
///
/// Trackers only ever write `position` and `target`; the projection fields
/// belong to whoever owns the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
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

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` looking down -Z, with default projection.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            target: position + Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 45.0,
            znear: 5.0,
            zfar: 2000.0,
        }
    }

    /// Point the camera at `target`.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit vector from the position toward the look-at target.
    ///
    /// Falls back to -Z when the two coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up)
    }

    /// Projection matrix with a [0,1] depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}
