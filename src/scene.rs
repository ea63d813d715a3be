//! Demo scene: a spinning model seen through a look-at camera
//!
//! Builds the world, view and projection matrices from [`AppConfig`] and
//! projects the configured points to normalized device coordinates.

use axial_math::{Matrix4, Quaternion, RectF, RectI32, Vector3};

use crate::config::AppConfig;

/// Matrices for one frame of the demo
#[derive(Debug, Clone)]
pub struct Scene {
    /// Model transform: scale, then spin
    pub world: Matrix4,
    /// Camera transform
    pub view: Matrix4,
    /// Perspective projection for the viewport
    pub projection: Matrix4,
    /// Orthographic projection for the viewport
    pub ortho: Matrix4,
    /// Viewport in pixels, origin bottom-left
    pub viewport: RectF,
    points: Vec<Vector3>,
}

impl Scene {
    pub fn from_config(config: &AppConfig) -> Self {
        let camera = &config.camera;
        let viewport = &config.viewport;

        let spin = Quaternion::rotate_axis(config.scene.spin_degrees.to_radians(), config.scene.spin_axis());
        let mut world = Matrix4::scale_transform(config.scene.scale);
        world.append_transform(&Matrix4::rotate_transform(spin));

        let view = Matrix4::look_at(camera.eye(), camera.target(), camera.up());
        let projection = Matrix4::perspective_project_size(
            camera.fov.to_radians(),
            viewport.width,
            viewport.height,
            camera.near,
            camera.far,
            camera.flip_y,
        );
        let ortho = Matrix4::orth_project(viewport.width, viewport.height, viewport.ortho_near, viewport.ortho_far);
        let pixels = RectI32::new(
            0,
            i32::try_from(viewport.width).unwrap_or(i32::MAX),
            i32::try_from(viewport.height).unwrap_or(i32::MAX),
            0,
        );

        Self {
            world,
            view,
            projection,
            ortho,
            viewport: pixels.into(),
            points: config.scene.points().collect(),
        }
    }

    /// Combined `projection · view · world`
    pub fn world_view_projection(&self) -> Matrix4 {
        self.projection * self.view * self.world
    }

    /// Points in normalized device coordinates, after the perspective divide
    pub fn project(&self) -> Vec<Vector3> {
        let wvp = self.world_view_projection();
        self.points.iter().map(|&p| wvp * p).collect()
    }

    /// Points projected orthographically, camera still applied
    pub fn project_ortho(&self) -> Vec<Vector3> {
        let wvp = self.ortho * self.view * self.world;
        self.points.iter().map(|&p| wvp * p).collect()
    }

    /// Orthographic projection mapping viewport pixels onto the screen,
    /// for overlays drawn in screen space
    pub fn screen_projection(&self) -> Matrix4 {
        Matrix4::orth_project_rect(&self.viewport, -1.0, 1.0)
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }
}
