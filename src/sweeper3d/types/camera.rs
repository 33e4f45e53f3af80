//! Camera-related types and components

use bevy::prelude::*;

use super::block::BLOCK_W;

/// Where the camera starts, looking at the origin
pub const CAMERA_START: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Zoom of the orthographic view, 1.0 fits the whole board
#[derive(Resource, Debug, Clone, Copy)]
pub struct ZoomState {
    pub level: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

impl ZoomState {
    pub const MIN: f32 = 0.4;
    pub const MAX: f32 = 2.0;

    /// Viewport height that fits a board of `side` blocks at this zoom.
    pub fn viewport_height(&self, side: usize) -> f32 {
        // Looking down the diagonal, the board spans roughly side * width * sqrt(2)
        let board_span = side.max(1) as f32 * BLOCK_W * std::f32::consts::SQRT_2;
        board_span * 0.9 * self.level.clamp(Self::MIN, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_grows_with_board() {
        let zoom = ZoomState::default();
        assert!(zoom.viewport_height(6) < zoom.viewport_height(14));
    }

    #[test]
    fn test_viewport_zoom_is_clamped() {
        let wide = ZoomState { level: 100.0 };
        let max = ZoomState { level: ZoomState::MAX };
        assert_eq!(wide.viewport_height(10), max.viewport_height(10));
    }
}
