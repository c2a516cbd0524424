use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Point of the box closest to `point`
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Check if circle intersects AABB (touching counts)
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        (center - self.nearest_point(center)).length_squared() <= radius * radius
    }
}

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.playfield_width,
            height: config.playfield_height,
        }
    }

    /// Ball launch point
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge that vertically centers an object of `extent` height
    pub fn centered_top(&self, extent: f32) -> f32 {
        (self.height - extent) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_touching_edge_intersects() {
        let rect = Aabb::new(Vec2::new(12.0, 200.0), Vec2::new(24.0, 300.0));
        assert!(rect.intersects_circle(Vec2::new(32.0, 250.0), 8.0));
        assert!(!rect.intersects_circle(Vec2::new(32.1, 250.0), 8.0));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // 6-8-10 triangle from the corner
        assert!(rect.intersects_circle(Vec2::new(16.0, 18.0), 10.0));
        assert!(!rect.intersects_circle(Vec2::new(16.0, 18.0), 9.9));
    }

    #[test]
    fn test_playfield_spawns() {
        let field = Playfield::new(&Config::new());
        assert_eq!(field.ball_spawn(), Vec2::new(400.0, 250.0));
        assert_eq!(field.centered_top(100.0), 200.0);
    }
}
