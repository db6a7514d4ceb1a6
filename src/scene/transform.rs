//! Local 2D transform attached to every scene node.
//!
//! Position, rotation and scale compose into a single affine matrix via
//! [`Transform2D::affine`]. World transforms are the composition of all
//! ancestor affines in root-to-node order; the scene graph performs that
//! composition during draw and in [`crate::scene::SceneGraph::world_transform`].

use glam::{Affine2, Vec2};

/// Axis-aligned rectangle, position + size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Shrink the rect by `margin` on all four sides.
    pub fn shrink(&self, margin: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Clamp a point into the rect.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }
}

/// Positionable/rotatable/scalable node transform.
///
/// Rotation is in degrees. `origin` is subtracted before the other
/// components apply, so rotation and scaling pivot around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub origin: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    pub fn from_position(x: f32, y: f32) -> Self {
        Transform2D {
            position: Vec2::new(x, y),
            ..Default::default()
        }
    }

    /// Translate by an offset.
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Local affine: translate × rotate × scale × translate(-origin).
    pub fn affine(&self) -> Affine2 {
        Affine2::from_translation(self.position)
            * Affine2::from_angle(self.rotation.to_radians())
            * Affine2::from_scale(self.scale)
            * Affine2::from_translation(-self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_default_affine_is_identity() {
        let t = Transform2D::default();
        let p = t.affine().transform_point2(Vec2::new(3.0, -7.0));
        assert!(approx_eq(p, Vec2::new(3.0, -7.0)));
    }

    #[test]
    fn test_affine_translates() {
        let t = Transform2D::from_position(10.0, 20.0);
        let p = t.affine().transform_point2(Vec2::ZERO);
        assert!(approx_eq(p, Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_rotation_pivots_around_origin() {
        let t = Transform2D {
            rotation: 90.0,
            origin: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        // The origin point itself maps to the node position.
        let p = t.affine().transform_point2(Vec2::new(1.0, 0.0));
        assert!(approx_eq(p, Vec2::ZERO));
    }

    #[test]
    fn test_composition_matches_manual_math() {
        let parent = Transform2D {
            position: Vec2::new(100.0, 100.0),
            rotation: 90.0,
            ..Default::default()
        };
        let child = Transform2D::from_position(40.0, 0.0);
        let world = parent.affine() * child.affine();
        let p = world.transform_point2(Vec2::ZERO);
        // Child offset (40, 0) rotated 90 degrees lands at (0, 40) from parent.
        assert!(approx_eq(p, Vec2::new(100.0, 140.0)));
    }

    #[test]
    fn test_rect_shrink_and_clamp() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0).shrink(40.0);
        assert_eq!(r.left(), 40.0);
        assert_eq!(r.right(), 60.0);
        let clamped = r.clamp_point(Vec2::new(-5.0, 200.0));
        assert_eq!(clamped, Vec2::new(40.0, 60.0));
    }
}
