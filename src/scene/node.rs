//! Scene node data: transform, role category and a closed set of kinds.
//!
//! Node kinds are a tagged enum rather than trait objects; the kind set of
//! this game is small and closed, and pattern matching keeps update/draw
//! dispatch in one place (`SceneGraph`).

use glam::Vec2;
use smallvec::SmallVec;

use crate::category::Category;
use crate::scene::NodeKey;
use crate::scene::transform::{Rect, Transform2D};

/// Texture key + sub-rectangle drawn by a sprite-bearing node.
///
/// A rect larger than the texture asks the render backend to tile it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDef {
    pub texture: &'static str,
    pub rect: Rect,
}

/// Aircraft variants. Only the Eagle answers to player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftKind {
    Eagle,
    Raptor,
}

/// Closed set of node kinds.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Pure grouping node, draws nothing.
    Container,
    /// Static sprite.
    Sprite(SpriteDef),
    /// Moving entity with a sprite and a velocity integrated each tick.
    Aircraft {
        kind: AircraftKind,
        sprite: SpriteDef,
        velocity: Vec2,
    },
}

/// A single node of the scene graph.
///
/// Parent and child links are arena keys owned by
/// [`SceneGraph`](crate::scene::SceneGraph); they are never set directly.
#[derive(Debug, Clone)]
pub struct Node {
    pub transform: Transform2D,
    kind: NodeKind,
    pub(super) parent: Option<NodeKey>,
    pub(super) children: SmallVec<[NodeKey; 4]>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node {
            transform: Transform2D::default(),
            kind,
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn container() -> Self {
        Node::new(NodeKind::Container)
    }

    pub fn sprite(texture: &'static str, rect: Rect) -> Self {
        Node::new(NodeKind::Sprite(SpriteDef { texture, rect }))
    }

    pub fn aircraft(kind: AircraftKind, texture: &'static str, rect: Rect) -> Self {
        Node::new(NodeKind::Aircraft {
            kind,
            sprite: SpriteDef { texture, rect },
            velocity: Vec2::ZERO,
        })
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Role of this node for command dispatch, fixed by its kind.
    pub fn category(&self) -> Category {
        match &self.kind {
            NodeKind::Container | NodeKind::Sprite(_) => Category::SCENE,
            NodeKind::Aircraft { kind, .. } => match kind {
                AircraftKind::Eagle => Category::PLAYER_AIRCRAFT,
                AircraftKind::Raptor => Category::ALLIED_AIRCRAFT,
            },
        }
    }

    /// Current velocity; zero for kinds that do not move.
    pub fn velocity(&self) -> Vec2 {
        match self.kind {
            NodeKind::Aircraft { velocity, .. } => velocity,
            _ => Vec2::ZERO,
        }
    }

    /// Set the velocity of an entity kind. Ignored for non-entities.
    pub fn set_velocity(&mut self, v: Vec2) {
        if let NodeKind::Aircraft { velocity, .. } = &mut self.kind {
            *velocity = v;
        }
    }

    /// Add to the velocity of an entity kind.
    pub fn accelerate(&mut self, delta: Vec2) {
        if let NodeKind::Aircraft { velocity, .. } = &mut self.kind {
            *velocity += delta;
        }
    }

    /// Per-tick self update: entities integrate velocity.
    pub(super) fn update_current(&mut self, dt: f32) {
        if let NodeKind::Aircraft { velocity, .. } = self.kind {
            self.transform.move_by(velocity * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_fixed_by_kind() {
        let eagle = Node::aircraft(AircraftKind::Eagle, "tex", Rect::default());
        let raptor = Node::aircraft(AircraftKind::Raptor, "tex", Rect::default());
        assert_eq!(eagle.category(), Category::PLAYER_AIRCRAFT);
        assert_eq!(raptor.category(), Category::ALLIED_AIRCRAFT);
        assert_eq!(Node::container().category(), Category::SCENE);
    }

    #[test]
    fn test_velocity_integration() {
        let mut n = Node::aircraft(AircraftKind::Eagle, "tex", Rect::default());
        n.set_velocity(Vec2::new(100.0, -50.0));
        n.update_current(0.5);
        assert_eq!(n.transform.position, Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_container_ignores_velocity() {
        let mut n = Node::container();
        n.set_velocity(Vec2::new(100.0, 100.0));
        n.update_current(1.0);
        assert_eq!(n.velocity(), Vec2::ZERO);
        assert_eq!(n.transform.position, Vec2::ZERO);
    }

    #[test]
    fn test_accelerate_accumulates() {
        let mut n = Node::aircraft(AircraftKind::Eagle, "tex", Rect::default());
        n.accelerate(Vec2::new(10.0, 0.0));
        n.accelerate(Vec2::new(0.0, 5.0));
        assert_eq!(n.velocity(), Vec2::new(10.0, 5.0));
    }
}
