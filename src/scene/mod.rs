//! Arena-backed scene graph.
//!
//! Nodes live in a [`SlotMap`] and reference each other by [`NodeKey`];
//! parent links point up, ordered child lists point down. Keeping the tree
//! in an arena makes acyclicity structural: a node enters the tree either
//! freshly inserted or explicitly detached first, never aliased.
//!
//! Traversal order is child insertion order everywhere (update, draw,
//! command dispatch), so sibling processing is deterministic and later
//! children draw on top.

pub mod node;
pub mod transform;

use glam::Affine2;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::command::Command;
use crate::render::RenderTarget;
use crate::scene::node::{Node, NodeKind};

new_key_type! {
    /// Arena key identifying a scene node.
    pub struct NodeKey;
}

/// Tree of transformable, drawable, updatable nodes.
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a graph holding a single container root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::container());
        SceneGraph { nodes, root }
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> &Node {
        &self.nodes[key]
    }

    pub fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key]
    }

    /// Insert a node without linking it to the tree.
    pub fn insert(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Insert `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeKey, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.attach(parent, key);
        key
    }

    /// Link a detached node under `parent`, at the end of the child list.
    ///
    /// Precondition (unchecked): `child` must not be an ancestor of
    /// `parent`.
    pub fn attach(&mut self, parent: NodeKey, child: NodeKey) {
        debug_assert!(
            self.nodes[child].parent.is_none(),
            "attach: node already has a parent"
        );
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Unlink `child` from `parent` and return its key.
    ///
    /// The subtree stays in the arena; reattach it with [`attach`] or drop
    /// it with [`remove`]. Panics if `child` is not a child of `parent`
    /// (that is a wiring bug, not a recoverable condition).
    ///
    /// [`attach`]: SceneGraph::attach
    /// [`remove`]: SceneGraph::remove
    pub fn detach_child(&mut self, parent: NodeKey, child: NodeKey) -> NodeKey {
        let pos = self.nodes[parent]
            .children
            .iter()
            .position(|&k| k == child)
            .expect("detach_child: node is not a child of the given parent");
        self.nodes[parent].children.remove(pos);
        self.nodes[child].parent = None;
        child
    }

    /// Drop `key` and its whole subtree from the arena.
    pub fn remove(&mut self, key: NodeKey) {
        if let Some(parent) = self.nodes[key].parent {
            let children = &mut self.nodes[parent].children;
            if let Some(pos) = children.iter().position(|&k| k == key) {
                children.remove(pos);
            }
        }
        self.remove_subtree(key);
    }

    fn remove_subtree(&mut self, key: NodeKey) {
        let children = std::mem::take(&mut self.nodes[key].children);
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes.remove(key);
    }

    /// Advance the whole tree by `dt` seconds, self before children.
    pub fn update(&mut self, dt: f32) {
        self.update_node(self.root, dt);
    }

    fn update_node(&mut self, key: NodeKey, dt: f32) {
        self.nodes[key].update_current(dt);
        let children: SmallVec<[NodeKey; 4]> = self.nodes[key].children.clone();
        for child in children {
            self.update_node(child, dt);
        }
    }

    /// Dispatch a command through the tree.
    ///
    /// A node acts iff its category intersects the command's filter; the
    /// recursion into children is unconditional, so several nodes in one
    /// subtree can share a category and all receive the command.
    pub fn on_command(&mut self, command: &Command, dt: f32) {
        self.command_node(self.root, command, dt);
    }

    fn command_node(&mut self, key: NodeKey, command: &Command, dt: f32) {
        let node = &mut self.nodes[key];
        if node.category().intersects(command.category) {
            (command.action)(node, dt);
        }
        let children: SmallVec<[NodeKey; 4]> = self.nodes[key].children.clone();
        for child in children {
            self.command_node(child, command, dt);
        }
    }

    /// Draw the tree with accumulated transforms, in child order.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        self.draw_node(self.root, Affine2::IDENTITY, target);
    }

    fn draw_node(&self, key: NodeKey, inherited: Affine2, target: &mut dyn RenderTarget) {
        let node = &self.nodes[key];
        let affine = inherited * node.transform.affine();
        match node.kind() {
            NodeKind::Container => {}
            NodeKind::Sprite(sprite) | NodeKind::Aircraft { sprite, .. } => {
                target.draw_sprite(sprite.texture, sprite.rect, affine);
            }
        }
        for &child in node.children() {
            self.draw_node(child, affine, target);
        }
    }

    /// Compose the ancestor transforms of `key` in root-to-node order.
    pub fn world_transform(&self, key: NodeKey) -> Affine2 {
        let mut affine = self.nodes[key].transform.affine();
        let mut cursor = self.nodes[key].parent;
        while let Some(parent) = cursor {
            affine = self.nodes[parent].transform.affine() * affine;
            cursor = self.nodes[parent].parent;
        }
        affine
    }
}
