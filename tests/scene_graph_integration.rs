//! Integration tests for the scene graph: transform accumulation,
//! targeted command dispatch and detach/reattach round-trips.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test scene_graph_integration
//! ```

use glam::Vec2;

use skystrike::category::Category;
use skystrike::command::Command;
use skystrike::platform::headless::{DrawCall, HeadlessWindow};
use skystrike::scene::SceneGraph;
use skystrike::scene::node::{AircraftKind, Node};
use skystrike::scene::transform::Rect;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPSILON
}

fn sprite_calls(window: &HeadlessWindow) -> Vec<&DrawCall> {
    window
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::Sprite { .. }))
        .collect()
}

// =============================================================================
// Transform accumulation
// =============================================================================

#[test]
fn world_transform_composes_rotation_down_the_tree() {
    let mut graph = SceneGraph::new();
    let parent = graph.add_child(graph.root(), Node::container());
    graph.node_mut(parent).transform.position = Vec2::new(100.0, 100.0);
    graph.node_mut(parent).transform.rotation = 90.0;

    let child = graph.add_child(parent, Node::container());
    graph.node_mut(child).transform.position = Vec2::new(40.0, 0.0);

    let world = graph.world_transform(child).transform_point2(Vec2::ZERO);
    // (40, 0) rotated 90 degrees lands at (0, 40) from the parent.
    assert!(
        approx_eq(world, Vec2::new(100.0, 140.0)),
        "expected (100, 140), got {world:?}"
    );
}

#[test]
fn draw_uses_accumulated_transforms_in_child_order() {
    let mut graph = SceneGraph::new();
    let layer = graph.add_child(graph.root(), Node::container());
    graph.node_mut(layer).transform.position = Vec2::new(10.0, 0.0);

    let first = graph.add_child(layer, Node::sprite("a", Rect::new(0.0, 0.0, 8.0, 8.0)));
    graph.node_mut(first).transform.position = Vec2::new(1.0, 1.0);
    let second = graph.add_child(layer, Node::sprite("b", Rect::new(0.0, 0.0, 8.0, 8.0)));
    graph.node_mut(second).transform.position = Vec2::new(2.0, 2.0);

    let mut window = HeadlessWindow::new(100.0, 100.0);
    graph.draw(&mut window);

    let sprites = sprite_calls(&window);
    assert_eq!(sprites.len(), 2);
    // Insertion order: "a" first (below), "b" second (on top).
    let DrawCall::Sprite { texture, transform, .. } = sprites[0] else {
        unreachable!()
    };
    assert_eq!(*texture, "a");
    assert!(approx_eq(transform.translation, Vec2::new(11.0, 1.0)));
    let DrawCall::Sprite { texture, transform, .. } = sprites[1] else {
        unreachable!()
    };
    assert_eq!(*texture, "b");
    assert!(approx_eq(transform.translation, Vec2::new(12.0, 2.0)));
}

// =============================================================================
// Command dispatch by category
// =============================================================================

#[test]
fn disjoint_category_mutates_nothing() {
    let mut graph = SceneGraph::new();
    let leader = graph.add_child(
        graph.root(),
        Node::aircraft(AircraftKind::Eagle, "eagle", Rect::default()),
    );
    let escort = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );

    let command = Command::new(Category::ENEMY_AIRCRAFT, |node, _| {
        node.transform.move_by(Vec2::new(999.0, 0.0));
    });
    graph.on_command(&command, 1.0);

    assert!(approx_eq(graph.node(leader).transform.position, Vec2::ZERO));
    assert!(approx_eq(graph.node(escort).transform.position, Vec2::ZERO));
}

#[test]
fn player_category_hits_only_player_nodes_in_subtree() {
    let mut graph = SceneGraph::new();
    let leader = graph.add_child(
        graph.root(),
        Node::aircraft(AircraftKind::Eagle, "eagle", Rect::default()),
    );
    // Non-player siblings inside the same subtree.
    let left = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );
    let right = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );

    let command = Command::new(Category::PLAYER_AIRCRAFT, |node, _| {
        node.transform.move_by(Vec2::new(5.0, 0.0));
    });
    graph.on_command(&command, 1.0);

    assert!(approx_eq(graph.node(leader).transform.position, Vec2::new(5.0, 0.0)));
    assert!(approx_eq(graph.node(left).transform.position, Vec2::ZERO));
    assert!(approx_eq(graph.node(right).transform.position, Vec2::ZERO));
}

#[test]
fn shared_category_reaches_every_matching_node() {
    let mut graph = SceneGraph::new();
    let leader = graph.add_child(
        graph.root(),
        Node::aircraft(AircraftKind::Eagle, "eagle", Rect::default()),
    );
    let left = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );
    let right = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );

    let command = Command::new(Category::ALLIED_AIRCRAFT, |node, _| {
        node.transform.move_by(Vec2::new(0.0, -3.0));
    });
    graph.on_command(&command, 1.0);

    assert!(approx_eq(graph.node(leader).transform.position, Vec2::ZERO));
    assert!(approx_eq(graph.node(left).transform.position, Vec2::new(0.0, -3.0)));
    assert!(approx_eq(graph.node(right).transform.position, Vec2::new(0.0, -3.0)));
}

// =============================================================================
// Detach / reattach
// =============================================================================

#[test]
fn detach_then_reattach_is_draw_equivalent() {
    fn build() -> (SceneGraph, skystrike::scene::NodeKey, skystrike::scene::NodeKey) {
        let mut graph = SceneGraph::new();
        let layer = graph.add_child(graph.root(), Node::container());
        let leader = graph.add_child(layer, Node::sprite("eagle", Rect::new(0.0, 0.0, 8.0, 8.0)));
        graph.node_mut(leader).transform.position = Vec2::new(100.0, 100.0);
        let escort = graph.add_child(leader, Node::sprite("raptor", Rect::new(0.0, 0.0, 8.0, 8.0)));
        graph.node_mut(escort).transform.position = Vec2::new(-80.0, 50.0);
        (graph, layer, leader)
    }

    let (untouched, _, _) = build();
    let mut window_a = HeadlessWindow::new(100.0, 100.0);
    untouched.draw(&mut window_a);

    let (mut roundtrip, layer, leader) = build();
    let detached = roundtrip.detach_child(layer, leader);
    roundtrip.attach(layer, detached);
    let mut window_b = HeadlessWindow::new(100.0, 100.0);
    roundtrip.draw(&mut window_b);

    assert_eq!(window_a.calls, window_b.calls);
}

#[test]
fn detached_subtree_keeps_relative_transforms() {
    let mut graph = SceneGraph::new();
    let leader = graph.add_child(graph.root(), Node::container());
    let escort = graph.add_child(leader, Node::container());
    graph.node_mut(escort).transform.position = Vec2::new(-80.0, 50.0);

    let detached = graph.detach_child(graph.root(), leader);
    // Re-home the subtree under a translated parent.
    let new_parent = graph.add_child(graph.root(), Node::container());
    graph.node_mut(new_parent).transform.position = Vec2::new(10.0, 10.0);
    graph.attach(new_parent, detached);

    let world = graph.world_transform(escort).transform_point2(Vec2::ZERO);
    assert!(approx_eq(world, Vec2::new(-70.0, 60.0)));
}

// =============================================================================
// Update traversal
// =============================================================================

#[test]
fn update_integrates_whole_tree_once() {
    let mut graph = SceneGraph::new();
    let leader = graph.add_child(
        graph.root(),
        Node::aircraft(AircraftKind::Eagle, "eagle", Rect::default()),
    );
    let escort = graph.add_child(
        leader,
        Node::aircraft(AircraftKind::Raptor, "raptor", Rect::default()),
    );
    graph.node_mut(leader).set_velocity(Vec2::new(60.0, 0.0));
    graph.node_mut(escort).set_velocity(Vec2::new(0.0, 60.0));

    graph.update(0.5);

    assert!(approx_eq(graph.node(leader).transform.position, Vec2::new(30.0, 0.0)));
    assert!(approx_eq(graph.node(escort).transform.position, Vec2::new(0.0, 30.0)));
}
