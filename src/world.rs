//! The in-game world: scene tree, camera and per-frame simulation step.
//!
//! Owns the scene graph, the textures it draws, the camera view and the
//! command queue. The per-frame order is fixed: drain commands, normalize
//! the player's velocity, integrate, clamp the player into view, recenter
//! the camera. Commands queued during one input phase therefore always
//! affect that same frame's movement.

use glam::Vec2;
use log::{debug, warn};

use crate::assets::textures;
use crate::command::CommandQueue;
use crate::render::{RenderTarget, View};
use crate::resources::ResourceError;
use crate::resources::texture::TextureStore;
use crate::scene::node::{AircraftKind, Node};
use crate::scene::transform::Rect;
use crate::scene::{NodeKey, SceneGraph};

/// Fixed ordering layers, direct children of the scene root. Draw order is
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Air,
}

const LAYER_COUNT: usize = 2;

/// Total scrollable height of the world, in world units.
const WORLD_HEIGHT: f32 = 2000.0;

/// Escort offsets relative to the player aircraft.
const ESCORT_OFFSETS: [Vec2; 2] = [Vec2::new(-80.0, 50.0), Vec2::new(80.0, 50.0)];

pub struct World {
    graph: SceneGraph,
    textures: TextureStore,
    view: View,
    world_bounds: Rect,
    spawn_position: Vec2,
    scroll_speed: f32,
    border_margin: f32,
    layers: [NodeKey; LAYER_COUNT],
    player: NodeKey,
    command_queue: CommandQueue,
}

impl World {
    /// Build the world for a view of `view_size`.
    ///
    /// Loads every texture the scene needs before the first frame; a load
    /// failure propagates and aborts construction.
    pub fn new(view_size: Vec2, scroll_speed: f32, border_margin: f32) -> Result<Self, ResourceError> {
        // A margin past half the view would invert the playable rect.
        let max_margin = view_size.min_element() / 2.0;
        let border_margin = if border_margin > max_margin {
            warn!("border margin {border_margin} exceeds half the view, clamping to {max_margin}");
            max_margin
        } else {
            border_margin
        };

        let mut textures = TextureStore::new();
        textures.load(textures::SPACE)?;
        textures.load(textures::EAGLE)?;
        textures.load(textures::RAPTOR)?;

        let world_bounds = Rect::new(0.0, 0.0, view_size.x, WORLD_HEIGHT);
        let spawn_position = Vec2::new(
            world_bounds.size.x / 2.0,
            world_bounds.size.y - view_size.y / 2.0,
        );

        let mut graph = SceneGraph::new();
        let layers = [
            graph.add_child(graph.root(), Node::container()),
            graph.add_child(graph.root(), Node::container()),
        ];

        // Background sprite tiled over the whole scrollable area.
        let background_rect = Rect {
            pos: Vec2::ZERO,
            size: world_bounds.size,
        };
        let background = graph.add_child(
            layers[Layer::Background as usize],
            Node::sprite(textures::SPACE, background_rect),
        );
        graph.node_mut(background).transform.position = world_bounds.pos;

        let eagle_size = textures.get(textures::EAGLE).size();
        let player = graph.add_child(
            layers[Layer::Air as usize],
            Node::aircraft(
                AircraftKind::Eagle,
                textures::EAGLE,
                Rect { pos: Vec2::ZERO, size: eagle_size },
            ),
        );
        graph.node_mut(player).transform.position = spawn_position;
        graph.node_mut(player).set_velocity(Vec2::new(0.0, scroll_speed));

        let raptor_size = textures.get(textures::RAPTOR).size();
        for offset in ESCORT_OFFSETS {
            let escort = graph.add_child(
                player,
                Node::aircraft(
                    AircraftKind::Raptor,
                    textures::RAPTOR,
                    Rect { pos: Vec2::ZERO, size: raptor_size },
                ),
            );
            graph.node_mut(escort).transform.position = offset;
        }

        debug!("world built, spawn at {spawn_position:?}");

        Ok(World {
            graph,
            textures,
            view: View::new(spawn_position, view_size),
            world_bounds,
            spawn_position,
            scroll_speed,
            border_margin,
            layers,
            player,
            command_queue: CommandQueue::new(),
        })
    }

    /// One simulation step.
    pub fn update(&mut self, dt: f32) {
        // Queued commands apply strictly before integration.
        while !self.command_queue.is_empty() {
            let command = self.command_queue.pop();
            self.graph.on_command(&command, dt);
        }

        // Diagonal movement must not exceed axial speed.
        let velocity = self.graph.node(self.player).velocity();
        if velocity.x != 0.0 && velocity.y != 0.0 {
            self.graph
                .node_mut(self.player)
                .set_velocity(velocity / std::f32::consts::SQRT_2);
        }

        self.graph.update(dt);

        // The player never leaves the visible viewport.
        let playable = self.view.bounds().shrink(self.border_margin);
        let position = self.graph.node(self.player).transform.position;
        let clamped = playable.clamp_point(position);
        self.graph.node_mut(self.player).transform.position = clamped;

        self.view.center = clamped;
    }

    /// Select the camera view and draw the whole tree.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.set_view(self.view);
        self.graph.draw(target);
    }

    pub fn command_queue_mut(&mut self) -> &mut CommandQueue {
        &mut self.command_queue
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// The player aircraft. Always a live key into the owned tree.
    pub fn player(&self) -> NodeKey {
        self.player
    }

    pub fn layer(&self, layer: Layer) -> NodeKey {
        self.layers[layer as usize]
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn bounds(&self) -> Rect {
        self.world_bounds
    }

    pub fn spawn_position(&self) -> Vec2 {
        self.spawn_position
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn textures(&self) -> &TextureStore {
        &self.textures
    }
}
