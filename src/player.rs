//! Player input mapping.
//!
//! Translates keyboard state into [`Command`]s without ever touching the
//! scene directly. Movement is realtime (held keys act every frame);
//! one-shot actions come from the discrete event stream. Bindings are
//! rebindable at runtime.

use glam::Vec2;
use log::info;
use rustc_hash::FxHashMap;

use crate::category::Category;
use crate::command::{Command, CommandQueue};
use crate::platform::{InputEvent, InputQuery, Key};

/// Movement speed of the player aircraft, world units/second.
pub const PLAYER_SPEED: f32 = 200.0;

/// Actions the player can bind keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Log the player position. Debug helper kept on its historical key.
    PrintPosition,
}

impl PlayerAction {
    /// Realtime actions fire from held keys every frame; the rest fire
    /// once per key-press event.
    pub fn is_realtime(self) -> bool {
        matches!(
            self,
            PlayerAction::MoveUp
                | PlayerAction::MoveDown
                | PlayerAction::MoveLeft
                | PlayerAction::MoveRight
        )
    }
}

/// Key bindings plus the command bound to each action.
pub struct Player {
    bindings: FxHashMap<Key, PlayerAction>,
    commands: FxHashMap<PlayerAction, Command>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Arrow-key movement bindings and their movement commands.
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(Key::Up, PlayerAction::MoveUp);
        bindings.insert(Key::Down, PlayerAction::MoveDown);
        bindings.insert(Key::Left, PlayerAction::MoveLeft);
        bindings.insert(Key::Right, PlayerAction::MoveRight);
        bindings.insert(Key::P, PlayerAction::PrintPosition);

        let mut commands = FxHashMap::default();
        commands.insert(PlayerAction::MoveUp, move_command(Vec2::new(0.0, -1.0)));
        commands.insert(PlayerAction::MoveDown, move_command(Vec2::new(0.0, 1.0)));
        commands.insert(PlayerAction::MoveLeft, move_command(Vec2::new(-1.0, 0.0)));
        commands.insert(PlayerAction::MoveRight, move_command(Vec2::new(1.0, 0.0)));
        commands.insert(
            PlayerAction::PrintPosition,
            Command::new(Category::PLAYER_AIRCRAFT, |node, _| {
                let pos = node.transform.position;
                info!("player at {},{}", pos.x, pos.y);
            }),
        );

        Player { bindings, commands }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind_key(&mut self, key: Key, action: PlayerAction) {
        self.bindings.insert(key, action);
    }

    /// First key currently bound to `action`.
    pub fn key_for(&self, action: PlayerAction) -> Option<Key> {
        self.bindings
            .iter()
            .find(|&(_, &a)| a == action)
            .map(|(&key, _)| key)
    }

    /// Replace the command bound to `action`.
    pub fn assign_command(&mut self, action: PlayerAction, command: Command) {
        self.commands.insert(action, command);
    }

    /// React to one discrete event, queueing one-shot commands.
    pub fn handle_event(&mut self, event: &InputEvent, queue: &mut CommandQueue) {
        if let InputEvent::KeyPressed(key) = event
            && let Some(action) = self.bindings.get(key)
            && !action.is_realtime()
            && let Some(command) = self.commands.get(action)
        {
            queue.push(command.clone());
        }
    }

    /// Queue a movement command for every held, bound, realtime key.
    pub fn handle_realtime_input(&self, input: &dyn InputQuery, queue: &mut CommandQueue) {
        for (&key, action) in &self.bindings {
            if action.is_realtime() && input.is_key_down(key) {
                if let Some(command) = self.commands.get(action) {
                    queue.push(command.clone());
                }
            }
        }
    }
}

/// Movement command: translate matching nodes by `dir * speed * dt`.
fn move_command(dir: Vec2) -> Command {
    Command::new(Category::PLAYER_AIRCRAFT, move |node, dt| {
        node.transform.move_by(dir * PLAYER_SPEED * dt);
    })
}
