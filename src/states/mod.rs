//! Application screens and the stack that runs them.
//!
//! Each screen is a [`State`]: it owns its presentation and logic, and the
//! [`StateStack`](stack::StateStack) decides who sees events and updates.
//! Screens share a [`Context`] of collaborators instead of globals.
//!
//! Overview
//! - `stack` – pushdown automaton with deferred mutation
//! - `title` – "press any key" splash
//! - `loading` – fake-progress loading screen over a background task
//! - `menu` – Play/Exit menu
//! - `game` – the world itself
//! - `pause` – translucent overlay on top of the game

pub mod game;
pub mod loading;
pub mod menu;
pub mod pause;
pub mod stack;
pub mod title;

use glam::Vec2;

use crate::assets::{fonts, textures};
use crate::platform::{InputEvent, InputQuery};
use crate::player::Player;
use crate::render::RenderTarget;
use crate::resources::ResourceError;
use crate::resources::font::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texture::TextureStore;
use crate::states::stack::PendingChanges;

/// Identifiers of the registered screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Title,
    Loading,
    Menu,
    Game,
    Pause,
}

/// Collaborators shared by every state.
///
/// Owns the UI asset stores and the player bindings; states receive it by
/// reference on every call instead of storing handles.
pub struct Context {
    pub textures: TextureStore,
    pub fonts: FontStore,
    pub player: Player,
    pub view_size: Vec2,
    pub scroll_speed: f32,
    pub border_margin: f32,
}

impl Context {
    /// Load the shared UI assets eagerly. A failure here aborts startup.
    pub fn new(view_size: Vec2, config: &GameConfig) -> Result<Self, ResourceError> {
        let mut ui_textures = TextureStore::new();
        ui_textures.load(textures::MENU)?;
        let mut ui_fonts = FontStore::new();
        ui_fonts.load(fonts::MONO)?;

        Ok(Context {
            textures: ui_textures,
            fonts: ui_fonts,
            player: Player::new(),
            view_size,
            scroll_speed: config.scroll_speed,
            border_margin: config.border_margin,
        })
    }
}

/// One application screen.
///
/// `handle_event` and `update` return `true` to let the dispatch continue
/// to the state below on the stack, `false` to stop it there.
pub trait State {
    fn handle_event(
        &mut self,
        ctx: &mut Context,
        event: &InputEvent,
        requests: &mut PendingChanges,
    ) -> bool;

    fn update(
        &mut self,
        ctx: &mut Context,
        input: &dyn InputQuery,
        dt: f32,
        requests: &mut PendingChanges,
    ) -> bool;

    fn draw(&mut self, ctx: &Context, target: &mut dyn RenderTarget);
}
