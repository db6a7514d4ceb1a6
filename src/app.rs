//! Top-level application driver.
//!
//! Owns the window, the shared [`Context`] and the [`StateStack`], and
//! runs the poll-input → update → render loop until the window closes or
//! the stack empties.

use glam::Vec2;
use log::info;

use crate::platform::{InputEvent, Window};
use crate::render::Color;
use crate::resources::ResourceError;
use crate::resources::gameconfig::GameConfig;
use crate::states::game::GameState;
use crate::states::loading::LoadingState;
use crate::states::menu::MenuState;
use crate::states::pause::PauseState;
use crate::states::stack::StateStack;
use crate::states::title::TitleState;
use crate::states::{Context, StateId};

pub struct App<W: Window> {
    window: W,
    ctx: Context,
    stack: StateStack,
}

impl<W: Window> App<W> {
    /// Wire the shared context and the state registry, then enter on the
    /// title screen. Fails if the shared UI assets cannot load.
    pub fn new(window: W, config: &GameConfig) -> Result<Self, ResourceError> {
        let view_size = Vec2::new(config.window_width as f32, config.window_height as f32);
        let ctx = Context::new(view_size, config)?;

        let mut stack = StateStack::new();
        register_states(&mut stack);
        stack.push_state(StateId::Title);

        let mut app = App { window, ctx, stack };
        app.stack.apply_pending_changes(&mut app.ctx);
        Ok(app)
    }

    /// Drain the window's event queue into the stack.
    pub fn process_events(&mut self) {
        while let Some(event) = self.window.poll_event() {
            if event == InputEvent::Closed {
                self.window.close();
            }
            self.stack.handle_event(&mut self.ctx, &event);
        }
    }

    pub fn update(&mut self, dt: f32) {
        let App { window, ctx, stack } = self;
        stack.update(ctx, &*window, dt);
    }

    pub fn render(&mut self) {
        let App { window, ctx, stack } = self;
        window.clear(Color::BLACK);
        stack.draw(ctx, &mut *window);
        window.display();
    }

    /// Main loop. Returns when the window closes, which includes the
    /// stack emptying (Exit in the menu).
    pub fn run(&mut self) {
        while self.window.is_open() {
            let dt = self.window.frame_time();
            self.process_events();
            self.update(dt);
            if self.stack.is_empty() {
                info!("state stack empty, shutting down");
                self.window.close();
            }
            self.render();
        }
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }
}

/// Associate every [`StateId`] with its constructor.
fn register_states(stack: &mut StateStack) {
    stack.register_state(StateId::Title, |ctx| Box::new(TitleState::new(ctx)));
    stack.register_state(StateId::Loading, |ctx| Box::new(LoadingState::new(ctx)));
    stack.register_state(StateId::Menu, |ctx| Box::new(MenuState::new(ctx)));
    stack.register_state(StateId::Game, |ctx| Box::new(GameState::new(ctx)));
    stack.register_state(StateId::Pause, |ctx| Box::new(PauseState::new(ctx)));
}
