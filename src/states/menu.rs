//! Main menu: Play starts the game, Exit clears the stack (which the
//! application loop reads as "quit").

use glam::Vec2;

use crate::assets::fonts;
use crate::platform::{InputEvent, InputQuery, Key};
use crate::render::{Color, RenderTarget, TextLabel};
use crate::states::stack::PendingChanges;
use crate::states::{Context, State, StateId};

/// Menu entries, in display order.
const OPTION_PLAY: usize = 0;
const OPTION_EXIT: usize = 1;

pub struct MenuState {
    options: Vec<TextLabel>,
    option_index: usize,
}

impl MenuState {
    pub fn new(ctx: &Context) -> Self {
        let center = ctx.view_size / 2.0;

        let mut play = TextLabel::new(fonts::MONO, "Play", 30);
        play.center_origin();
        play.position = center - Vec2::new(0.0, 50.0);

        let mut exit = TextLabel::new(fonts::MONO, "Exit", 30);
        exit.center_origin();
        exit.position = center + Vec2::new(0.0, 50.0);

        let mut menu = MenuState {
            options: vec![play, exit],
            option_index: OPTION_PLAY,
        };
        menu.update_option_text();
        menu
    }

    fn update_option_text(&mut self) {
        for option in &mut self.options {
            option.color = Color::WHITE;
        }
        self.options[self.option_index].color = Color::RED;
    }
}

impl State for MenuState {
    fn handle_event(
        &mut self,
        _ctx: &mut Context,
        event: &InputEvent,
        requests: &mut PendingChanges,
    ) -> bool {
        let InputEvent::KeyPressed(key) = event else {
            return false;
        };
        match key {
            Key::Up => {
                self.option_index = if self.option_index > 0 {
                    self.option_index - 1
                } else {
                    self.options.len() - 1
                };
                self.update_option_text();
            }
            Key::Down => {
                self.option_index = (self.option_index + 1) % self.options.len();
                self.update_option_text();
            }
            Key::Enter => match self.option_index {
                OPTION_PLAY => {
                    requests.pop_state();
                    requests.push_state(StateId::Game);
                }
                OPTION_EXIT => requests.clear_states(),
                _ => {}
            },
            _ => {}
        }
        true
    }

    fn update(
        &mut self,
        _ctx: &mut Context,
        _input: &dyn InputQuery,
        _dt: f32,
        _requests: &mut PendingChanges,
    ) -> bool {
        // The menu is fully opaque; nothing below it ticks.
        false
    }

    fn draw(&mut self, _ctx: &Context, target: &mut dyn RenderTarget) {
        for option in &self.options {
            target.draw_text(option);
        }
    }
}
