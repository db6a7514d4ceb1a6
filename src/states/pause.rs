//! Pause overlay. The game stays on the stack underneath and stops
//! ticking while this state is on top.

use glam::Vec2;

use crate::assets::fonts;
use crate::platform::{InputEvent, InputQuery, Key};
use crate::render::{Color, RenderTarget, TextLabel};
use crate::states::stack::PendingChanges;
use crate::states::{Context, State, StateId};

const OVERLAY_COLOR: Color = Color::rgba(0, 0, 0, 150);

pub struct PauseState {
    paused_text: TextLabel,
    instruction_text: TextLabel,
}

impl PauseState {
    pub fn new(ctx: &Context) -> Self {
        let center = ctx.view_size / 2.0;

        let mut paused_text = TextLabel::new(fonts::MONO, "Game Paused", 50);
        paused_text.center_origin();
        paused_text.position = center - Vec2::new(0.0, 50.0);

        let mut instruction_text = TextLabel::new(
            fonts::MONO,
            "Press Backspace to return to menu, Escape to resume",
            20,
        );
        instruction_text.center_origin();
        instruction_text.position = center + Vec2::new(0.0, 50.0);

        PauseState {
            paused_text,
            instruction_text,
        }
    }
}

impl State for PauseState {
    fn handle_event(
        &mut self,
        _ctx: &mut Context,
        event: &InputEvent,
        requests: &mut PendingChanges,
    ) -> bool {
        if let InputEvent::KeyPressed(key) = event {
            match key {
                Key::Escape => requests.pop_state(),
                Key::Backspace => {
                    requests.clear_states();
                    requests.push_state(StateId::Menu);
                }
                _ => {}
            }
        }
        // Opaque: nothing reaches the game underneath.
        false
    }

    fn update(
        &mut self,
        _ctx: &mut Context,
        _input: &dyn InputQuery,
        _dt: f32,
        _requests: &mut PendingChanges,
    ) -> bool {
        false
    }

    fn draw(&mut self, ctx: &Context, target: &mut dyn RenderTarget) {
        // Dim whatever the game drew underneath.
        let view = target.view();
        target.draw_rect(view.bounds().pos, ctx.view_size, OVERLAY_COLOR);

        // Overlay text is laid out in screen space around the current view.
        let offset = view.bounds().pos;
        let mut paused = self.paused_text.clone();
        paused.position += offset;
        let mut instructions = self.instruction_text.clone();
        instructions.position += offset;
        target.draw_text(&paused);
        target.draw_text(&instructions);
    }
}
