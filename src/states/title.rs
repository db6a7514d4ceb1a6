//! Title splash: menu background plus a blinking "press any key" prompt.

use glam::{Affine2, Vec2};

use crate::assets::{fonts, textures};
use crate::platform::{InputEvent, InputQuery};
use crate::render::{RenderTarget, TextLabel};
use crate::scene::transform::Rect;
use crate::states::stack::PendingChanges;
use crate::states::{Context, State, StateId};

const BLINK_INTERVAL: f32 = 0.5;

pub struct TitleState {
    background_rect: Rect,
    text: TextLabel,
    show_text: bool,
    effect_time: f32,
}

impl TitleState {
    pub fn new(ctx: &Context) -> Self {
        let background_size = ctx.textures.get(textures::MENU).size();
        let mut text = TextLabel::new(fonts::MONO, "Press any key to continue", 30);
        text.center_origin();
        text.position = Vec2::new(ctx.view_size.x / 2.0, ctx.view_size.y * 0.8);

        TitleState {
            background_rect: Rect {
                pos: Vec2::ZERO,
                size: background_size,
            },
            text,
            show_text: true,
            effect_time: 0.0,
        }
    }
}

impl State for TitleState {
    fn handle_event(
        &mut self,
        _ctx: &mut Context,
        event: &InputEvent,
        requests: &mut PendingChanges,
    ) -> bool {
        if let InputEvent::KeyPressed(_) = event {
            requests.pop_state();
            requests.push_state(StateId::Loading);
        }
        true
    }

    fn update(
        &mut self,
        _ctx: &mut Context,
        _input: &dyn InputQuery,
        dt: f32,
        _requests: &mut PendingChanges,
    ) -> bool {
        self.effect_time += dt;
        if self.effect_time >= BLINK_INTERVAL {
            self.show_text = !self.show_text;
            self.effect_time = 0.0;
        }
        true
    }

    fn draw(&mut self, _ctx: &Context, target: &mut dyn RenderTarget) {
        target.draw_sprite(textures::MENU, self.background_rect, Affine2::IDENTITY);
        if self.show_text {
            target.draw_text(&self.text);
        }
    }
}
