//! The in-game state: owns the world and feeds it player input.

use log::error;

use crate::platform::{InputEvent, InputQuery, Key};
use crate::render::RenderTarget;
use crate::states::stack::PendingChanges;
use crate::states::{Context, State, StateId};
use crate::world::World;

pub struct GameState {
    world: World,
}

impl GameState {
    /// Build the world eagerly. A texture that fails to load here is a
    /// broken installation; there is nothing to degrade to.
    pub fn new(ctx: &Context) -> Self {
        let world = World::new(ctx.view_size, ctx.scroll_speed, ctx.border_margin)
            .unwrap_or_else(|e| {
                error!("{e}");
                panic!("can't build game world: {e}");
            });
        GameState { world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl State for GameState {
    fn handle_event(
        &mut self,
        ctx: &mut Context,
        event: &InputEvent,
        requests: &mut PendingChanges,
    ) -> bool {
        if let InputEvent::KeyPressed(Key::Escape) = event {
            requests.push_state(StateId::Pause);
            // Swallow the escape so the player mapping never sees it.
            return false;
        }

        ctx.player.handle_event(event, self.world.command_queue_mut());
        true
    }

    fn update(
        &mut self,
        ctx: &mut Context,
        input: &dyn InputQuery,
        dt: f32,
        _requests: &mut PendingChanges,
    ) -> bool {
        ctx.player
            .handle_realtime_input(input, self.world.command_queue_mut());
        self.world.update(dt);
        true
    }

    fn draw(&mut self, _ctx: &Context, target: &mut dyn RenderTarget) {
        self.world.draw(target);
    }
}
