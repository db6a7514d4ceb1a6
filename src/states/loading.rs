//! Loading screen: drives a progress bar off the background task and
//! swaps itself for the menu when the task reports completion.
//!
//! The task is a fixed-duration simulation on purpose; see
//! [`crate::task`]. Dropping this state cancels the worker.

use glam::Vec2;

use crate::assets::fonts;
use crate::platform::{InputEvent, InputQuery};
use crate::render::{Color, RenderTarget, TextLabel};
use crate::states::stack::PendingChanges;
use crate::states::{Context, State, StateId};
use crate::task::BackgroundTask;

const BAR_SIZE: Vec2 = Vec2::new(400.0, 10.0);

pub struct LoadingState {
    loading_text: TextLabel,
    bar_position: Vec2,
    completion: f32,
    task: BackgroundTask,
}

impl LoadingState {
    pub fn new(ctx: &Context) -> Self {
        Self::with_task(ctx, BackgroundTask::execute())
    }

    /// Build the screen over an already-running task.
    pub fn with_task(ctx: &Context, task: BackgroundTask) -> Self {
        let center = ctx.view_size / 2.0;
        let mut loading_text = TextLabel::new(fonts::MONO, "Loading Resources...", 30);
        loading_text.center_origin();
        loading_text.position = center;

        LoadingState {
            loading_text,
            bar_position: Vec2::new(center.x - BAR_SIZE.x / 2.0, center.y + 50.0),
            completion: 0.0,
            task,
        }
    }
}

impl State for LoadingState {
    fn handle_event(
        &mut self,
        _ctx: &mut Context,
        _event: &InputEvent,
        _requests: &mut PendingChanges,
    ) -> bool {
        false
    }

    fn update(
        &mut self,
        _ctx: &mut Context,
        _input: &dyn InputQuery,
        _dt: f32,
        requests: &mut PendingChanges,
    ) -> bool {
        if self.task.finished() {
            requests.pop_state();
            requests.push_state(StateId::Menu);
        } else {
            self.completion = self.task.completion();
        }
        false
    }

    fn draw(&mut self, _ctx: &Context, target: &mut dyn RenderTarget) {
        target.clear(Color::BLACK);
        target.draw_text(&self.loading_text);
        target.draw_rect(self.bar_position, BAR_SIZE, Color::WHITE);
        target.draw_rect(
            self.bar_position,
            Vec2::new(BAR_SIZE.x * self.completion.min(1.0), BAR_SIZE.y),
            Color::GREEN,
        );
    }
}
