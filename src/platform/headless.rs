//! Headless window backend.
//!
//! Records every draw call instead of rasterizing and serves scripted
//! input events. Used as the development backend of the binary (with an
//! optional frame budget) and as the test double of the integration tests.

use std::collections::VecDeque;

use glam::{Affine2, Vec2};
use log::trace;
use rustc_hash::FxHashSet;

use crate::platform::{InputEvent, InputQuery, Key, Window};
use crate::render::{Color, RenderTarget, TextLabel, View};
use crate::scene::transform::Rect;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    SetView(View),
    Sprite {
        texture: &'static str,
        rect: Rect,
        transform: Affine2,
    },
    Rect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    Text(TextLabel),
}

/// Window that draws nothing and remembers everything.
pub struct HeadlessWindow {
    size: Vec2,
    view: View,
    open: bool,
    events: VecDeque<InputEvent>,
    held: FxHashSet<Key>,
    frame_budget: Option<u64>,
    frames: u64,
    frame_time: f32,
    pub calls: Vec<DrawCall>,
}

impl HeadlessWindow {
    /// Default fixed timestep reported by [`Window::frame_time`].
    pub const FRAME_TIME: f32 = 1.0 / 60.0;

    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        HeadlessWindow {
            size,
            view: View::new(size / 2.0, size),
            open: true,
            events: VecDeque::new(),
            held: FxHashSet::default(),
            frame_budget: None,
            frames: 0,
            frame_time: Self::FRAME_TIME,
            calls: Vec::new(),
        }
    }

    /// Close automatically after `frames` frames.
    pub fn with_frame_budget(mut self, frames: u64) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    /// Report a fixed timestep of `1 / fps` seconds.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.frame_time = 1.0 / fps.max(1) as f32;
        self
    }

    /// Queue a discrete event for the next poll.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Mark a key as held for realtime queries.
    pub fn press_key(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop all recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RenderTarget for HeadlessWindow {
    fn clear(&mut self, color: Color) {
        trace!("clear {color:?}");
        self.calls.push(DrawCall::Clear(color));
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
        self.calls.push(DrawCall::SetView(view));
    }

    fn view(&self) -> View {
        self.view
    }

    fn draw_sprite(&mut self, texture: &'static str, rect: Rect, transform: Affine2) {
        trace!("sprite {texture} at {:?}", transform.translation);
        self.calls.push(DrawCall::Sprite {
            texture,
            rect,
            transform,
        });
    }

    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::Rect {
            position,
            size,
            color,
        });
    }

    fn draw_text(&mut self, label: &TextLabel) {
        trace!("text {:?}", label.string);
        self.calls.push(DrawCall::Text(label.clone()));
    }
}

impl InputQuery for HeadlessWindow {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl Window for HeadlessWindow {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn frame_time(&mut self) -> f32 {
        self.frame_time
    }

    fn display(&mut self) {
        self.frames += 1;
        if let Some(budget) = self.frame_budget
            && self.frames >= budget
        {
            trace!("frame budget of {budget} exhausted, closing");
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_poll_in_order() {
        let mut window = HeadlessWindow::new(640.0, 360.0);
        window.push_event(InputEvent::KeyPressed(Key::Enter));
        window.push_event(InputEvent::Closed);
        assert_eq!(
            window.poll_event(),
            Some(InputEvent::KeyPressed(Key::Enter))
        );
        assert_eq!(window.poll_event(), Some(InputEvent::Closed));
        assert_eq!(window.poll_event(), None);
    }

    #[test]
    fn test_held_keys() {
        let mut window = HeadlessWindow::new(640.0, 360.0);
        assert!(!window.is_key_down(Key::Left));
        window.press_key(Key::Left);
        assert!(window.is_key_down(Key::Left));
        window.release_key(Key::Left);
        assert!(!window.is_key_down(Key::Left));
    }

    #[test]
    fn test_target_fps_sets_frame_time() {
        let mut window = HeadlessWindow::new(640.0, 360.0).with_target_fps(30);
        assert_eq!(window.frame_time(), 1.0 / 30.0);
        let mut default = HeadlessWindow::new(640.0, 360.0);
        assert_eq!(default.frame_time(), HeadlessWindow::FRAME_TIME);
    }

    #[test]
    fn test_frame_budget_closes_window() {
        let mut window = HeadlessWindow::new(640.0, 360.0).with_frame_budget(2);
        window.display();
        assert!(window.is_open());
        window.display();
        assert!(!window.is_open());
    }
}
