//! Windowing/input collaborator traits.
//!
//! The core consumes a pollable stream of discrete [`InputEvent`]s plus a
//! realtime "is this key held" query, and draws into the window through
//! its [`RenderTarget`] supertrait. Device polling and rasterization are a
//! backend's job; [`headless`] is the only backend shipped in-tree.

pub mod headless;

use crate::render::RenderTarget;

/// Keys the game binds. Anything else a backend sees maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    P,
    Other,
}

/// Discrete input event delivered once per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    Closed,
}

/// Realtime key-state query, separate from the event stream so held
/// movement keys can act every frame.
pub trait InputQuery {
    fn is_key_down(&self, key: Key) -> bool;
}

/// A window: render target + event feed + frame clock.
pub trait Window: RenderTarget + InputQuery {
    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn is_open(&self) -> bool;

    fn close(&mut self);

    /// Seconds elapsed since the previous frame.
    fn frame_time(&mut self) -> f32;

    /// Finish the current frame.
    fn display(&mut self);
}
