//! Skystrike library.
//!
//! This module exposes the game's scene graph, state stack, world and
//! platform abstractions for use in integration tests and as a reusable
//! library.

pub mod app;
pub mod assets;
pub mod category;
pub mod command;
pub mod platform;
pub mod player;
pub mod render;
pub mod resources;
pub mod scene;
pub mod states;
pub mod task;
pub mod world;
