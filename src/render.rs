//! Abstract drawing surface consumed by the scene graph and the states.
//!
//! Rasterization, textures-in-memory and font shaping live behind this
//! seam; the core only composes transforms and issues draw calls against
//! opaque asset keys. The one in-tree implementation is
//! [`HeadlessWindow`](crate::platform::headless::HeadlessWindow).

use glam::{Affine2, Vec2};

use crate::scene::transform::Rect;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// Camera view: a centered world-space window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: Vec2,
    pub size: Vec2,
}

impl View {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        View { center, size }
    }

    /// World-space rectangle currently visible.
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.center - self.size / 2.0,
            size: self.size,
        }
    }
}

/// A piece of text positioned in view space.
///
/// Bounds are estimated with a monospace advance of 0.6 em; the shipped
/// font is monospace, and exact metrics belong to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub font: &'static str,
    pub string: String,
    pub size: u32,
    pub color: Color,
    pub position: Vec2,
    pub origin: Vec2,
}

impl TextLabel {
    pub fn new(font: &'static str, string: impl Into<String>, size: u32) -> Self {
        TextLabel {
            font,
            string: string.into(),
            size,
            color: Color::WHITE,
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
        }
    }

    /// Estimated glyph-box extents of the whole string.
    pub fn bounds(&self) -> Vec2 {
        let advance = 0.6 * self.size as f32;
        Vec2::new(advance * self.string.chars().count() as f32, self.size as f32)
    }

    /// Move the origin to the middle of the estimated bounds.
    pub fn center_origin(&mut self) {
        self.origin = self.bounds() / 2.0;
    }
}

/// Render target capability: clear, camera selection and draw calls.
pub trait RenderTarget {
    fn clear(&mut self, color: Color);

    /// Select the world/screen transform used by subsequent draws.
    fn set_view(&mut self, view: View);

    fn view(&self) -> View;

    /// Draw `rect` of the texture under the given affine. A rect larger
    /// than the texture tiles it.
    fn draw_sprite(&mut self, texture: &'static str, rect: Rect, transform: Affine2);

    /// Draw a solid rectangle of `size` at `position` (top-left corner).
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Color);

    fn draw_text(&mut self, label: &TextLabel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_bounds_centered() {
        let view = View::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 50.0));
        let bounds = view.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.right(), 200.0);
        assert_eq!(bounds.top(), 75.0);
        assert_eq!(bounds.bottom(), 125.0);
    }

    #[test]
    fn test_text_center_origin() {
        let mut label = TextLabel::new("font", "abcd", 20);
        label.center_origin();
        // 4 chars * 0.6 * 20 = 48 wide, 20 tall.
        assert_eq!(label.origin, Vec2::new(24.0, 10.0));
    }
}
