//! Texture descriptors.
//!
//! The core never touches pixels; it only needs to know that the file
//! exists, decodes, and how big it is (for layout and background tiling).
//! Pixel upload is the render backend's concern.

use std::path::Path;

use glam::Vec2;

use crate::resources::ResourceError;
use crate::resources::store::{Resource, ResourceStore};

/// Loaded textures keyed by path.
pub type TextureStore = ResourceStore<Texture>;

/// A validated texture: path checked, dimensions read from the PNG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Resource for Texture {
    fn load(path: &Path) -> Result<Self, ResourceError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|source| ResourceError::Decode {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Texture { width, height })
    }
}
