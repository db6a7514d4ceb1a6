//! Font blobs.
//!
//! Fonts are opaque byte blobs handed to the render backend; shaping and
//! glyph metrics are out of the core's scope. Loading still validates that
//! the file is readable so a missing font fails at startup, not mid-game.

use std::path::Path;

use crate::resources::ResourceError;
use crate::resources::store::{Resource, ResourceStore};

/// Loaded fonts keyed by path.
pub type FontStore = ResourceStore<Font>;

/// Raw font file contents.
pub struct Font {
    bytes: Vec<u8>,
}

impl Font {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Resource for Font {
    fn load(path: &Path) -> Result<Self, ResourceError> {
        let bytes = std::fs::read(path).map_err(|source| ResourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Font { bytes })
    }
}
