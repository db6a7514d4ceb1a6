//! Asset stores and configuration.
//!
//! Long-lived data loaded once at startup or world construction and looked
//! up by key afterwards. Each submodule documents the semantics of its
//! resource(s).
//!
//! Overview
//! - `store` – generic load-once/lookup-by-key asset cache
//! - `texture` – texture descriptors (PNG-backed)
//! - `font` – opaque font blobs; shaping belongs to the render backend
//! - `gameconfig` – INI-backed startup configuration

pub mod font;
pub mod gameconfig;
pub mod store;
pub mod texture;

use thiserror::Error;

/// Asset loading failure. Surfaces once, at startup or world construction,
/// and aborts with a diagnostic; there is no retry path.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("can't read resource from file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("can't decode texture {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
