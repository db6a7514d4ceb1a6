//! Generic load-once asset cache.
//!
//! Assets are keyed by their filesystem-path-like identifier, loaded
//! eagerly and looked up by exact key afterwards. Looking up a key that
//! was never loaded is a wiring bug and panics; failing to load is the one
//! recoverable error class of the crate and propagates.

use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;

use crate::resources::ResourceError;

/// An asset that can be constructed from a file.
pub trait Resource: Sized {
    fn load(path: &Path) -> Result<Self, ResourceError>;
}

/// Map of asset keys to loaded assets.
pub struct ResourceStore<R: Resource> {
    map: FxHashMap<&'static str, R>,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Load the asset at `key` (the key is also the path) and cache it.
    pub fn load(&mut self, key: &'static str) -> Result<(), ResourceError> {
        let resource = R::load(Path::new(key))?;
        debug!("loaded resource {key}");
        self.map.insert(key, resource);
        Ok(())
    }

    /// Get a loaded asset. Panics if `key` was never loaded.
    pub fn get(&self, key: &str) -> &R {
        self.map
            .get(key)
            .unwrap_or_else(|| panic!("resource not loaded: {key}"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of loaded assets.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl Resource for Dummy {
        fn load(path: &Path) -> Result<Self, ResourceError> {
            if path.to_string_lossy().contains("missing") {
                Err(ResourceError::Io {
                    path: path.display().to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            } else {
                Ok(Dummy)
            }
        }
    }

    #[test]
    fn test_load_then_get() {
        let mut store: ResourceStore<Dummy> = ResourceStore::new();
        store.load("some/asset").unwrap();
        assert!(store.contains("some/asset"));
        let _ = store.get("some/asset");
    }

    #[test]
    fn test_load_failure_propagates() {
        let mut store: ResourceStore<Dummy> = ResourceStore::new();
        assert!(store.load("missing/asset").is_err());
        assert!(!store.contains("missing/asset"));
    }

    #[test]
    #[should_panic(expected = "resource not loaded")]
    fn test_get_unloaded_panics() {
        let store: ResourceStore<Dummy> = ResourceStore::new();
        let _ = store.get("never/loaded");
    }
}
