//! Name-to-image resolution.

use std::collections::HashMap;

use gridtile_core::VolumeImage;

/// Resolves image names to host volumes.
///
/// Callers inject an implementation instead of the operations reaching into
/// process-wide state; tests and the CLI use [`MemoryStore`], an embedding
/// application can adapt whatever image catalog it already has.
pub trait ImageStore {
    /// Looks up an image by name. `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<&VolumeImage>;
}

/// In-memory image store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    images: HashMap<String, VolumeImage>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an image under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, image: VolumeImage) {
        self.images.insert(name.into(), image);
    }

    /// Removes an image, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<VolumeImage> {
        self.images.remove(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no images are stored.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageStore for MemoryStore {
    fn resolve(&self, name: &str) -> Option<&VolumeImage> {
        self.images.get(name)
    }
}
