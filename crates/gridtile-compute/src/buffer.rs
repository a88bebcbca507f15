//! Device buffer handles and the named-buffer registry.

use std::collections::HashMap;

use gridtile_core::{ElementType, ImageExtent};

use crate::{ComputeError, ComputeResult};

/// Opaque handle to a device-resident buffer.
///
/// Carries everything needed to describe the buffer without its pixel data:
/// dimensions and element type. Dimensions may be zero when the buffer was
/// produced from degenerate tile geometry.
#[derive(Clone)]
pub struct DeviceBuffer {
    /// Raw values held on behalf of the device.
    pub(crate) data: Vec<f32>,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Depth in slices.
    pub depth: i32,
    /// Element type of the device-side storage.
    pub element_type: ElementType,
}

impl DeviceBuffer {
    /// Creates a zero-filled buffer of the given dimensions.
    ///
    /// Non-positive dimensions collapse to an empty buffer.
    pub fn new(width: i32, height: i32, depth: i32, element_type: ElementType) -> Self {
        let len = width.max(0) as usize * height.max(0) as usize * depth.max(0) as usize;
        Self {
            data: vec![0.0; len],
            width,
            height,
            depth,
            element_type,
        }
    }

    /// Creates a buffer holding the given values.
    pub(crate) fn from_data(
        data: Vec<f32>,
        width: i32,
        height: i32,
        depth: i32,
        element_type: ElementType,
    ) -> Self {
        Self {
            data,
            width,
            height,
            depth,
            element_type,
        }
    }

    /// Declared dimensions as an extent.
    pub fn extent(&self) -> ImageExtent {
        ImageExtent::new(self.width, self.height, self.depth)
    }

    /// 2 for single-slice buffers, 3 otherwise.
    pub fn dimension(&self) -> u32 {
        if self.depth <= 1 { 2 } else { 3 }
    }

    /// Number of stored elements.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Device-side size in bytes for the declared element type.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * self.element_type.bytes()
    }

    /// Buffer values.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

impl std::fmt::Debug for DeviceBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("element_type", &self.element_type)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}

/// Registry of device buffers addressed by name.
///
/// The injected counterpart of a process-wide buffer table: an operation
/// that produces a named buffer registers it here, later operations resolve
/// or take it.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    buffers: HashMap<String, DeviceBuffer>,
}

impl BufferRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a buffer under a name, replacing any previous entry.
    pub fn register(&mut self, buffer: DeviceBuffer, name: impl Into<String>) {
        self.buffers.insert(name.into(), buffer);
    }

    /// Resolves a registered buffer by name.
    pub fn resolve(&self, name: &str) -> ComputeResult<&DeviceBuffer> {
        self.buffers.get(name).ok_or_else(|| ComputeError::BufferNotFound {
            name: name.to_string(),
        })
    }

    /// Removes and returns a registered buffer.
    pub fn take(&mut self, name: &str) -> ComputeResult<DeviceBuffer> {
        self.buffers.remove(name).ok_or_else(|| ComputeError::BufferNotFound {
            name: name.to_string(),
        })
    }

    /// Names of all registered buffers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buffers.keys().map(String::as_str)
    }

    /// Number of registered buffers.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns `true` if no buffers are registered.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let b = DeviceBuffer::new(4, 4, 2, ElementType::F32);
        assert_eq!(b.num_elements(), 32);
        assert_eq!(b.size_bytes(), 128);
        assert!(b.data().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_degenerate_dims_collapse() {
        let b = DeviceBuffer::new(-3, 4, 1, ElementType::U16);
        assert_eq!(b.num_elements(), 0);
        assert_eq!(b.size_bytes(), 0);
    }

    #[test]
    fn test_dimension() {
        assert_eq!(DeviceBuffer::new(4, 4, 1, ElementType::F32).dimension(), 2);
        assert_eq!(DeviceBuffer::new(4, 4, 2, ElementType::F32).dimension(), 3);
    }

    #[test]
    fn test_size_bytes_follows_element_type() {
        let b = DeviceBuffer::new(10, 10, 1, ElementType::U8);
        assert_eq!(b.size_bytes(), 100);
        let b = DeviceBuffer::new(10, 10, 1, ElementType::U16);
        assert_eq!(b.size_bytes(), 200);
    }

    #[test]
    fn test_registry_round_trip() {
        let mut reg = BufferRegistry::new();
        assert!(reg.is_empty());
        reg.register(DeviceBuffer::new(4, 4, 1, ElementType::F32), "tile_1");
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.resolve("tile_1").unwrap().width, 4);

        let taken = reg.take("tile_1").unwrap();
        assert_eq!(taken.height, 4);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_registry_missing_name() {
        let reg = BufferRegistry::new();
        assert!(matches!(
            reg.resolve("nope"),
            Err(ComputeError::BufferNotFound { .. })
        ));
    }
}
