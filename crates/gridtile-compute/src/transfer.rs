//! The host-to-device transfer boundary.

use gridtile_core::{ElementType, VolumeImage};

use crate::buffer::DeviceBuffer;
use crate::ComputeResult;

/// Moves extracted pixel regions onto a device and allocates device buffers.
///
/// The two operations mirror the two ways a buffer comes into existence:
/// [`push`](TileTransfer::push) uploads an already-extracted region,
/// [`create`](TileTransfer::create) allocates from dimensions and element
/// type alone, before any pixel data exists. Implementations over real
/// device APIs report their failures as
/// [`ComputeError::TransferFailed`](crate::ComputeError::TransferFailed).
pub trait TileTransfer {
    /// Uploads an extracted region, returning the device buffer handle.
    fn push(&self, tile: &VolumeImage) -> ComputeResult<DeviceBuffer>;

    /// Allocates an empty device buffer of the given dimensions.
    ///
    /// Non-positive dimensions produce an empty buffer, matching the
    /// degenerate geometry a malformed grid request computes.
    fn create(
        &self,
        width: i32,
        height: i32,
        depth: i32,
        element_type: ElementType,
    ) -> ComputeResult<DeviceBuffer>;
}

/// Transfer implementation that keeps buffers in host memory.
///
/// Stands in for a device API in tests and the CLI; the handle it returns
/// behaves like any other [`DeviceBuffer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTransfer;

impl TileTransfer for HostTransfer {
    fn push(&self, tile: &VolumeImage) -> ComputeResult<DeviceBuffer> {
        let extent = tile.extent();
        Ok(DeviceBuffer::from_data(
            tile.data().to_vec(),
            extent.width,
            extent.height,
            extent.depth,
            tile.element_type(),
        ))
    }

    fn create(
        &self,
        width: i32,
        height: i32,
        depth: i32,
        element_type: ElementType,
    ) -> ComputeResult<DeviceBuffer> {
        Ok(DeviceBuffer::new(width, height, depth, element_type))
    }
}
