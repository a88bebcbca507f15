//! Grid-tile push and output-buffer allocation.
//!
//! Both operations here derive their numbers from the same
//! [`compute_tile_geometry`] call, so a buffer allocated before any pixels
//! exist always matches the region a later push extracts.

use gridtile_core::{compute_tile_geometry, overlap_pixels, GridSpec, Overlap, TilePosition};
use tracing::debug;

use crate::buffer::{BufferRegistry, DeviceBuffer};
use crate::store::ImageStore;
use crate::transfer::TileTransfer;
use crate::{ComputeError, ComputeResult};

/// Extracts one grid tile of a named image and pushes it to the device.
///
/// The source image is resolved through the store; an unknown name is the
/// only failure intrinsic to the operation
/// ([`ComputeError::ImageNotFound`]). All numeric parameters are clamped or
/// used raw by the geometry, so a malformed request pushes a degenerate
/// (possibly empty) tile rather than failing.
pub fn push_grid_tile(
    store: &impl ImageStore,
    transfer: &impl TileTransfer,
    name: &str,
    grid: GridSpec,
    position: TilePosition,
    overlap: Overlap,
) -> ComputeResult<DeviceBuffer> {
    let image = store
        .resolve(name)
        .ok_or_else(|| ComputeError::ImageNotFound {
            name: name.to_string(),
        })?;

    let geometry = compute_tile_geometry(grid, position, overlap, image.extent());
    let factors = overlap.factors();
    debug!(
        image = name,
        tile_width = geometry.width,
        tile_height = geometry.height,
        tile_depth = geometry.depth,
        x_overlap = overlap_pixels(geometry.width, factors.overlap),
        y_overlap = overlap_pixels(geometry.height, factors.overlap),
        z_overlap = overlap_pixels(geometry.depth, factors.overlap),
        "extracting grid tile {}",
        geometry.region()
    );

    let tile = image.extract(&geometry.region());
    transfer.push(&tile)
}

/// Pushes one grid tile and registers the resulting buffer under a name.
pub fn push_grid_tile_named(
    store: &impl ImageStore,
    transfer: &impl TileTransfer,
    registry: &mut BufferRegistry,
    name: &str,
    target_name: &str,
    grid: GridSpec,
    position: TilePosition,
    overlap: Overlap,
) -> ComputeResult<()> {
    let buffer = push_grid_tile(store, transfer, name, grid, position, overlap)?;
    registry.register(buffer, target_name);
    Ok(())
}

/// Allocates an output buffer sized for one grid tile of a source buffer.
///
/// Sizing uses only the source buffer's declared extent and element type;
/// no pixel data is read, so this works before any tile has been pushed.
/// A single-slice source yields a 2-dimensional buffer.
pub fn create_output_buffer(
    transfer: &impl TileTransfer,
    source: &DeviceBuffer,
    grid: GridSpec,
    position: TilePosition,
    overlap: Overlap,
) -> ComputeResult<DeviceBuffer> {
    let geometry = compute_tile_geometry(grid, position, overlap, source.extent());
    debug!(
        tile_width = geometry.width,
        tile_height = geometry.height,
        tile_depth = geometry.depth,
        element_type = %source.element_type,
        "allocating output buffer"
    );
    transfer.create(
        geometry.width,
        geometry.height,
        geometry.depth,
        source.element_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::transfer::HostTransfer;
    use gridtile_core::{ElementType, ImageExtent, VolumeImage};

    fn store_with_ramp(name: &str, extent: ImageExtent) -> MemoryStore {
        let len = extent.num_pixels() as usize;
        let data = (0..len).map(|i| i as f32).collect();
        let image = VolumeImage::from_f32(data, extent, ElementType::F32).unwrap();
        let mut store = MemoryStore::new();
        store.insert(name, image);
        store
    }

    #[test]
    fn test_push_unknown_image_fails() {
        let store = MemoryStore::new();
        let err = push_grid_tile(
            &store,
            &HostTransfer,
            "missing",
            GridSpec::new(1, 1, 1),
            TilePosition::new(1, 1, 1),
            Overlap::none(),
        );
        assert!(matches!(err, Err(ComputeError::ImageNotFound { .. })));
    }

    #[test]
    fn test_push_whole_image_as_single_tile() {
        let store = store_with_ramp("plate", ImageExtent::new(4, 2, 1));
        let buffer = push_grid_tile(
            &store,
            &HostTransfer,
            "plate",
            GridSpec::new(1, 1, 1),
            TilePosition::new(1, 1, 1),
            Overlap::none(),
        )
        .unwrap();

        // The tile spans the full extent. Its origin is id * size = (4, 2, 1),
        // one full stride past the image, so every value reads as zero.
        assert_eq!((buffer.width, buffer.height, buffer.depth), (4, 2, 1));
        assert_eq!(buffer.num_elements(), 8);
        assert!(buffer.data().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_push_named_registers() {
        let store = store_with_ramp("plate", ImageExtent::new(8, 8, 1));
        let mut registry = BufferRegistry::new();
        push_grid_tile_named(
            &store,
            &HostTransfer,
            &mut registry,
            "plate",
            "plate_tile_1_1",
            GridSpec::new(2, 2, 1),
            TilePosition::new(1, 1, 1),
            Overlap::none(),
        )
        .unwrap();

        let buffer = registry.resolve("plate_tile_1_1").unwrap();
        assert_eq!((buffer.width, buffer.height), (4, 4));
    }

    #[test]
    fn test_create_output_matches_push_dims() {
        let store = store_with_ramp("plate", ImageExtent::new(100, 100, 1));
        let grid = GridSpec::new(2, 2, 1);
        let position = TilePosition::new(2, 2, 1);
        let overlap = Overlap::percent(10.0);

        let pushed =
            push_grid_tile(&store, &HostTransfer, "plate", grid, position, overlap).unwrap();

        let source = DeviceBuffer::new(100, 100, 1, ElementType::F32);
        let allocated =
            create_output_buffer(&HostTransfer, &source, grid, position, overlap).unwrap();

        assert_eq!(allocated.extent(), pushed.extent());
        assert_eq!(allocated.num_elements(), pushed.num_elements());
        assert_eq!(allocated.dimension(), 2);
    }
}
