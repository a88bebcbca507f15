//! Image store, device buffers and grid-tile push operations.
//!
//! This crate wires the pure geometry of `gridtile-core` to the stateful
//! edges of a tiling pipeline: a name-to-image store on the host side, a
//! transfer layer producing opaque device buffers, and a registry for
//! buffers addressed by name.
//!
//! # Architecture
//!
//! ```text
//! push_grid_tile / create_output_buffer
//!     ├── ImageStore (resolve name -> VolumeImage)
//!     ├── compute_tile_geometry (shared by both operations)
//!     ├── TileTransfer (extracted region -> DeviceBuffer)
//!     └── BufferRegistry (name -> DeviceBuffer)
//! ```
//!
//! # Example
//!
//! ```
//! use gridtile_core::{GridSpec, TilePosition, Overlap, ImageExtent, ElementType, VolumeImage};
//! use gridtile_compute::{HostTransfer, MemoryStore, push_grid_tile};
//!
//! let mut store = MemoryStore::new();
//! let image = VolumeImage::new(ImageExtent::new(64, 64, 1), ElementType::F32).unwrap();
//! store.insert("plate", image);
//!
//! let buffer = push_grid_tile(
//!     &store,
//!     &HostTransfer,
//!     "plate",
//!     GridSpec::new(2, 2, 1),
//!     TilePosition::new(1, 1, 1),
//!     Overlap::none(),
//! ).unwrap();
//! assert_eq!((buffer.width, buffer.height), (32, 32));
//! ```

pub mod buffer;
pub mod push;
pub mod store;
pub mod transfer;

pub use buffer::{BufferRegistry, DeviceBuffer};
pub use push::{create_output_buffer, push_grid_tile, push_grid_tile_named};
pub use store::{ImageStore, MemoryStore};
pub use transfer::{HostTransfer, TileTransfer};

use thiserror::Error;

/// Errors raised by store, registry and transfer operations.
///
/// Numeric tile parameters never appear here: counts and the overlap
/// percentage are clamped and positions are used raw, so a malformed
/// request produces degenerate geometry instead of an error. The failures
/// below are all about references and buffers.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The named source image is not present in the store.
    ///
    /// Fatal to the calling operation and surfaced as-is; the lookup is
    /// deterministic, so retrying with the same name cannot succeed.
    #[error("image '{name}' not found; it was never stored or has been released")]
    ImageNotFound {
        /// Name that failed to resolve.
        name: String,
    },

    /// The named device buffer is not present in the registry.
    #[error("buffer '{name}' not found in registry")]
    BufferNotFound {
        /// Name that failed to resolve.
        name: String,
    },

    /// A transfer backend failed to move or allocate data.
    #[error("transfer failed: {0}")]
    TransferFailed(String),

    /// Host volume construction failed.
    #[error(transparent)]
    Core(#[from] gridtile_core::Error),
}

/// Result type for compute operations.
pub type ComputeResult<T> = Result<T, ComputeError>;
