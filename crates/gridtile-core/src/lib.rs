//! # gridtile-core
//!
//! Core types and geometry for grid-tiled image volumes.
//!
//! This crate provides the foundational types used throughout the gridtile
//! workspace:
//!
//! - [`GridSpec`], [`TilePosition`], [`Overlap`] - grid parameters
//! - [`compute_tile_geometry`] - the tile geometry computation
//! - [`TileGeometry`], [`TileRegion`] - computed tile extents and regions
//! - [`ImageExtent`], [`ElementType`] - source volume description
//! - [`VolumeImage`] - host-side pixel volume with region extraction
//!
//! ## Design Philosophy
//!
//! The geometry computation is **pure and total**: given identical inputs it
//! always returns identical outputs, and malformed numeric input is clamped
//! rather than rejected. The same computation backs both region extraction
//! and output-buffer allocation, so a buffer sized from geometry alone is
//! always the right size to receive the pixels extracted later:
//!
//! ```
//! use gridtile_core::{compute_tile_geometry, GridSpec, TilePosition, Overlap, ImageExtent};
//!
//! let geo = compute_tile_geometry(
//!     GridSpec::new(2, 2, 1),
//!     TilePosition::new(1, 1, 1),
//!     Overlap::none(),
//!     ImageExtent::new(100, 100, 1),
//! );
//! assert_eq!((geo.width, geo.height, geo.depth), (50, 50, 1));
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other gridtile crates depend on it:
//!
//! ```text
//! gridtile-core (this crate)
//!    ^
//!    |
//!    +-- gridtile-compute (image store, device buffers, push/allocate)
//!    +-- gridtile-cli (command line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod extent;
pub mod format;
pub mod grid;
pub mod region;
pub mod volume;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extent::ImageExtent;
pub use format::ElementType;
pub use grid::{
    compute_tile_geometry, overlap_pixels, tile_origin, tile_size_along_axis, GridSpec, Overlap,
    OverlapFactors, TileGeometry, TilePosition,
};
pub use region::TileRegion;
pub use volume::VolumeImage;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gridtile_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extent::ImageExtent;
    pub use crate::format::ElementType;
    pub use crate::grid::{
        compute_tile_geometry, GridSpec, Overlap, OverlapFactors, TileGeometry, TilePosition,
    };
    pub use crate::region::TileRegion;
    pub use crate::volume::VolumeImage;
}
