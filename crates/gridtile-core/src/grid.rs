//! Grid tiling geometry.
//!
//! This module partitions an image volume into a regular `NX x NY x NZ` grid
//! of possibly-overlapping tiles and computes the pixel-space extent and
//! origin of one requested tile. The three axes are computed independently;
//! only the overlap factor pair is shared between them.
//!
//! # Tile Sizing
//!
//! With `n` tiles along an axis overlapping by fraction `f`, each tile
//! advances `(1 - f) * size` pixels past its predecessor, so `n` tiles span
//! `(1 + (n - 1) * (1 - f)) * size` pixels. Solving for the size that makes
//! this span the image gives the base tile size:
//!
//! ```text
//! base = floor(image_size / (1 + (n - 1) * (1 - f)))
//! ```
//!
//! The last tile on each axis (`position == count`) instead absorbs whatever
//! pixels remain after placing all prior tiles at the base size:
//!
//! ```text
//! size(last) = image_size - (n - 1) * base
//! ```
//!
//! so `(n - 1) * base + size(last)` equals the image size exactly and the
//! grid never leaves a remainder at the far edge. When the image size is not
//! evenly divisible, the last tile differs in size from the interior tiles.
//!
//! # Indexing
//!
//! Tile positions are 1-based; `position == count` selects the last tile on
//! an axis. The origin arithmetic multiplies the raw 1-based id against
//! pixel counts (`id * size - id * overlap_px`). Positions are never
//! clamped: an id outside `[1, count]` describes a region outside the grid.
//!
//! # Degenerate Input
//!
//! Numeric input is clamped, never rejected. Tile counts are raised to at
//! least 1, and the Z count is additionally capped at the image depth, so a
//! stack is never split into more slice-blocks than it has slices. X and Y
//! counts carry no such cap against width and height; requesting more tiles
//! than pixels along those axes yields zero or negative extents, reported
//! through [`TileGeometry::is_degenerate`] rather than an error.

use crate::extent::ImageExtent;
use crate::region::TileRegion;

/// Per-axis tile counts of a grid.
///
/// # Example
///
/// ```
/// use gridtile_core::GridSpec;
///
/// // 3 columns, 2 rows, 5 slice-blocks - capped at a 4-slice stack.
/// let grid = GridSpec::new(3, 2, 5).normalized(4);
/// assert_eq!(grid.tile_count_z, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Number of tile columns.
    pub tile_count_x: i32,
    /// Number of tile rows.
    pub tile_count_y: i32,
    /// Number of slice-blocks along Z.
    pub tile_count_z: i32,
}

impl GridSpec {
    /// Creates a grid spec from per-axis tile counts.
    #[inline]
    pub const fn new(tile_count_x: i32, tile_count_y: i32, tile_count_z: i32) -> Self {
        Self {
            tile_count_x,
            tile_count_y,
            tile_count_z,
        }
    }

    /// The counts as the geometry uses them: every axis at least 1, Z at
    /// most the image depth. X and Y are not capped against width/height.
    #[inline]
    pub fn normalized(&self, image_depth: i32) -> GridSpec {
        GridSpec {
            tile_count_x: self.tile_count_x.max(1),
            tile_count_y: self.tile_count_y.max(1),
            tile_count_z: self.tile_count_z.max(1).min(image_depth),
        }
    }

    /// Total number of tiles in the grid; 0 if any count is non-positive.
    #[inline]
    pub fn num_tiles(&self) -> u64 {
        if self.tile_count_x <= 0 || self.tile_count_y <= 0 || self.tile_count_z <= 0 {
            return 0;
        }
        self.tile_count_x as u64 * self.tile_count_y as u64 * self.tile_count_z as u64
    }
}

/// 1-based index of one tile along each axis.
///
/// `tile_x == tile_count_x` selects the last column, and likewise for the
/// other axes. Positions are used as given; they are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePosition {
    /// Column index, 1-based.
    pub tile_x: i32,
    /// Row index, 1-based.
    pub tile_y: i32,
    /// Slice-block index, 1-based.
    pub tile_z: i32,
}

impl TilePosition {
    /// Creates a position from per-axis 1-based indices.
    #[inline]
    pub const fn new(tile_x: i32, tile_y: i32, tile_z: i32) -> Self {
        Self {
            tile_x,
            tile_y,
            tile_z,
        }
    }
}

/// Requested overlap between neighboring tiles, as a percentage of the tile
/// extent.
///
/// Values outside `[0, 99]` saturate when the factor pair is derived; a
/// tile can never overlap its neighbor completely.
///
/// # Example
///
/// ```
/// use gridtile_core::Overlap;
///
/// let f = Overlap::percent(150.0).factors();
/// assert_eq!(f.overlap, 0.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlap {
    /// Requested percentage, possibly out of range.
    pub percentage: f32,
}

impl Overlap {
    /// Creates an overlap from a percentage.
    #[inline]
    pub const fn percent(percentage: f32) -> Self {
        Self { percentage }
    }

    /// No overlap between neighboring tiles.
    #[inline]
    pub const fn none() -> Self {
        Self::percent(0.0)
    }

    /// Clamps the percentage into `[0, 99]` and derives the factor pair.
    /// Always succeeds.
    #[inline]
    pub fn factors(&self) -> OverlapFactors {
        let overlap = self.percentage.clamp(0.0, 99.0) / 100.0;
        OverlapFactors {
            overlap,
            non_overlap: 1.0 - overlap,
        }
    }
}

/// Overlap expressed as a factor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapFactors {
    /// Fraction of a tile shared with its neighbor, in `[0, 0.99]`.
    pub overlap: f32,
    /// Fraction a tile advances past its predecessor: `1 - overlap`.
    pub non_overlap: f32,
}

/// Computed pixel-space geometry of one tile.
///
/// Extents and origins are signed: degenerate grid requests produce zero or
/// negative values here instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGeometry {
    /// Tile extent along X.
    pub width: i32,
    /// Tile extent along Y.
    pub height: i32,
    /// Tile extent along Z.
    pub depth: i32,
    /// Pixel offset of the tile along X.
    pub origin_x: i32,
    /// Pixel offset of the tile along Y.
    pub origin_y: i32,
    /// Pixel offset of the tile along Z.
    pub origin_z: i32,
}

impl TileGeometry {
    /// The tile as a region: the crop request handed to extraction.
    #[inline]
    pub const fn region(&self) -> TileRegion {
        TileRegion::new(
            self.origin_x,
            self.origin_y,
            self.origin_z,
            self.width,
            self.height,
            self.depth,
        )
    }

    /// The tile's extents alone, as used to size an output buffer.
    #[inline]
    pub const fn extent(&self) -> ImageExtent {
        ImageExtent::new(self.width, self.height, self.depth)
    }

    /// Returns `true` if any extent is zero or negative.
    ///
    /// Degenerate geometry is the application-level signal of a malformed
    /// request (e.g. more X tiles than the image has columns); the
    /// computation itself never errors on numeric input.
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0 || self.depth <= 0
    }

    /// Number of pixels in the tile; 0 if degenerate.
    #[inline]
    pub fn num_pixels(&self) -> u64 {
        if self.is_degenerate() {
            return 0;
        }
        self.width as u64 * self.height as u64 * self.depth as u64
    }
}

/// Tile size along one axis.
///
/// `grid_tile_count` must already be normalized (at least 1); see
/// [`GridSpec::normalized`]. The interior size is
/// `floor(image_size / (1 + (grid_tile_count - 1) * non_overlap_factor))`;
/// when `tile_position_id` equals `grid_tile_count` the last tile absorbs
/// the remainder instead:
///
/// ```
/// use gridtile_core::tile_size_along_axis;
///
/// // 101 pixels in 3 tiles without overlap: 33 + 33 + 35.
/// assert_eq!(tile_size_along_axis(3, 1, 1.0, 101), 33);
/// assert_eq!(tile_size_along_axis(3, 3, 1.0, 101), 35);
/// ```
#[inline]
pub fn tile_size_along_axis(
    grid_tile_count: i32,
    tile_position_id: i32,
    non_overlap_factor: f32,
    image_size: i32,
) -> i32 {
    let mut tile_size = (image_size as f32
        / (1.0 + (grid_tile_count - 1) as f32 * non_overlap_factor))
        .floor() as i32;
    // last tile in this row / column / slice-block: use the rest of the image
    if tile_position_id == grid_tile_count {
        tile_size = image_size - (tile_position_id - 1) * tile_size;
    }
    tile_size
}

/// Number of pixels a tile of `tile_size` shares with its neighbor.
#[inline]
pub fn overlap_pixels(tile_size: i32, overlap_factor: f32) -> i32 {
    (tile_size as f32 * overlap_factor).floor() as i32
}

/// Pixel offset of a tile along one axis.
///
/// The raw 1-based position id multiplies the pixel counts directly:
/// `id * tile_size - id * overlap_pixels`.
#[inline]
pub fn tile_origin(tile_position_id: i32, tile_size: i32, overlap_pixels: i32) -> i32 {
    tile_position_id * tile_size - tile_position_id * overlap_pixels
}

/// Computes the pixel-space geometry of one tile of a grid.
///
/// The three axes are independent apart from the shared overlap factors.
/// Pure and total: identical inputs always give identical outputs, and
/// malformed numeric input yields degenerate extents, never an error. Both
/// region extraction and output-buffer allocation derive from this one
/// function, so a buffer sized from geometry alone always matches the
/// region extracted later.
///
/// # Example
///
/// ```
/// use gridtile_core::{compute_tile_geometry, GridSpec, TilePosition, Overlap, ImageExtent};
///
/// let geo = compute_tile_geometry(
///     GridSpec::new(2, 2, 1),
///     TilePosition::new(2, 1, 1),
///     Overlap::none(),
///     ImageExtent::new(100, 100, 1),
/// );
/// assert_eq!((geo.width, geo.height, geo.depth), (50, 50, 1));
/// ```
pub fn compute_tile_geometry(
    grid: GridSpec,
    position: TilePosition,
    overlap: Overlap,
    extent: ImageExtent,
) -> TileGeometry {
    let factors = overlap.factors();
    let counts = grid.normalized(extent.depth);

    let width = tile_size_along_axis(
        counts.tile_count_x,
        position.tile_x,
        factors.non_overlap,
        extent.width,
    );
    let height = tile_size_along_axis(
        counts.tile_count_y,
        position.tile_y,
        factors.non_overlap,
        extent.height,
    );
    let depth = tile_size_along_axis(
        counts.tile_count_z,
        position.tile_z,
        factors.non_overlap,
        extent.depth,
    );

    let x_overlap = overlap_pixels(width, factors.overlap);
    let y_overlap = overlap_pixels(height, factors.overlap);
    let z_overlap = overlap_pixels(depth, factors.overlap);

    TileGeometry {
        width,
        height,
        depth,
        origin_x: tile_origin(position.tile_x, width, x_overlap),
        origin_y: tile_origin(position.tile_y, height, y_overlap),
        origin_z: tile_origin(position.tile_z, depth, z_overlap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overlap_factors() {
        let f = Overlap::percent(50.0).factors();
        assert_relative_eq!(f.overlap, 0.5);
        assert_relative_eq!(f.non_overlap, 0.5);
    }

    #[test]
    fn test_overlap_saturates() {
        assert_eq!(Overlap::percent(-5.0).factors(), Overlap::none().factors());
        assert_eq!(
            Overlap::percent(150.0).factors(),
            Overlap::percent(99.0).factors()
        );
    }

    #[test]
    fn test_normalized_counts() {
        let grid = GridSpec::new(0, -3, 10).normalized(3);
        assert_eq!(grid.tile_count_x, 1);
        assert_eq!(grid.tile_count_y, 1);
        assert_eq!(grid.tile_count_z, 3);
    }

    #[test]
    fn test_z_clamped_to_depth_but_xy_not() {
        // 10 tiles along every axis of a 4x4x3 stack: only Z is capped.
        let grid = GridSpec::new(10, 10, 10).normalized(3);
        assert_eq!(grid.tile_count_x, 10);
        assert_eq!(grid.tile_count_y, 10);
        assert_eq!(grid.tile_count_z, 3);
    }

    #[test]
    fn test_num_tiles() {
        assert_eq!(GridSpec::new(3, 2, 4).num_tiles(), 24);
        assert_eq!(GridSpec::new(3, 0, 4).num_tiles(), 0);
    }

    #[test]
    fn test_single_tile_spans_axis() {
        // One tile always covers the whole axis regardless of the factor.
        for pct in [0.0, 25.0, 50.0, 99.0] {
            let f = Overlap::percent(pct).factors();
            assert_eq!(tile_size_along_axis(1, 1, f.non_overlap, 640), 640);
        }
    }

    #[test]
    fn test_base_and_last_size() {
        // 101 pixels in 3 tiles, no overlap: 33 + 33 + 35.
        assert_eq!(tile_size_along_axis(3, 1, 1.0, 101), 33);
        assert_eq!(tile_size_along_axis(3, 2, 1.0, 101), 33);
        assert_eq!(tile_size_along_axis(3, 3, 1.0, 101), 35);
    }

    #[test]
    fn test_last_size_with_overlap() {
        // 512 pixels, 4 tiles, 25% overlap: base floor(512 / 3.25) = 157.
        let f = Overlap::percent(25.0).factors();
        assert_eq!(tile_size_along_axis(4, 1, f.non_overlap, 512), 157);
        assert_eq!(tile_size_along_axis(4, 4, f.non_overlap, 512), 512 - 3 * 157);
    }

    #[test]
    fn test_remainder_identity() {
        // The sizes of all tiles on an axis reach the far edge exactly:
        // (n - 1) * base + last == image_size.
        for image_size in [1, 7, 100, 101, 512, 4096, 10_001] {
            for n in [1, 2, 3, 5, 8] {
                for pct in [0.0, 10.0, 25.0, 50.0, 99.0] {
                    let f = Overlap::percent(pct).factors();
                    let base = tile_size_along_axis(n, 1, f.non_overlap, image_size);
                    let last = tile_size_along_axis(n, n, f.non_overlap, image_size);
                    assert_eq!(
                        (n - 1) * base + last,
                        image_size,
                        "size={image_size} n={n} overlap={pct}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_overlap_pixels_floor() {
        assert_eq!(overlap_pixels(50, 0.0), 0);
        assert_eq!(overlap_pixels(50, 0.5), 25);
        assert_eq!(overlap_pixels(33, 0.25), 8);
        assert_eq!(overlap_pixels(9, 0.99), 8);
    }

    #[test]
    fn test_origin_uses_raw_position_id() {
        // The 1-based id multiplies pixel counts directly.
        assert_eq!(tile_origin(1, 50, 0), 50);
        assert_eq!(tile_origin(2, 50, 0), 100);
        assert_eq!(tile_origin(2, 34, 17), 34);
    }

    #[test]
    fn test_geometry_concrete_2x2() {
        // 100x100 image, 2x2 grid, no overlap.
        let extent = ImageExtent::new(100, 100, 1);
        let grid = GridSpec::new(2, 2, 1);

        let t1 = compute_tile_geometry(grid, TilePosition::new(1, 1, 1), Overlap::none(), extent);
        assert_eq!((t1.width, t1.height, t1.depth), (50, 50, 1));
        assert_eq!((t1.origin_x, t1.origin_y), (50, 50));

        let t2 = compute_tile_geometry(grid, TilePosition::new(2, 2, 1), Overlap::none(), extent);
        assert_eq!((t2.width, t2.height, t2.depth), (50, 50, 1));
        assert_eq!((t2.origin_x, t2.origin_y), (100, 100));
    }

    #[test]
    fn test_geometry_nonpositive_counts_behave_as_one() {
        let extent = ImageExtent::new(64, 64, 1);
        let pos = TilePosition::new(1, 1, 1);
        let a = compute_tile_geometry(GridSpec::new(0, -2, 1), pos, Overlap::none(), extent);
        let b = compute_tile_geometry(GridSpec::new(1, 1, 1), pos, Overlap::none(), extent);
        assert_eq!(a, b);
        assert_eq!(a.width, 64);
    }

    #[test]
    fn test_geometry_degenerate_when_more_tiles_than_pixels() {
        // 20 columns across 10 pixels: interior tiles collapse to zero width.
        let geo = compute_tile_geometry(
            GridSpec::new(20, 1, 1),
            TilePosition::new(1, 1, 1),
            Overlap::none(),
            ImageExtent::new(10, 10, 1),
        );
        assert_eq!(geo.width, 0);
        assert!(geo.is_degenerate());
        assert_eq!(geo.num_pixels(), 0);
    }

    #[test]
    fn test_geometry_z_axis_volume() {
        // 60-slice stack in 3 slice-blocks.
        let geo = compute_tile_geometry(
            GridSpec::new(1, 1, 3),
            TilePosition::new(1, 1, 2),
            Overlap::none(),
            ImageExtent::new(32, 32, 60),
        );
        assert_eq!(geo.depth, 20);
        assert_eq!(geo.origin_z, 40);
    }

    #[test]
    fn test_geometry_region_and_extent_agree() {
        let geo = compute_tile_geometry(
            GridSpec::new(2, 3, 1),
            TilePosition::new(2, 3, 1),
            Overlap::percent(10.0),
            ImageExtent::new(640, 480, 1),
        );
        let region = geo.region();
        assert_eq!((region.width, region.height, region.depth), (geo.width, geo.height, geo.depth));
        assert_eq!((region.x, region.y, region.z), (geo.origin_x, geo.origin_y, geo.origin_z));
        assert_eq!(geo.extent(), ImageExtent::new(geo.width, geo.height, geo.depth));
    }
}
