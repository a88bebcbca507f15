//! CLI command implementations

pub mod grid;
pub mod push;
pub mod tile;

use gridtile_core::{GridSpec, ImageExtent, Overlap, TilePosition};

use crate::{ExtentArgs, GridShapeArgs, PositionArgs};

/// Image extent from command line flags.
pub fn parse_extent(args: &ExtentArgs) -> ImageExtent {
    ImageExtent::new(args.width, args.height, args.depth)
}

/// Grid spec and overlap from command line flags.
pub fn parse_grid(args: &GridShapeArgs) -> (GridSpec, Overlap) {
    (
        GridSpec::new(args.tiles_x, args.tiles_y, args.tiles_z),
        Overlap::percent(args.overlap),
    )
}

/// Tile position from command line flags.
pub fn parse_position(args: &PositionArgs) -> TilePosition {
    TilePosition::new(args.tile_x, args.tile_y, args.tile_z)
}
