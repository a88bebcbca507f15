//! Tile command
//!
//! Prints the pixel-space geometry of one tile.

use anyhow::Result;
use gridtile_core::compute_tile_geometry;

use crate::TileArgs;

pub fn run(args: TileArgs) -> Result<()> {
    let extent = super::parse_extent(&args.extent);
    let (grid, overlap) = super::parse_grid(&args.grid);
    let position = super::parse_position(&args.position);

    let geo = compute_tile_geometry(grid, position, overlap, extent);

    println!(
        "tile {},{},{} of {}x{}x{} grid over {}",
        position.tile_x,
        position.tile_y,
        position.tile_z,
        grid.tile_count_x,
        grid.tile_count_y,
        grid.tile_count_z,
        extent
    );
    println!("size:   {} x {} x {}", geo.width, geo.height, geo.depth);
    println!("origin: ({}, {}, {})", geo.origin_x, geo.origin_y, geo.origin_z);
    println!("pixels: {}", geo.num_pixels());

    if geo.is_degenerate() {
        println!("warning: degenerate tile (zero or negative extent)");
    }

    Ok(())
}
