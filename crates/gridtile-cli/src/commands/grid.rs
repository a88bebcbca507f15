//! Grid command
//!
//! Prints the geometry of every tile in the grid and a per-axis coverage
//! summary.

use anyhow::Result;
use gridtile_core::{compute_tile_geometry, tile_size_along_axis, TilePosition};

use crate::GridArgs;

pub fn run(args: GridArgs) -> Result<()> {
    let extent = super::parse_extent(&args.extent);
    let (grid, overlap) = super::parse_grid(&args.grid);
    let counts = grid.normalized(extent.depth);

    println!(
        "{}x{}x{} grid over {} ({}% overlap, {} tiles)",
        counts.tile_count_x,
        counts.tile_count_y,
        counts.tile_count_z,
        extent,
        overlap.percentage,
        counts.num_tiles()
    );
    println!();
    println!("{:<10} {:<16} {:<18} {:>10}", "tile", "size", "origin", "pixels");

    let mut degenerate = 0u64;
    for tz in 1..=counts.tile_count_z {
        for ty in 1..=counts.tile_count_y {
            for tx in 1..=counts.tile_count_x {
                let geo = compute_tile_geometry(
                    grid,
                    TilePosition::new(tx, ty, tz),
                    overlap,
                    extent,
                );
                if geo.is_degenerate() {
                    degenerate += 1;
                }
                println!(
                    "{:<10} {:<16} {:<18} {:>10}{}",
                    format!("{tx},{ty},{tz}"),
                    format!("{}x{}x{}", geo.width, geo.height, geo.depth),
                    format!("({}, {}, {})", geo.origin_x, geo.origin_y, geo.origin_z),
                    geo.num_pixels(),
                    if geo.is_degenerate() { "  !" } else { "" }
                );
            }
        }
    }

    println!();
    let factors = overlap.factors();
    for (axis, count, size) in [
        ("x", counts.tile_count_x, extent.width),
        ("y", counts.tile_count_y, extent.height),
        ("z", counts.tile_count_z, extent.depth),
    ] {
        let base = tile_size_along_axis(count, 1, factors.non_overlap, size);
        let last = tile_size_along_axis(count, count, factors.non_overlap, size);
        println!(
            "coverage {axis}: {} x {base} + {last} = {} of {size}",
            count - 1,
            (count - 1) * base + last
        );
    }
    if degenerate > 0 {
        println!("warning: {degenerate} degenerate tile(s) (zero or negative extent)");
    }

    Ok(())
}
