//! Push command
//!
//! Builds a synthetic ramp volume, pushes one grid tile of it through the
//! host transfer and reports the resulting device buffer.

use anyhow::{Context, Result};
use gridtile_compute::{push_grid_tile, HostTransfer, MemoryStore};
use gridtile_core::{ElementType, VolumeImage};
use tracing::debug;

use crate::PushArgs;

pub fn run(args: PushArgs) -> Result<()> {
    let extent = super::parse_extent(&args.extent);
    let (grid, overlap) = super::parse_grid(&args.grid);
    let position = super::parse_position(&args.position);

    let element_type = match args.element_type.to_lowercase().as_str() {
        "u8" => ElementType::U8,
        "u16" => ElementType::U16,
        _ => ElementType::F32,
    };

    let mut image = VolumeImage::new(extent, element_type)
        .with_context(|| format!("cannot build a {extent} volume"))?;
    for (i, value) in image.data_mut().iter_mut().enumerate() {
        *value = i as f32;
    }

    let mut store = MemoryStore::new();
    store.insert(args.name.as_str(), image);
    debug!(name = %args.name, element_type = %element_type, "stored synthetic volume");

    let buffer = push_grid_tile(&store, &HostTransfer, &args.name, grid, position, overlap)
        .with_context(|| format!("failed to push tile of '{}'", args.name))?;

    println!(
        "pushed tile {},{},{} of '{}' ({})",
        position.tile_x, position.tile_y, position.tile_z, args.name, extent
    );
    println!("{buffer:?}");

    Ok(())
}
