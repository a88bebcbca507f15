//! gridtile - grid-tile geometry from the command line.
//!
//! Splits an image volume into a regular grid of possibly-overlapping tiles
//! and reports pixel-space tile regions, without touching any image file.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gridtile")]
#[command(author, version, about = "Grid-tile geometry for image volumes")]
#[command(long_about = "
Computes the pixel-space geometry of grid tiles over a 2D or 3D image.

Examples:
  gridtile tile --width 1920 --height 1080 --tiles-x 2 --tiles-y 2 --tile-x 1 --tile-y 1
  gridtile grid --width 101 --height 67 --tiles-x 3 --tiles-y 2 --overlap 15
  gridtile push --width 512 --height 512 --depth 64 --tiles-z 4 --tile-z 4 -v
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the geometry of a single tile
    #[command(visible_alias = "t")]
    Tile(TileArgs),

    /// List the geometry of every tile in the grid
    #[command(visible_alias = "g")]
    Grid(GridArgs),

    /// Push one tile of a synthetic volume and report the device buffer
    Push(PushArgs),
}

/// Source image dimensions.
#[derive(Args)]
struct ExtentArgs {
    /// Image width in pixels
    #[arg(long)]
    width: i32,

    /// Image height in pixels
    #[arg(long)]
    height: i32,

    /// Number of depth slices (1 for 2D)
    #[arg(long, default_value_t = 1)]
    depth: i32,
}

/// Grid shape and overlap.
#[derive(Args)]
struct GridShapeArgs {
    /// Number of tile columns
    #[arg(long, default_value_t = 1)]
    tiles_x: i32,

    /// Number of tile rows
    #[arg(long, default_value_t = 1)]
    tiles_y: i32,

    /// Number of slice-blocks along Z
    #[arg(long, default_value_t = 1)]
    tiles_z: i32,

    /// Tile overlap as a percentage of the tile extent (clamped to 0-99)
    #[arg(long, default_value_t = 0.0)]
    overlap: f32,
}

/// Position of one tile in the grid.
#[derive(Args)]
struct PositionArgs {
    /// Tile column, 1-based
    #[arg(long, default_value_t = 1)]
    tile_x: i32,

    /// Tile row, 1-based
    #[arg(long, default_value_t = 1)]
    tile_y: i32,

    /// Slice-block, 1-based
    #[arg(long, default_value_t = 1)]
    tile_z: i32,
}

#[derive(Args)]
struct TileArgs {
    #[command(flatten)]
    extent: ExtentArgs,

    #[command(flatten)]
    grid: GridShapeArgs,

    #[command(flatten)]
    position: PositionArgs,
}

#[derive(Args)]
struct GridArgs {
    #[command(flatten)]
    extent: ExtentArgs,

    #[command(flatten)]
    grid: GridShapeArgs,
}

#[derive(Args)]
struct PushArgs {
    #[command(flatten)]
    extent: ExtentArgs,

    #[command(flatten)]
    grid: GridShapeArgs,

    #[command(flatten)]
    position: PositionArgs,

    /// Name the synthetic volume is stored under
    #[arg(long, default_value = "synthetic")]
    name: String,

    /// Element type: u8, u16, f32
    #[arg(long, default_value = "f32")]
    element_type: String,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tile(args) => commands::tile::run(args),
        Commands::Grid(args) => commands::grid::run(args),
        Commands::Push(args) => commands::push::run(args),
    }
}
