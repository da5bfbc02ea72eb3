//! Tileset assembly from a single base tile
//!
//! Two layouts are supported. `FullGrid4x4` fills every cell with the base
//! tile and then replaces the border cells with faded copies, corners last.
//! The faded copies are pasted, not blended over the base tiles beneath, so
//! border cells keep the fade in their alpha channel and are translucent
//! toward the tileset boundary. `Centered3x3` keeps one base tile in the
//! middle of a transparent canvas and composites a faded copy into each
//! neighboring cell. In both layouts a direction's tile goes into the cells
//! on that side of the grid.

use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{OutputFormat, load_rgba, save_image};
use crate::tiling::compositor::{apply_mask, composite_onto, paste};
use crate::tiling::direction::Direction;
use crate::tiling::mask::make_mask;
use image::{DynamicImage, RgbaImage};
use serde::Deserialize;
use std::path::Path;

/// Grid layout of an assembled tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// 4x4 cells, base tile everywhere, faded border ring
    #[default]
    #[value(name = "full")]
    #[serde(alias = "full")]
    FullGrid4x4,
    /// 3x3 cells, base tile in the center only
    #[value(name = "centered")]
    #[serde(alias = "centered")]
    Centered3x3,
}

impl Topology {
    /// (columns, rows)
    pub const fn grid(self) -> (u32, u32) {
        match self {
            Self::FullGrid4x4 => (4, 4),
            Self::Centered3x3 => (3, 3),
        }
    }

    /// Grid cells (column, row) that receive the tile for a direction
    pub fn cells(self, direction: Direction) -> Vec<(u32, u32)> {
        let (cols, rows) = self.grid();
        let (last_col, last_row) = (cols - 1, rows - 1);

        match (self, direction) {
            (_, Direction::TopLeft) => vec![(0, 0)],
            (_, Direction::TopRight) => vec![(last_col, 0)],
            (_, Direction::BottomLeft) => vec![(0, last_row)],
            (_, Direction::BottomRight) => vec![(last_col, last_row)],
            (Self::FullGrid4x4, Direction::Left) => (0..rows).map(|row| (0, row)).collect(),
            (Self::FullGrid4x4, Direction::Right) => {
                (0..rows).map(|row| (last_col, row)).collect()
            }
            (Self::FullGrid4x4, Direction::Top) => (0..cols).map(|col| (col, 0)).collect(),
            (Self::FullGrid4x4, Direction::Bottom) => {
                (0..cols).map(|col| (col, last_row)).collect()
            }
            (Self::Centered3x3, Direction::Left) => vec![(0, 1)],
            (Self::Centered3x3, Direction::Right) => vec![(last_col, 1)],
            (Self::Centered3x3, Direction::Top) => vec![(1, 0)],
            (Self::Centered3x3, Direction::Bottom) => vec![(1, last_row)],
        }
    }
}

/// Pixel size of the assembled tileset for a tile size and topology
///
/// # Errors
///
/// Returns `InvalidParameter` if the tile is empty or the canvas would
/// overflow `u32`
pub fn tileset_dimensions(tile_size: (u32, u32), topology: Topology) -> Result<(u32, u32)> {
    let (cols, rows) = topology.grid();
    let (tile_width, tile_height) = tile_size;
    if tile_width == 0 || tile_height == 0 {
        return Err(invalid_parameter(
            "base_tile",
            &format!("{tile_width}x{tile_height}"),
            &"tile must have non-zero dimensions",
        ));
    }

    match (tile_width.checked_mul(cols), tile_height.checked_mul(rows)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(invalid_parameter(
            "base_tile",
            &format!("{tile_width}x{tile_height}"),
            &"tileset canvas would exceed the maximum image size",
        )),
    }
}

/// Assemble a tileset around `base_tile`
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty tile, an oversized canvas or an
/// invalid taper rate
pub fn build_tileset(base_tile: &RgbaImage, taper_rate: f64, topology: Topology) -> Result<RgbaImage> {
    let size = base_tile.dimensions();
    let (width, height) = tileset_dimensions(size, topology)?;
    let (tile_width, tile_height) = size;
    let (cols, rows) = topology.grid();
    let source = DynamicImage::ImageRgba8(base_tile.clone());

    let mut canvas = RgbaImage::new(width, height);
    let origin = |(col, row): (u32, u32)| (col * tile_width, row * tile_height);

    match topology {
        Topology::FullGrid4x4 => {
            for row in 0..rows {
                for col in 0..cols {
                    paste(&mut canvas, base_tile, origin((col, row)));
                }
            }
        }
        Topology::Centered3x3 => {
            composite_onto(&mut canvas, base_tile, origin((cols / 2, rows / 2)));
        }
    }

    // Edges first so the corner cells end up holding corner tiles
    for direction in Direction::EDGES.into_iter().chain(Direction::CORNERS) {
        let mask = make_mask(size, direction, taper_rate)?;
        let faded = apply_mask(&source, &mask)?;
        for cell in topology.cells(direction) {
            match topology {
                Topology::FullGrid4x4 => paste(&mut canvas, &faded, origin(cell)),
                Topology::Centered3x3 => composite_onto(&mut canvas, &faded, origin(cell)),
            }
        }
    }

    Ok(canvas)
}

/// Load a base tile, assemble its tileset and write it losslessly
///
/// The output format is resolved and the image encoded before anything is
/// written, so failures leave no partial file.
///
/// # Errors
///
/// Returns an error if:
/// - The base tile cannot be decoded (`ImageDecode`)
/// - The output format is not PNG or WEBP (`UnsupportedFormat`)
/// - Assembly parameters are invalid (`InvalidParameter`)
/// - Encoding or writing fails (`ImageExport`, `FileSystem`)
pub fn generate_tileset(
    base_tile_path: &Path,
    output_path: &Path,
    taper_rate: f64,
    topology: Topology,
    format: OutputFormat,
) -> Result<RgbaImage> {
    let resolved = format.resolve(output_path)?;
    let base_tile = load_rgba(base_tile_path)?;
    let tileset = build_tileset(&base_tile, taper_rate, topology)?;

    let image = DynamicImage::ImageRgba8(tileset);
    save_image(&image, output_path, resolved)?;
    log::info!(
        "Tileset saved to {} ({}x{})",
        output_path.display(),
        image.width(),
        image.height()
    );

    Ok(image.into_rgba8())
}
