//! Command-line interface for tileset assembly, retro conversion and edge extension

use crate::io::configuration::{
    DEFAULT_FRAME_SCALING, DEFAULT_NUM_COLORS, DEFAULT_ORIGINAL_FRACTION, DEFAULT_PIXEL_SIZE,
    DEFAULT_TAPER_RATE, DEFAULT_TRANSITION_FRACTION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{OutputFormat, encode_image, open_image, write_encoded};
use crate::io::progress::ProgressManager;
use crate::io::report::BatchReport;
use crate::retro::batch::{process_animation, process_directory, process_file};
use crate::retro::pixelate::{PixelateOptions, RetroProcessor};
use crate::tiling::direction::Direction;
use crate::tiling::inpaint::{EdgeExtension, EdgeRegion, MaskVariant};
use crate::tiling::tileset::{Topology, generate_tileset};
use clap::{Parser, Subcommand};
use image::{DynamicImage, Rgb};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilecraft")]
#[command(
    author,
    version,
    about = "Blend tile edges into tilesets and convert art to retro pixel style"
)]
/// Command-line arguments for the asset post-processor
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Assemble a seamless tileset from one base tile
    Tileset {
        /// Square base tile image
        #[arg(value_name = "BASE_TILE")]
        base_tile: PathBuf,

        /// Output image path (.png or .webp)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Fade exponent: 1.0 is linear, larger stays transparent longer
        #[arg(short, long, default_value_t = DEFAULT_TAPER_RATE)]
        taper: f64,

        /// Output encoding, inferred from the extension by default
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Auto)]
        format: OutputFormat,

        /// Grid layout of the tileset
        #[arg(long, value_enum, default_value_t = Topology::FullGrid4x4)]
        topology: Topology,
    },

    /// Convert an image, or every image in a directory, to pixel art
    Retro {
        /// Input image file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file, or directory when INPUT is a directory
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Colors kept by the first quantization pass
        #[arg(short, long, default_value_t = DEFAULT_NUM_COLORS)]
        colors: usize,

        /// Smaller palette for an optional second pass
        #[arg(short, long)]
        palette: Option<usize>,

        /// Side length of the low-resolution intermediate image
        #[arg(short, long, default_value_t = DEFAULT_PIXEL_SIZE)]
        size: u32,
    },

    /// Convert every frame of an animated GIF to pixel art
    Frames {
        /// Animated GIF
        #[arg(value_name = "INPUT_GIF")]
        input: PathBuf,

        /// Directory receiving numbered frames
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Colors kept by the first quantization pass
        #[arg(short, long, default_value_t = DEFAULT_NUM_COLORS)]
        colors: usize,

        /// Smaller palette for an optional second pass
        #[arg(short, long)]
        palette: Option<usize>,

        /// Divisor applied to the frame size for the intermediate image
        #[arg(short, long, default_value_t = DEFAULT_FRAME_SCALING)]
        scale: u32,
    },

    /// Prepare a composite and mask for extending an image past one edge
    Extend {
        /// Source image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Composite image path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Inpaint mask path
        #[arg(value_name = "MASK_OUTPUT")]
        mask_output: PathBuf,

        /// Edge to extend toward: left, right, top or bottom
        #[arg(short, long, value_parser = parse_direction)]
        direction: Direction,

        /// Share of the image kept verbatim
        #[arg(short, long, default_value_t = DEFAULT_ORIGINAL_FRACTION)]
        original: f64,

        /// Share of the image used as the blend band
        #[arg(short, long, default_value_t = DEFAULT_TRANSITION_FRACTION)]
        transition: f64,

        /// Ramp the mask across the blend band instead of a hard step
        #[arg(short, long)]
        gradient: bool,

        /// Fill color for the blank region as R,G,B
        #[arg(short, long, value_parser = parse_background, default_value = "0,0,0")]
        background: Rgb<u8>,
    },
}

/// Parse an edge or corner name for the command line
///
/// # Errors
///
/// Returns the rendered `InvalidDirection` message for unknown names
pub fn parse_direction(text: &str) -> std::result::Result<Direction, String> {
    text.parse::<Direction>().map_err(|e| e.to_string())
}

/// Parse an `R,G,B` color with each channel in 0..=255
///
/// # Errors
///
/// Returns a message if the text does not hold exactly three byte values
pub fn parse_background(text: &str) -> std::result::Result<Rgb<u8>, String> {
    let channels = text
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color '{text}': {e}"))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb([*r, *g, *b])),
        _ => Err(format!("invalid color '{text}': expected R,G,B")),
    }
}

/// Dispatches parsed subcommands with optional progress tracking
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// Batch subcommands skip failing items and still succeed; single-file
    /// subcommands propagate every error.
    ///
    /// # Errors
    ///
    /// Returns an error if a single-file operation fails or a batch cannot
    /// be started
    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();

        match &self.cli.command {
            Command::Tileset {
                base_tile,
                output,
                taper,
                format,
                topology,
            } => {
                generate_tileset(base_tile, output, *taper, *topology, *format)?;
            }
            Command::Retro {
                input,
                output,
                colors,
                palette,
                size,
            } => {
                let processor = retro_processor(*colors, *palette, (*size, *size));
                if input.is_dir() {
                    let report =
                        process_directory(&processor, input, output, self.progress_manager.as_mut())?;
                    log_summary(&report);
                } else {
                    process_file(&processor, input, output, OutputFormat::Auto)?;
                    log::info!("Retro image saved to {}", output.display());
                }
            }
            Command::Frames {
                input,
                output_dir,
                colors,
                palette,
                scale,
            } => {
                let processor =
                    retro_processor(*colors, *palette, (DEFAULT_PIXEL_SIZE, DEFAULT_PIXEL_SIZE));
                let report = process_animation(
                    &processor,
                    input,
                    output_dir,
                    *scale,
                    self.progress_manager.as_mut(),
                )?;
                log_summary(&report);
            }
            Command::Extend {
                input,
                output,
                mask_output,
                direction,
                original,
                transition,
                gradient,
                background,
            } => {
                let variant = if *gradient {
                    MaskVariant::Gradient
                } else {
                    MaskVariant::Binary
                };
                let extension = EdgeExtension::new(EdgeRegion::new(*direction, *original, *transition)?)
                    .with_variant(variant)
                    .with_background(*background);
                extend_image(&extension, input, output, mask_output)?;
            }
        }

        log::debug!("Finished in {:.2?}", start_time.elapsed());
        Ok(())
    }
}

fn retro_processor(colors: usize, palette: Option<usize>, target_size: (u32, u32)) -> RetroProcessor {
    RetroProcessor::new(PixelateOptions {
        target_size,
        num_colors: colors,
        palette_size: palette,
        ..PixelateOptions::default()
    })
}

fn log_summary(report: &BatchReport) {
    if report.is_clean() {
        log::info!("All {} items processed", report.attempted());
    } else {
        log::warn!(
            "{} of {} items skipped",
            report.failures().len(),
            report.attempted()
        );
    }
}

/// Build the extension composite and mask for `input` and write both
///
/// Both output formats are resolved before the source is decoded, and both
/// images are encoded before either file is written. If the mask cannot be
/// written the composite is removed again.
///
/// # Errors
///
/// Returns an error if either output format is unsupported, the input
/// cannot be decoded, the image is empty, or writing fails
pub fn extend_image(
    extension: &EdgeExtension,
    input: &Path,
    output: &Path,
    mask_output: &Path,
) -> Result<()> {
    let image_format = OutputFormat::Auto.resolve(output)?;
    let mask_format = OutputFormat::Auto.resolve(mask_output)?;
    if output == mask_output {
        return Err(invalid_parameter(
            "mask_output",
            &mask_output.display(),
            &"composite and mask must be written to different files",
        ));
    }

    let source = open_image(input)?;
    let (composite, mask) = extension.build(&source)?;

    let composite_bytes = encode_image(&DynamicImage::ImageRgb8(composite), image_format, output)?;
    let mask_bytes = encode_image(
        &DynamicImage::ImageLuma8(mask.into_gray()),
        mask_format,
        mask_output,
    )?;

    write_encoded(&composite_bytes, output)?;
    if let Err(error) = write_encoded(&mask_bytes, mask_output) {
        if let Err(cleanup) = std::fs::remove_file(output) {
            log::warn!("Could not remove {}: {cleanup}", output.display());
        }
        return Err(error);
    }
    log::info!(
        "Extension composite saved to {} with mask {}",
        output.display(),
        mask_output.display()
    );
    Ok(())
}
