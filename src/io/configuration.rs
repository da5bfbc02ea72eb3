//! Processing constants and runtime configuration defaults

// Tileset defaults
/// Linear fade for edge and corner masks
pub const DEFAULT_TAPER_RATE: f64 = 1.0;

// Retro pixelation defaults
/// Colors kept by the first quantization pass
pub const DEFAULT_NUM_COLORS: usize = 16;
/// Side length of the downsampled pixel-art image
pub const DEFAULT_PIXEL_SIZE: u32 = 64;
/// Saturation multiplier applied before downsampling
pub const SATURATION_BOOST: f32 = 1.25;
/// Contrast multiplier applied before downsampling
pub const CONTRAST_BOOST: f32 = 1.25;
/// Frame downscale divisor for animation sources
pub const DEFAULT_FRAME_SCALING: u32 = 8;

// Clustering budget
/// Fixed seed for reproducible palettes
pub const QUANTIZE_SEED: u64 = 42;
/// Maximum k-means iterations per pass
pub const KMEANS_MAX_ITERATIONS: usize = 300;
/// Total squared center shift treated as convergence, channels in `0..=1`
pub const KMEANS_TOLERANCE: f32 = 1e-4;
/// Largest palette a single clustering pass can produce
pub const MAX_PALETTE_COLORS: usize = 256;

// Inpaint defaults
/// Share of the tile kept verbatim
pub const DEFAULT_ORIGINAL_FRACTION: f64 = 0.3;
/// Share of the tile used as the blend band
pub const DEFAULT_TRANSITION_FRACTION: f64 = 0.3;
/// Slack allowed when checking that fractions sum to at most one
pub const FRACTION_EPSILON: f64 = 1e-9;

// Batch input and output naming
/// Extensions accepted when scanning an input directory
pub const SUPPORTED_INPUT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
/// Prefix added to retro-processed filenames
pub const RETRO_PREFIX: &str = "retro_";
/// Prefix for numbered animation frames
pub const FRAME_PREFIX: &str = "frame_";
/// Zero-padded width of frame numbers
pub const FRAME_INDEX_WIDTH: usize = 4;
// A decoder stuck on a corrupt stream keeps yielding errors
/// Consecutive frame errors after which the stream is treated as ended
pub const MAX_CONSECUTIVE_FRAME_ERRORS: usize = 8;

// Generation defaults
/// Seed used when a plan names none
pub const DEFAULT_GENERATION_SEED: u64 = 42;
/// Denoising steps per image
pub const DEFAULT_STEPS: u32 = 30;
/// Classifier-free guidance scale
pub const DEFAULT_GUIDANCE_SCALE: f32 = 3.5;
/// Generated image side length
pub const DEFAULT_GENERATION_SIZE: u32 = 512;

// Progress and logging
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
