//! Explicit configuration for a generation batch, loadable from TOML
//!
//! ```toml
//! output_dir = "terrain_tiles"
//! seeds = [43]
//! steps = 2
//! guidance_scale = 0.0
//! seamless = true
//!
//! [prompts]
//! template = "Texture of {surface} during {season}"
//!
//! [[prompts.axes]]
//! name = "season"
//! values = ["spring", "winter"]
//!
//! [[prompts.axes]]
//! name = "surface"
//! values = ["grass", "rock"]
//!
//! [postprocess]
//! kind = "tileset"
//! taper_rate = 2.0
//! ```

use crate::generation::prompts::PromptMatrix;
use crate::generation::request::GenerationRequest;
use crate::io::configuration::{
    DEFAULT_GENERATION_SEED, DEFAULT_GENERATION_SIZE, DEFAULT_GUIDANCE_SCALE, DEFAULT_STEPS,
    DEFAULT_TAPER_RATE,
};
use crate::io::error::{AssetError, Result, file_system, invalid_parameter};
use crate::retro::pixelate::PixelateOptions;
use crate::tiling::tileset::Topology;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional step applied to each generated image before it is saved
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostProcess {
    /// Convert to retro pixel art
    Pixelate {
        /// Conversion parameters
        #[serde(flatten)]
        options: PixelateOptions,
    },
    /// Assemble a faded tileset around the generated tile
    Tileset {
        /// Fade exponent
        #[serde(default = "default_taper_rate")]
        taper_rate: f64,
        /// Grid layout
        #[serde(default)]
        topology: Topology,
    },
}

const fn default_taper_rate() -> f64 {
    DEFAULT_TAPER_RATE
}

fn default_seeds() -> Vec<u64> {
    vec![DEFAULT_GENERATION_SEED]
}

const fn default_steps() -> u32 {
    DEFAULT_STEPS
}

const fn default_guidance_scale() -> f32 {
    DEFAULT_GUIDANCE_SCALE
}

const fn default_size() -> u32 {
    DEFAULT_GENERATION_SIZE
}

/// Everything a generation driver needs, passed explicitly
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationPlan {
    /// Directory receiving the generated files
    pub output_dir: PathBuf,
    /// Each job is generated once per seed
    #[serde(default = "default_seeds")]
    pub seeds: Vec<u64>,
    /// Denoising steps per image
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Classifier-free guidance scale
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f32,
    /// Output width in pixels
    #[serde(default = "default_size")]
    pub width: u32,
    /// Output height in pixels
    #[serde(default = "default_size")]
    pub height: u32,
    /// Request seamlessly tiling output
    #[serde(default)]
    pub seamless: bool,
    /// Prompt template and axes
    pub prompts: PromptMatrix,
    /// Optional conversion applied before saving
    #[serde(default)]
    pub postprocess: Option<PostProcess>,
}

impl GenerationPlan {
    /// Plan with default generation parameters
    pub fn new(output_dir: impl Into<PathBuf>, prompts: PromptMatrix) -> Self {
        Self {
            output_dir: output_dir.into(),
            seeds: default_seeds(),
            steps: DEFAULT_STEPS,
            guidance_scale: DEFAULT_GUIDANCE_SCALE,
            width: DEFAULT_GENERATION_SIZE,
            height: DEFAULT_GENERATION_SIZE,
            seamless: false,
            prompts,
            postprocess: None,
        }
    }

    /// Seamless terrain textures with a two-step turbo schedule
    pub fn terrain(output_dir: impl Into<PathBuf>, seed: u64) -> Self {
        Self {
            seeds: vec![seed],
            steps: 2,
            guidance_scale: 0.0,
            seamless: true,
            ..Self::new(output_dir, PromptMatrix::terrain())
        }
    }

    /// Parse a plan from TOML text
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the text is not a valid plan
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| AssetError::Configuration {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Load a plan from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `Configuration`
    /// if it cannot be parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| file_system(path, "read file", e))?;
        let plan = Self::from_toml_str(&text, path)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Check parameters the generator cannot recover from
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty seed list, zero steps or a
    /// zero image size
    pub fn validate(&self) -> Result<()> {
        if self.seeds.is_empty() {
            return Err(invalid_parameter("seeds", &"[]", &"at least one seed is required"));
        }
        if self.steps == 0 {
            return Err(invalid_parameter("steps", &self.steps, &"must be at least 1"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", self.width, self.height),
                &"image dimensions must be non-zero",
            ));
        }
        Ok(())
    }

    /// Request for one prompt and seed under this plan
    pub fn request(&self, prompt: &str, seed: u64) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            seed,
            steps: self.steps,
            guidance_scale: self.guidance_scale,
            width: self.width,
            height: self.height,
            seamless: self.seamless,
        }
    }
}
