//! Contract for the external image-generation collaborator
//!
//! A diffusion pipeline is treated as an opaque function from a request to
//! an image. Implementations own their model handle and device memory.

use image::DynamicImage;

/// Error type returned by generator implementations
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync>;

/// Parameters for a single generated image
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Text prompt
    pub prompt: String,
    /// Seed for the generator's noise source
    pub seed: u64,
    /// Number of denoising steps
    pub steps: u32,
    /// Classifier-free guidance scale
    pub guidance_scale: f32,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Ask for output that tiles seamlessly edge to edge
    pub seamless: bool,
}

/// A text-to-image backend
pub trait ImageGenerator {
    /// Produce one image for `request`
    ///
    /// # Errors
    ///
    /// Returns any backend failure as a single boxed error
    fn generate(&mut self, request: &GenerationRequest) -> Result<DynamicImage, GeneratorError>;
}

impl<F> ImageGenerator for F
where
    F: FnMut(&GenerationRequest) -> Result<DynamicImage, GeneratorError>,
{
    fn generate(&mut self, request: &GenerationRequest) -> Result<DynamicImage, GeneratorError> {
        self(request)
    }
}
