//! Drives a generator over every job of a plan and saves the results

use crate::generation::plan::{GenerationPlan, PostProcess};
use crate::generation::request::ImageGenerator;
use crate::io::error::{AssetError, Result, file_system};
use crate::io::image::{OutputFormat, save_image};
use crate::io::progress::ProgressManager;
use crate::io::report::BatchReport;
use crate::retro::pixelate::RetroProcessor;
use crate::tiling::tileset::build_tileset;
use image::DynamicImage;
use std::path::PathBuf;

/// Output filename for a job: `<seed>_<job name>.png`
pub fn output_filename(seed: u64, job_name: &str) -> String {
    if job_name.is_empty() {
        format!("{seed}.png")
    } else {
        format!("{seed}_{job_name}.png")
    }
}

/// Apply an optional post-processing step to a generated image
///
/// # Errors
///
/// Returns any error raised by the pixelation or tileset step
pub fn apply_postprocess(image: DynamicImage, step: Option<&PostProcess>) -> Result<DynamicImage> {
    match step {
        None => Ok(image),
        Some(PostProcess::Pixelate { options }) => {
            let converted = RetroProcessor::new(*options).pixelate(&image)?;
            Ok(DynamicImage::ImageRgb8(converted))
        }
        Some(PostProcess::Tileset {
            taper_rate,
            topology,
        }) => {
            let tileset = build_tileset(&image.to_rgba8(), *taper_rate, *topology)?;
            Ok(DynamicImage::ImageRgba8(tileset))
        }
    }
}

/// Runs a plan against an image generator
pub struct GenerationRunner<G: ImageGenerator> {
    generator: G,
}

impl<G: ImageGenerator> GenerationRunner<G> {
    /// Wrap a generator
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Give back the generator
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Generate, post-process and save every seed and job of `plan`
    ///
    /// Jobs run in seed order, then prompt order. A job that fails to
    /// generate, convert or save is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan is invalid, its prompts cannot be
    /// expanded, or the output directory cannot be created
    pub fn run(
        &mut self,
        plan: &GenerationPlan,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<BatchReport> {
        plan.validate()?;
        let jobs = plan.prompts.expand()?;
        std::fs::create_dir_all(&plan.output_dir)
            .map_err(|e| file_system(&plan.output_dir, "create directory", e))?;

        if let Some(pm) = progress.as_deref_mut() {
            pm.initialize("generate", jobs.len() * plan.seeds.len());
        }

        let mut report = BatchReport::new();
        for &seed in &plan.seeds {
            for job in &jobs {
                let filename = output_filename(seed, &job.name);
                if let Some(pm) = progress.as_deref_mut() {
                    pm.start_item(&filename);
                }

                let output: PathBuf = plan.output_dir.join(&filename);
                let request = plan.request(&job.prompt, seed);
                let outcome = self
                    .generator
                    .generate(&request)
                    .map_err(|e| AssetError::Generation {
                        job: filename.clone(),
                        reason: e.to_string(),
                    })
                    .and_then(|image| apply_postprocess(image, plan.postprocess.as_ref()))
                    .and_then(|image| save_image(&image, &output, OutputFormat::Png));

                let succeeded = outcome.is_ok();
                match outcome {
                    Ok(()) => report.record_output(&output),
                    Err(error) => report.record_failure(filename, &error),
                }
                if let Some(pm) = progress.as_deref_mut() {
                    pm.complete_item(succeeded);
                }
            }
        }

        if let Some(pm) = progress.as_deref() {
            pm.finish();
        }
        log::info!(
            "Generated {} images into {} ({} failed)",
            report.written().len(),
            plan.output_dir.display(),
            report.failures().len()
        );
        Ok(report)
    }
}
