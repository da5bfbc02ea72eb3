//! Batch pixelation of image directories and animation frames
//!
//! Each item is converted independently. A failing item is logged, recorded
//! in the [`BatchReport`] and skipped; only problems with the batch itself
//! (unreadable input directory, uncreatable output directory) abort the run.

use crate::io::configuration::{
    FRAME_INDEX_WIDTH, FRAME_PREFIX, MAX_CONSECUTIVE_FRAME_ERRORS, RETRO_PREFIX,
    SUPPORTED_INPUT_EXTENSIONS,
};
use crate::io::error::{AssetError, Result, WithPath, file_system, invalid_parameter};
use crate::io::image::{OutputFormat, has_supported_extension, open_image, save_image};
use crate::io::progress::ProgressManager;
use crate::io::report::BatchReport;
use crate::retro::pixelate::RetroProcessor;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, ImageDecoder};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Supported image files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be listed
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| file_system(dir, "read directory", e))?;
    for entry in entries {
        let path = entry.with_path(dir)?.path();
        if path.is_file() && has_supported_extension(&path, &SUPPORTED_INPUT_EXTENSIONS) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for a retro-processed input: `<output_dir>/retro_<file_name>`
///
/// The full input file name is kept so inputs sharing a stem stay apart. A
/// `.png` suffix is appended unless the name already ends in one.
pub fn retro_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default().to_string_lossy();
    let is_png = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        output_dir.join(format!("{RETRO_PREFIX}{name}"))
    } else {
        output_dir.join(format!("{RETRO_PREFIX}{name}.png"))
    }
}

/// Output path for a frame: `<output_dir>/frame_NNNN.png`
pub fn frame_output_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!(
        "{FRAME_PREFIX}{index:0width$}.png",
        width = FRAME_INDEX_WIDTH
    ))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| file_system(dir, "create directory", e))
}

/// Pixelate one file and write it losslessly
///
/// # Errors
///
/// Returns an error if decoding, conversion, format resolution or writing
/// fails
pub fn process_file(
    processor: &RetroProcessor,
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let format = format.resolve(output)?;
    let image = open_image(input)?;
    let converted = processor.pixelate(&image)?;
    save_image(&DynamicImage::ImageRgb8(converted), output, format)
}

/// Pixelate every supported image in `input_dir` into `output_dir`
///
/// # Errors
///
/// Returns `FileSystem` if the input directory cannot be listed or the
/// output directory cannot be created
pub fn process_directory(
    processor: &RetroProcessor,
    input_dir: &Path,
    output_dir: &Path,
    mut progress: Option<&mut ProgressManager>,
) -> Result<BatchReport> {
    let inputs = collect_inputs(input_dir)?;
    ensure_dir(output_dir)?;

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize("images", inputs.len());
    }

    let mut report = BatchReport::new();
    let mut claimed: HashSet<PathBuf> = HashSet::with_capacity(inputs.len());
    for input in &inputs {
        let name = input.file_name().unwrap_or_default().to_string_lossy().to_string();
        if let Some(pm) = progress.as_deref_mut() {
            pm.start_item(&name);
        }

        let output = retro_output_path(input, output_dir);
        let outcome = if claimed.insert(output.clone()) {
            process_file(processor, input, &output, OutputFormat::Png)
        } else {
            Err(invalid_parameter(
                "input",
                &input.display(),
                &format!("output {} is already taken by another input", output.display()),
            ))
        };
        let succeeded = outcome.is_ok();
        match outcome {
            Ok(()) => report.record_output(&output),
            Err(error) => report.record_failure(name, &error),
        }

        if let Some(pm) = progress.as_deref_mut() {
            pm.complete_item(succeeded);
        }
    }

    if let Some(pm) = progress.as_deref() {
        pm.finish();
    }
    log::info!(
        "Retro assets saved to {} ({} written, {} skipped)",
        output_dir.display(),
        report.written().len(),
        report.failures().len()
    );
    Ok(report)
}

/// Low-resolution size for frames of the given size: each side divided by
/// `scaling_factor`, never below one pixel
///
/// # Errors
///
/// Returns `InvalidParameter` if `scaling_factor` is zero
pub fn scaled_size(size: (u32, u32), scaling_factor: u32) -> Result<(u32, u32)> {
    if scaling_factor == 0 {
        return Err(invalid_parameter(
            "scaling_factor",
            &scaling_factor,
            &"must be at least 1",
        ));
    }
    Ok((
        (size.0 / scaling_factor).max(1),
        (size.1 / scaling_factor).max(1),
    ))
}

/// Pixelate every frame of an animated GIF into numbered PNG files
///
/// The intermediate size is the animation size divided by `scaling_factor`,
/// overriding the processor's own target size. Frames are numbered by their
/// position in the stream, so a skipped frame leaves a gap.
///
/// # Errors
///
/// Returns an error if the animation cannot be opened, its header cannot
/// be decoded, the scaling factor is zero, or the output directory cannot
/// be created
pub fn process_animation(
    processor: &RetroProcessor,
    input: &Path,
    output_dir: &Path,
    scaling_factor: u32,
    mut progress: Option<&mut ProgressManager>,
) -> Result<BatchReport> {
    let file = File::open(input).map_err(|e| file_system(input, "open file", e))?;
    let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| AssetError::ImageDecode {
        path: input.to_path_buf(),
        source: e,
    })?;
    let target_size = scaled_size(decoder.dimensions(), scaling_factor)?;
    let frame_processor = processor.with_target_size(target_size);
    ensure_dir(output_dir)?;

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize("frames", 0);
    }

    let mut report = BatchReport::new();
    let mut consecutive_errors = 0;
    for (index, frame) in decoder.into_frames().enumerate() {
        let name = format!("{FRAME_PREFIX}{index:0width$}", width = FRAME_INDEX_WIDTH);
        if let Some(pm) = progress.as_deref_mut() {
            pm.start_item(&name);
        }

        let output = frame_output_path(output_dir, index);
        let outcome = frame
            .map_err(|e| AssetError::ImageDecode {
                path: input.to_path_buf(),
                source: e,
            })
            .and_then(|frame| {
                let image = DynamicImage::ImageRgba8(frame.into_buffer());
                let converted = frame_processor.pixelate(&image)?;
                save_image(&DynamicImage::ImageRgb8(converted), &output, OutputFormat::Png)
            });

        let succeeded = outcome.is_ok();
        match outcome {
            Ok(()) => {
                consecutive_errors = 0;
                report.record_output(&output);
            }
            Err(error) => {
                consecutive_errors += 1;
                report.record_failure(name, &error);
            }
        }
        if let Some(pm) = progress.as_deref_mut() {
            pm.complete_item(succeeded);
        }

        if consecutive_errors >= MAX_CONSECUTIVE_FRAME_ERRORS {
            log::warn!(
                "Stopping after {consecutive_errors} consecutive frame errors in {}",
                input.display()
            );
            break;
        }
    }

    if let Some(pm) = progress.as_deref() {
        pm.finish();
    }
    log::info!(
        "Processed {} frames. Retro frames saved to {}",
        report.written().len(),
        output_dir.display()
    );
    Ok(report)
}
