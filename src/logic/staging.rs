// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Copy delivered photos to LaTeX-safe filenames in the working directory.
//!
//! Missing inputs never fail staging: an absent source is replaced by a 1x1
//! placeholder so the compiler still finds every `\includegraphics` target.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use tracing::{debug, info, warn};

use crate::models::image_map::StagingPlan;
use crate::utils::hash::same_contents;

/// Minimal grayscale 1x1 PNG written when no encoder matches the destination.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x3A, 0x7E, 0x9B,
    0x55, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x60, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x01, 0x48, 0xAF, 0xA4, 0x71, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// What happened to one mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    /// Source copied to the destination.
    Staged,
    /// Destination already held identical bytes.
    Unchanged,
    /// Source missing; placeholder written.
    Placeholder,
    /// Source missing; an existing destination file was left in place.
    Kept,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    pub destination: PathBuf,
    pub status: StageStatus,
}

/// Outcome of [`stage_images`], one entry per mapping in plan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StagingReport {
    pub images: Vec<StagedImage>,
}

impl StagingReport {
    pub fn count(&self, status: StageStatus) -> usize {
        self.images.iter().filter(|i| i.status == status).count()
    }
}

/// Stage every mapping of `plan` from `images_dir` into `work_dir`.
pub fn stage_images(images_dir: &Path, work_dir: &Path, plan: &StagingPlan) -> Result<StagingReport> {
    info!(images = %images_dir.display(), count = plan.len(), "Staging images");
    fs::create_dir_all(work_dir)
        .with_context(|| format!("Failed to create working directory {:?}", work_dir))?;

    let have_sources = images_dir.is_dir();
    if !have_sources {
        warn!(
            images = %images_dir.display(),
            "Images directory not found; using placeholders"
        );
    }

    let mut report = StagingReport::default();
    for mapping in plan.iter() {
        let source = images_dir.join(&mapping.source);
        let destination = work_dir.join(&mapping.staged);

        let status = if have_sources && source.is_file() {
            copy_source(&source, &destination)?
        } else {
            if have_sources {
                warn!(source = %source.display(), "Missing image; using placeholder");
            }
            if destination.exists() {
                debug!(destination = %destination.display(), "Keeping existing file");
                StageStatus::Kept
            } else {
                write_placeholder(&destination)?;
                StageStatus::Placeholder
            }
        };

        if status == StageStatus::Staged {
            info!(staged = %mapping.staged, "Staged");
        }
        report.images.push(StagedImage {
            destination,
            status,
        });
    }

    info!(
        staged = report.count(StageStatus::Staged),
        unchanged = report.count(StageStatus::Unchanged),
        placeholders = report.count(StageStatus::Placeholder),
        kept = report.count(StageStatus::Kept),
        "Image staging finished"
    );
    Ok(report)
}

fn copy_source(source: &Path, destination: &Path) -> Result<StageStatus> {
    let mime = mime_guess::from_path(source).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        warn!(source = %source.display(), mime = %mime, "Source does not look like an image");
    }

    if same_contents(source, destination)? {
        debug!(destination = %destination.display(), "Already up to date");
        return Ok(StageStatus::Unchanged);
    }

    fs::copy(source, destination)
        .with_context(|| format!("Failed to copy {:?} to {:?}", source, destination))?;
    Ok(StageStatus::Staged)
}

/// Bytes of a 1x1 image in the format implied by `destination`'s extension.
pub fn placeholder_bytes(destination: &Path) -> Vec<u8> {
    let Ok(format) = ImageFormat::from_path(destination) else {
        return PLACEHOLDER_PNG.to_vec();
    };

    let pixel = RgbImage::from_pixel(1, 1, Rgb([128, 128, 128]));
    let mut buffer = Cursor::new(Vec::new());
    match pixel.write_to(&mut buffer, format) {
        Ok(()) => buffer.into_inner(),
        Err(err) => {
            debug!(format = ?format, error = %err, "No encoder for placeholder; writing PNG");
            PLACEHOLDER_PNG.to_vec()
        }
    }
}

fn write_placeholder(destination: &Path) -> Result<()> {
    fs::write(destination, placeholder_bytes(destination))
        .with_context(|| format!("Failed to write placeholder {:?}", destination))
}
