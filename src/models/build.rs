// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Resolved run configuration handed to every build step.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::models::metadata::PaperMetadata;

/// Release archive fetched when no local compiler is present.
pub const DEFAULT_COMPILER_URL: &str = "https://github.com/tectonic-typesetting/tectonic/releases/download/tectonic%400.14.1/tectonic-0.14.1-x86_64-pc-windows-msvc.zip";

/// Name of the compiler binary inside the working directory and the archive.
pub const COMPILER_BINARY: &str = if cfg!(windows) {
    "tectonic.exe"
} else {
    "tectonic"
};

/// Filename the downloaded archive is written to before extraction.
pub const COMPILER_ARCHIVE: &str = "tectonic.zip";

/// How the typesetting compiler is located or obtained.
#[derive(Clone, Debug)]
pub struct CompilerSettings {
    /// Use this binary and never download.
    pub explicit: Option<PathBuf>,
    /// Archive to download when the binary is missing; `None` disables bootstrapping.
    pub url: Option<Url>,
    /// Expected SHA-256 of the downloaded archive (lowercase hex).
    pub sha256: Option<String>,
    pub timeout: Duration,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            explicit: None,
            url: default_compiler_url(),
            sha256: None,
            timeout: Duration::from_secs(300),
        }
    }
}

/// The prebuilt archive only ships a Windows binary; other platforms need an explicit URL or path.
pub fn default_compiler_url() -> Option<Url> {
    if cfg!(windows) {
        Url::parse(DEFAULT_COMPILER_URL).ok()
    } else {
        None
    }
}

/// Everything a run needs: where to read, where to write, and what to print.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory receiving README, `.tex`, staged figures, PDFs and the compiler.
    pub work_dir: PathBuf,
    /// Directory holding the delivered photos.
    pub images_dir: PathBuf,
    pub metadata: PaperMetadata,
    pub compiler: CompilerSettings,
}

impl BuildConfig {
    /// Defaults rooted at `work_dir`, with photos under `work_dir/images`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Self {
            images_dir: work_dir.join("images"),
            work_dir,
            metadata: PaperMetadata::default(),
            compiler: CompilerSettings::default(),
        }
    }

    /// Path of a file inside the working directory.
    pub fn output(&self, name: impl AsRef<Path>) -> PathBuf {
        self.work_dir.join(name)
    }
}
