// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point: turn parsed arguments into a `BuildConfig` and dispatch.

pub mod cli;
pub mod logging;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use crate::content::collection::ARTIFACTS;
use crate::logic::compiler::ensure_compiler;
use crate::logic::paper::{PaperOptions, PaperOutput, build_paper, build_title_page};
use crate::logic::readme::{write_html_preview, write_readme};
use crate::logic::staging::{StageStatus, stage_images};
use crate::models::build::BuildConfig;
use crate::models::image_map::StagingPlan;
use crate::models::metadata::PaperMetadata;
use cli::{Cli, Cmd, CompileArgs, GlobalArgs};

/// Resolve global flags into the configuration shared by every command.
pub fn build_config(global: &GlobalArgs) -> Result<BuildConfig> {
    let mut config = BuildConfig::new(&global.work_dir);
    if let Some(images_dir) = &global.images_dir {
        config.images_dir = images_dir.clone();
    }
    config.metadata = PaperMetadata::load(global.metadata.as_deref())?;
    config.compiler.explicit = global.compiler.clone();
    if let Some(url) = &global.compiler_url {
        config.compiler.url = Some(url.clone());
    }
    config.compiler.sha256 = global.compiler_sha256.clone();
    Ok(config)
}

fn paper_options(args: CompileArgs) -> PaperOptions {
    PaperOptions {
        compile: !args.no_compile,
        open: args.open,
    }
}

/// Run the selected command. A missing PDF after compilation maps to exit status 1.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = build_config(&cli.global)?;

    match cli.cmd {
        Cmd::Readme { html } => {
            let (_, markdown) = write_readme(&config, &ARTIFACTS)?;
            if let Some(target) = html {
                let path = write_html_preview(&markdown, &target)?;
                info!(path = %path.display(), "HTML preview written");
            }
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Paper { edition, compile } => {
            let output = build_paper(&config, edition, paper_options(compile))?;
            Ok(report(&output))
        }
        Cmd::TitlePage { compile } => {
            let output = build_title_page(&config, paper_options(compile))?;
            Ok(report(&output))
        }
        Cmd::Stage => {
            let staged = stage_images(
                &config.images_dir,
                &config.work_dir,
                &StagingPlan::collection()?,
            )?;
            for image in &staged.images {
                if image.status == StageStatus::Placeholder {
                    info!(destination = %image.destination.display(), "Placeholder in use");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Bootstrap => {
            let compiler = ensure_compiler(&config)?;
            info!(compiler = %compiler.display(), "Compiler ready");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(output: &PaperOutput) -> ExitCode {
    if output.outcomes.is_empty() {
        info!(sources = output.sources.len(), "Compilation skipped");
        return ExitCode::SUCCESS;
    }
    if output.succeeded() {
        for outcome in &output.outcomes {
            info!(pdf = %outcome.pdf().display(), "Ready");
        }
        ExitCode::SUCCESS
    } else {
        let missing = output.outcomes.iter().filter(|o| !o.is_produced()).count();
        error!(missing, "Compilation failed; check the compiler output above");
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::process::ExitCode;

    use clap::Parser;
    use tempfile::TempDir;

    use super::{build_config, run};
    use crate::app::cli::Cli;

    #[test]
    fn build_config_applies_overrides() {
        let tmp = TempDir::new().unwrap();
        let meta = tmp.path().join("meta.json");
        fs::write(&meta, r#"{"journal":"Leonardo, Vol. 59"}"#).unwrap();
        let work = tmp.path().display().to_string();
        let meta_arg = meta.display().to_string();

        let cli = Cli::try_parse_from([
            "artifact-press",
            "-C",
            work.as_str(),
            "--metadata",
            meta_arg.as_str(),
            "--images-dir",
            "photos",
            "stage",
        ])
        .unwrap();
        let config = build_config(&cli.global).unwrap();

        assert_eq!(config.work_dir, tmp.path());
        assert_eq!(config.images_dir, std::path::PathBuf::from("photos"));
        assert_eq!(config.metadata.journal, "Leonardo, Vol. 59");
    }

    #[test]
    fn run_readme_writes_markdown_and_preview() {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().display().to_string();
        let html = tmp.path().join("preview.html").display().to_string();
        let cli = Cli::try_parse_from([
            "artifact-press",
            "-C",
            work.as_str(),
            "readme",
            "--html",
            html.as_str(),
        ])
        .unwrap();

        assert_eq!(run(cli).unwrap(), ExitCode::SUCCESS);
        assert!(tmp.path().join("README.md").is_file());
        assert!(tmp.path().join("preview.html").is_file());
    }
}
