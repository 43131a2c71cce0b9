// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::logic::paper::Edition;

#[derive(Debug, Parser)]
#[command(name = "artifact-press", version)]
#[command(about = "Generate the README and LaTeX papers for the Unorthodox Artifacts collection")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory receiving README, LaTeX sources, staged figures and PDFs.
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "ARTIFACT_PRESS_WORK_DIR",
        default_value = "."
    )]
    pub work_dir: PathBuf,

    /// Directory holding the delivered photos [default: <work-dir>/images].
    #[arg(long, global = true, env = "ARTIFACT_PRESS_IMAGES_DIR")]
    pub images_dir: Option<PathBuf>,

    /// JSON file overriding title, author, affiliation, email, received or journal.
    #[arg(long, global = true, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Use this compiler binary; never download.
    #[arg(long, global = true, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Archive to download when the compiler is missing.
    #[arg(long, global = true, env = "ARTIFACT_PRESS_COMPILER_URL", value_name = "URL")]
    pub compiler_url: Option<Url>,

    /// Expected SHA-256 of the downloaded archive.
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_sha256)]
    pub compiler_sha256: Option<String>,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args, Clone, Copy)]
pub struct CompileArgs {
    /// Write the LaTeX sources only.
    #[arg(long)]
    pub no_compile: bool,

    /// Open produced PDFs with the system viewer.
    #[arg(long, conflicts_with = "no_compile")]
    pub open: bool,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Write README.md.
    Readme {
        /// Also write a sanitized HTML preview.
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },

    /// Generate (and compile) one edition of the paper.
    Paper {
        #[arg(value_enum)]
        edition: Edition,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Generate (and compile) the non-blind title page.
    TitlePage {
        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Copy photos to LaTeX-safe figure names, with placeholders for missing ones.
    Stage,

    /// Make sure the compiler is available, downloading it if needed.
    Bootstrap,
}

fn parse_sha256(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err("expected 64 hexadecimal characters".to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Cmd};
    use crate::logic::paper::Edition;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_paper_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "artifact-press",
            "paper",
            "submission",
            "--no-compile",
            "-C",
            "out",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.global.work_dir, PathBuf::from("out"));
        assert_eq!(cli.global.verbose, 2);
        match cli.cmd {
            Cmd::Paper { edition, compile } => {
                assert_eq!(edition, Edition::Submission);
                assert!(compile.no_compile);
                assert!(!compile.open);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_digest_and_conflicting_flags() {
        assert!(
            Cli::try_parse_from(["artifact-press", "--compiler-sha256", "xyz", "bootstrap"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["artifact-press", "title-page", "--no-compile", "--open"])
                .is_err()
        );
    }
}
