// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Paper editions: which LaTeX sources are written, staged and compiled.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{info, warn};

use crate::content::{illustrated, journal, submission};
use crate::logic::compiler::{CompileOutcome, compile, ensure_compiler, open_document};
use crate::logic::latex::{IeeeHeader, render_blind, render_ieee, render_title_page};
use crate::logic::staging::stage_images;
use crate::models::build::BuildConfig;
use crate::models::image_map::StagingPlan;
use crate::models::metadata::PaperMetadata;

pub const PAPER_TEX: &str = "hci_paper.tex";
pub const REPOSITORY_TEX: &str = "HCI_Paper_Repo.tex";
pub const BLIND_TEX: &str = "Manuscript_Blind.tex";
pub const TITLE_PAGE_TEX: &str = "Title_Page.tex";

/// Paper layouts that can be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Edition {
    /// IEEE journal text without figures.
    Journal,
    /// Journal layout with the collection photos and diagram.
    Illustrated,
    /// Repository copy plus anonymized manuscript for blind review.
    Submission,
}

impl Edition {
    fn stages_images(self) -> bool {
        !matches!(self, Edition::Journal)
    }
}

/// A rendered `.tex` source and the staged figures it includes.
#[derive(Clone, Debug)]
pub struct Document {
    pub file: &'static str,
    pub source: String,
    pub figures: Vec<&'static str>,
}

/// Flags shared by every command that writes LaTeX.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaperOptions {
    pub compile: bool,
    pub open: bool,
}

/// Files written by one run and, when compiled, what the compiler produced.
#[derive(Clone, Debug, Default)]
pub struct PaperOutput {
    pub sources: Vec<PathBuf>,
    pub outcomes: Vec<CompileOutcome>,
}

impl PaperOutput {
    /// True unless a compile ran and an expected PDF is missing.
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(CompileOutcome::is_produced)
    }
}

/// Render the LaTeX sources of an edition.
pub fn render_edition(edition: Edition, metadata: &PaperMetadata) -> Result<Vec<Document>> {
    let documents = match edition {
        Edition::Journal => {
            let manuscript = journal::manuscript();
            vec![Document {
                file: PAPER_TEX,
                source: render_ieee(metadata, &manuscript, IeeeHeader::Journal)?,
                figures: manuscript.figure_files(),
            }]
        }
        Edition::Illustrated => {
            let manuscript = illustrated::manuscript();
            vec![Document {
                file: PAPER_TEX,
                source: render_ieee(metadata, &manuscript, IeeeHeader::Journal)?,
                figures: manuscript.figure_files(),
            }]
        }
        Edition::Submission => {
            let repository = submission::repository_manuscript();
            let blind = submission::blind_manuscript();
            vec![
                Document {
                    file: REPOSITORY_TEX,
                    source: render_ieee(metadata, &repository, IeeeHeader::Repository)?,
                    figures: repository.figure_files(),
                },
                Document {
                    file: BLIND_TEX,
                    source: render_blind(metadata, &blind),
                    figures: blind.figure_files(),
                },
            ]
        }
    };
    Ok(documents)
}

/// Generate an edition: stage figures when needed, write sources, optionally compile.
pub fn build_paper(
    config: &BuildConfig,
    edition: Edition,
    options: PaperOptions,
) -> Result<PaperOutput> {
    info!(edition = ?edition, "Generating paper");
    if edition.stages_images() {
        stage_images(
            &config.images_dir,
            &config.work_dir,
            &StagingPlan::collection()?,
        )?;
    }
    let documents = render_edition(edition, &config.metadata)?;
    finish(config, documents, options)
}

/// Generate the non-blind title page that accompanies the submission.
pub fn build_title_page(config: &BuildConfig, options: PaperOptions) -> Result<PaperOutput> {
    info!("Generating title page");
    let document = Document {
        file: TITLE_PAGE_TEX,
        source: render_title_page(&config.metadata, submission::ABSTRACT),
        figures: Vec::new(),
    };
    finish(config, vec![document], options)
}

fn finish(
    config: &BuildConfig,
    documents: Vec<Document>,
    options: PaperOptions,
) -> Result<PaperOutput> {
    let mut output = PaperOutput::default();
    for document in &documents {
        output.sources.push(write_document(config, document)?);
    }
    if !options.compile {
        return Ok(output);
    }

    let compiler = ensure_compiler(config)?;
    for document in &documents {
        let outcome = compile(&compiler, &config.work_dir, document.file)?;
        if options.open
            && let CompileOutcome::Produced(pdf) = &outcome
            && let Err(err) = open_document(pdf)
        {
            warn!(error = %format!("{err:#}"), "Could not open PDF");
        }
        output.outcomes.push(outcome);
    }
    Ok(output)
}

fn write_document(config: &BuildConfig, document: &Document) -> Result<PathBuf> {
    for figure in &document.figures {
        if !config.output(figure).is_file() {
            warn!(figure, tex = document.file, "Figure referenced but not present");
        }
    }

    fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("Failed to create output directory {:?}", config.work_dir))?;
    let path = config.output(document.file);
    fs::write(&path, &document.source).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), "LaTeX source written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{
        BLIND_TEX, Edition, PAPER_TEX, PaperOptions, REPOSITORY_TEX, TITLE_PAGE_TEX, build_paper,
        build_title_page, render_edition,
    };
    use crate::models::build::BuildConfig;
    use crate::models::metadata::PaperMetadata;

    #[test]
    fn editions_render_expected_files() {
        let meta = PaperMetadata::default();
        let files = |edition| {
            render_edition(edition, &meta)
                .unwrap()
                .into_iter()
                .map(|d| d.file)
                .collect::<Vec<_>>()
        };

        assert_eq!(files(Edition::Journal), vec![PAPER_TEX]);
        assert_eq!(files(Edition::Illustrated), vec![PAPER_TEX]);
        assert_eq!(files(Edition::Submission), vec![REPOSITORY_TEX, BLIND_TEX]);
    }

    #[test]
    fn journal_edition_writes_source_without_staging() {
        let tmp = TempDir::new().unwrap();
        let config = BuildConfig::new(tmp.path());

        let output = build_paper(&config, Edition::Journal, PaperOptions::default()).unwrap();

        assert_eq!(output.sources, vec![tmp.path().join(PAPER_TEX)]);
        assert!(output.outcomes.is_empty());
        assert!(output.succeeded());
        assert!(!tmp.path().join("fig1_collection.jpg").exists());
    }

    // Submission stages the figures it includes even when no photos were delivered.
    #[test]
    fn submission_edition_stages_and_writes_both_sources() {
        let tmp = TempDir::new().unwrap();
        let config = BuildConfig::new(tmp.path());

        let output = build_paper(&config, Edition::Submission, PaperOptions::default()).unwrap();

        assert_eq!(output.sources.len(), 2);
        let repo = fs::read_to_string(tmp.path().join(REPOSITORY_TEX)).unwrap();
        assert!(repo.contains("{fig2a_qpid.jpg}"));
        for figure in ["fig1_collection.jpg", "fig2a_qpid.jpg", "fig3b_mnemonic.jpg"] {
            assert!(tmp.path().join(figure).is_file(), "{figure} not staged");
        }
        assert!(tmp.path().join(BLIND_TEX).is_file());
    }

    #[test]
    fn title_page_is_written() {
        let tmp = TempDir::new().unwrap();
        let config = BuildConfig::new(tmp.path());

        let output = build_title_page(&config, PaperOptions::default()).unwrap();

        assert_eq!(output.sources, vec![tmp.path().join(TITLE_PAGE_TEX)]);
        let tex = fs::read_to_string(&output.sources[0]).unwrap();
        assert!(tex.contains("Corresponding Author: Utah Hans"));
    }
}
