// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! README generation for the collection.
//!
//! Responsibilities:
//! - Assemble the README from fixed copy plus sections rendered from the artifact list.
//! - Derive table-of-contents anchors the way GitHub slugs headings.
//! - Optionally render a sanitized HTML preview of the result.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulldown_cmark::{Options, Parser, html};
use tracing::{debug, info};

use crate::content::collection::{
    COLLECTION_CAPTION, COLLECTION_FIGURE, COLLECTION_PHOTO, DIAGRAM_CAPTION, DIAGRAM_FIGURE,
};
use crate::content::readme as copy;
use crate::logic::paper::PAPER_TEX;
use crate::models::artifact::Artifact;
use crate::models::build::{BuildConfig, COMPILER_BINARY};
use crate::models::image_map::StagingPlan;
use crate::models::metadata::PaperMetadata;
use crate::utils::ensure_extension;

/// Output filename in the working directory.
pub const README_FILE: &str = "README.md";

/// One `##` section of the README.
struct ReadmeSection {
    heading: &'static str,
    /// Label in the table of contents.
    toc_label: &'static str,
    body: String,
}

impl ReadmeSection {
    fn new(heading: &'static str, toc_label: &'static str, body: impl Into<String>) -> Self {
        Self {
            heading,
            toc_label,
            body: body.into(),
        }
    }
}

/// Slug a heading the way GitHub builds `#fragment` links.
///
/// Letters and digits are lower-cased, spaces become `-`, other punctuation
/// and emoji are dropped. The emoji variation selector (U+FE0F) survives and is
/// percent-encoded along with any other non-ASCII character.
pub fn github_anchor(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for ch in heading.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            slug.extend(ch.to_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        } else if ch == '\u{FE0F}' {
            slug.push(ch);
        }
    }

    let mut encoded = String::with_capacity(slug.len());
    for ch in slug.chars() {
        if ch.is_ascii() {
            encoded.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Render the whole README as markdown.
///
/// Sections are emitted in a fixed order and separated by horizontal rules;
/// each section heading appears once and is linked from the table of contents.
pub fn render_readme(
    metadata: &PaperMetadata,
    artifacts: &[Artifact],
    plan: &StagingPlan,
) -> String {
    let sections = vec![
        ReadmeSection::new("📜 THE MANIFESTO", "📜 The Manifesto", copy::MANIFESTO),
        ReadmeSection::new("🖼️ Gallery", "🖼️ Gallery", gallery(artifacts)),
        ReadmeSection::new(
            "📦 THE ARTIFACTS",
            "📦 The Artifacts",
            artifact_catalogue(artifacts),
        ),
        ReadmeSection::new("⚡ Quickstart", "⚡ Quickstart", copy::QUICKSTART),
        ReadmeSection::new("🗂️ Repo Map", "🗂️ Repo Map", repo_map(plan)),
        ReadmeSection::new(
            "🧪 Build the HCI Paper",
            "🧪 Build the HCI Paper",
            copy::BUILD_PAPER,
        ),
        ReadmeSection::new(
            "🧠 Algorithms Inside",
            "🧠 Algorithms Inside",
            copy::ALGORITHMS,
        ),
        ReadmeSection::new("🛡️ Ethics & Safety", "🛡️ Ethics & Safety", copy::ETHICS),
        ReadmeSection::new("❓ FAQ", "❓ FAQ", copy::FAQ),
        ReadmeSection::new("🔖 Citation", "🔖 Citation", citation(metadata)),
        ReadmeSection::new("📄 License", "📄 License", copy::LICENSE),
        ReadmeSection::new("✉️ Contact", "✉️ Contact", contact(metadata)),
    ];

    let mut parts = Vec::with_capacity(sections.len() + 2);
    parts.push(header());
    parts.push(table_of_contents(&sections));
    parts.extend(
        sections
            .iter()
            .map(|section| format!("## {}\n{}", section.heading, section.body)),
    );

    let mut readme = parts.join("\n\n---\n\n");
    readme.push_str("\n\n<div align=\"center\">\n\n");
    readme.push_str(copy::FOOTER);
    readme.push_str("\n\n</div>\n");
    readme
}

fn header() -> String {
    format!(
        "<div align=\"center\">\n\n# {}\n### {}\n\n<img src=\"images/{}\" width=\"100%\" />\n\n{}\n\n</div>",
        copy::HEADLINE,
        copy::STRAPLINE,
        COLLECTION_PHOTO,
        copy::BADGES
    )
}

fn table_of_contents(sections: &[ReadmeSection]) -> String {
    let mut toc = String::from("## 🧭 Table of Contents");
    for section in sections {
        let _ = write!(
            toc,
            "\n- [{}](#{})",
            section.toc_label,
            github_anchor(section.heading)
        );
    }
    toc
}

/// Three-column image table: the collection, each artifact, then the diagram.
fn gallery(artifacts: &[Artifact]) -> String {
    let mut cells = vec![(COLLECTION_FIGURE, COLLECTION_CAPTION)];
    cells.extend(artifacts.iter().map(|a| (a.figure, a.caption)));
    cells.push((DIAGRAM_FIGURE, DIAGRAM_CAPTION));

    let mut table = String::from("\n<div align=\"center\">\n\n| | | |\n|---|---|---|");
    for row in cells.chunks(3) {
        let images: Vec<String> = row
            .iter()
            .map(|(file, _)| format!("<img src=\"{file}\" width=\"100%\" />"))
            .collect();
        let captions: Vec<String> = row
            .iter()
            .map(|(_, caption)| format!("<em>{caption}</em>"))
            .collect();
        let _ = write!(table, "\n| {} |", images.join(" | "));
        let _ = write!(table, "\n| {} |", captions.join(" | "));
    }
    table.push_str("\n\n</div>");
    table
}

fn artifact_catalogue(artifacts: &[Artifact]) -> String {
    let entries: Vec<String> = artifacts
        .iter()
        .enumerate()
        .map(|(idx, artifact)| {
            format!(
                "### {}\n<img src=\"images/{}\" width=\"100%\" />\n> *\"{}\"*\n\n- **Material:** {}\n- **Payload:** {}\n- **Function:** {}",
                artifact.heading(idx + 1),
                artifact.photo,
                artifact.quote,
                artifact.material,
                artifact.payload,
                artifact.function,
            )
        })
        .collect();
    format!("\n{}", entries.join("\n\n"))
}

fn tree_line(out: &mut String, entry: &str, comment: Option<&str>) {
    match comment {
        Some(comment) => {
            let _ = write!(out, "\n{entry:<32}# {comment}");
        }
        None => {
            let _ = write!(out, "\n{entry}");
        }
    }
}

/// Project layout as produced by the generator commands.
fn repo_map(plan: &StagingPlan) -> String {
    let mut map = String::from("\n```\n./");
    tree_line(
        &mut map,
        &format!("├─ {README_FILE}"),
        Some("Written by `artifact-press readme`"),
    );
    tree_line(
        &mut map,
        &format!("├─ {PAPER_TEX}"),
        Some("LaTeX source of the paper"),
    );
    tree_line(
        &mut map,
        &format!(
            "├─ {}",
            ensure_extension(PathBuf::from(PAPER_TEX), "pdf").display()
        ),
        Some("Compiled paper"),
    );
    tree_line(&mut map, "├─ images/", Some("High-res artifact imagery"));

    let sources: Vec<&str> = plan.iter().map(|m| m.source.as_str()).collect();
    for (idx, source) in sources.iter().enumerate() {
        let branch = if idx + 1 == sources.len() {
            "└─"
        } else {
            "├─"
        };
        tree_line(&mut map, &format!("│  {branch} {source}"), None);
    }

    for (idx, mapping) in plan.iter().enumerate() {
        let comment = (idx == 0).then_some("Staged figures (LaTeX-safe names)");
        tree_line(&mut map, &format!("├─ {}", mapping.staged), comment);
    }
    tree_line(
        &mut map,
        &format!("└─ {COMPILER_BINARY}"),
        Some("Portable LaTeX engine (Tectonic)"),
    );
    map.push_str("\n```");
    map
}

fn citation(metadata: &PaperMetadata) -> String {
    format!(
        "If you reference this work, please cite the paper:\n\n```\n@inproceedings{{{},\n  title     = {{{}}},\n  author    = {{{}}},\n  year      = {{{}}},\n  booktitle = {{{}}},\n  url       = {{{}}}\n}}\n```",
        copy::CITATION_KEY,
        metadata.title,
        metadata.author,
        metadata.year(),
        copy::CITATION_VENUE,
        copy::CITATION_URL,
    )
}

fn contact(metadata: &PaperMetadata) -> String {
    let department = metadata
        .affiliation
        .split(',')
        .next()
        .unwrap_or(&metadata.affiliation)
        .trim();
    format!(
        "- {}\n- {} <{}>\n- \"{}\"",
        department,
        metadata.author,
        metadata.email,
        copy::MOTTO
    )
}

/// Write `README.md` into the working directory.
pub fn write_readme(config: &BuildConfig, artifacts: &[Artifact]) -> Result<(PathBuf, String)> {
    let plan = StagingPlan::collection()?;
    let markdown = render_readme(&config.metadata, artifacts, &plan);
    let path = config.output(README_FILE);

    fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("Failed to create output directory {:?}", config.work_dir))?;
    fs::write(&path, &markdown).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), bytes = markdown.len(), "README generated");
    Ok((path, markdown))
}

/// Write a standalone HTML preview of `markdown` next to the given path (`.html` enforced).
pub fn write_html_preview(markdown: &str, target: &Path) -> Result<PathBuf> {
    let path = ensure_extension(target.to_path_buf(), "html");
    let body = markdown_to_html(markdown);
    let document = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        copy::HEADLINE,
        body
    );

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    fs::write(&path, document).with_context(|| format!("Failed to write {:?}", path))?;
    debug!(path = %path.display(), "HTML preview written");
    Ok(path)
}

/// Render markdown to sanitized HTML.
fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    ammonia::Builder::default().clean(&html_output).to_string()
}
