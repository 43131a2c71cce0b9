// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! LaTeX rendering for the paper layouts.
//!
//! Responsibilities:
//! - Emit the IEEEtran documents (journal header or repository header).
//! - Emit the anonymized 12pt article for blind review and the separate title page.
//! - Render figure blocks and bibliographies from the manuscript model.
//!
//! Section prose is sanitized when the manuscript is built. Metadata fields are
//! free-form and are escaped literally here, at render time.

use std::fmt::Write as _;

use anyhow::Result;

use crate::models::manuscript::{Block, Figure, Manuscript, Reference, Section};
use crate::models::metadata::PaperMetadata;
use crate::utils::{latex_literal, latex_text};

const IEEE_PREAMBLE: &str = r"\documentclass[journal]{IEEEtran}
\usepackage[utf8]{inputenc}
\usepackage{cite}
\usepackage{amsmath,amssymb,amsfonts}
\usepackage{graphicx}
\usepackage{textcomp}
\usepackage{xcolor}
";

const ARTICLE_PREAMBLE: &str = r"\documentclass[12pt, letterpaper]{article}
\usepackage[utf8]{inputenc}
\usepackage[margin=1in]{geometry}
\usepackage{setspace}
";

/// Title block variant for IEEEtran documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IeeeHeader {
    /// `\thanks` footnotes with received date and contact, plus a `\markboth` running head.
    Journal,
    /// Author with italic affiliation underneath, no footnotes.
    Repository,
}

/// Render a two-column IEEEtran paper.
pub fn render_ieee(
    metadata: &PaperMetadata,
    manuscript: &Manuscript,
    header: IeeeHeader,
) -> Result<String> {
    let title = latex_literal(&metadata.title);
    let author = latex_literal(&metadata.author);
    let affiliation = latex_literal(&metadata.affiliation);

    let mut doc = String::from(IEEE_PREAMBLE);
    doc.push_str("\n\\begin{document}\n\n");
    let _ = writeln!(doc, "\\title{{{title}}}\n");

    match header {
        IeeeHeader::Journal => {
            let _ = writeln!(
                doc,
                "\\author{{{author}\n\\thanks{{Manuscript received {}.}}\n\\thanks{{{affiliation} (email: {}).}}}}\n",
                metadata.received_long()?,
                latex_literal(&metadata.email),
            );
            let _ = writeln!(
                doc,
                "\\markboth{{{}}}\n{{{author}: {title}}}\n",
                latex_literal(&metadata.journal)
            );
        }
        IeeeHeader::Repository => {
            let _ = writeln!(doc, "\\author{{{author}\\\\ \\textit{{{affiliation}}}}}");
        }
    }
    doc.push_str("\\maketitle\n\n");

    let _ = writeln!(
        doc,
        "\\begin{{abstract}}\n{}\n\\end{{abstract}}\n",
        manuscript.abstract_text
    );
    if let Some(keywords) = manuscript.keywords {
        let _ = writeln!(
            doc,
            "\\begin{{IEEEkeywords}}\n{}\n\\end{{IEEEkeywords}}\n",
            latex_text(keywords)
        );
    }

    for (idx, section) in manuscript.sections.iter().enumerate() {
        render_section(&mut doc, section, idx == 0);
    }

    doc.push_str(&bibliography(&manuscript.references));
    doc.push_str("\n\\end{document}\n");
    Ok(doc)
}

/// Render the anonymized manuscript: no author details, double spacing,
/// bibliography on its own page.
pub fn render_blind(metadata: &PaperMetadata, manuscript: &Manuscript) -> String {
    let mut doc = String::from(ARTICLE_PREAMBLE);
    doc.push_str("\\usepackage{graphicx}\n\\usepackage{amsmath}\n\\usepackage{cite}\n\n");
    doc.push_str("\\doublespacing\n\n\\begin{document}\n\n");
    let _ = writeln!(
        doc,
        "\\begin{{center}}\n    \\textbf{{\\Large {}}}\n\n    \\vspace{{1cm}}\n    \\textit{{[Author Details Redacted for Blind Review]}}\n\\end{{center}}\n",
        latex_literal(&metadata.title)
    );
    let _ = writeln!(
        doc,
        "\\begin{{abstract}}\n\\noindent {}\n\\end{{abstract}}\n\n\\newpage\n",
        manuscript.abstract_text
    );

    for section in &manuscript.sections {
        render_section(&mut doc, section, false);
    }

    doc.push_str("\\newpage\n");
    doc.push_str(&bibliography(&manuscript.references));
    doc.push_str("\n\\end{document}\n");
    doc
}

/// Render the non-blind title page that accompanies the blind manuscript.
pub fn render_title_page(metadata: &PaperMetadata, abstract_text: &str) -> String {
    let author = latex_literal(&metadata.author);
    let mut doc = String::from(ARTICLE_PREAMBLE);
    doc.push_str("\n\\begin{document}\n\n\\vspace*{2cm}\n\n");
    let _ = writeln!(
        doc,
        "\\begin{{center}}\n    \\textbf{{\\Large {}}}\n\n    \\vspace{{2cm}}\n\n    \\textbf{{{author}}} \\\\\n    \\vspace{{0.5cm}}\n    \\textit{{{}}} \\\\\n    \\texttt{{{}}}\n\n    \\vspace{{3cm}}\n\\end{{center}}\n",
        latex_literal(&metadata.title),
        latex_literal(&metadata.affiliation),
        latex_literal(&metadata.email),
    );
    let _ = writeln!(
        doc,
        "\\noindent \\textbf{{Abstract:}} \\\\\n{}\n",
        latex_text(abstract_text)
    );
    let _ = writeln!(
        doc,
        "\\vfill\n\\noindent \\textit{{Corresponding Author: {author}}}\n\n\\end{{document}}"
    );
    doc
}

/// Open a paragraph with an IEEE drop cap built from its first word.
///
/// `We live` becomes `\IEEEPARstart{W}{e} live`. Text that does not start
/// with a letter is returned unchanged.
fn drop_cap(text: &str) -> String {
    let text = text.trim_start();
    let mut chars = text.chars();
    let Some(first) = chars.next().filter(|c| c.is_alphabetic()) else {
        return text.to_string();
    };
    let rest = chars.as_str();
    let word_end = rest
        .find(|c: char| !c.is_alphanumeric())
        .unwrap_or(rest.len());
    let (tail, remainder) = rest.split_at(word_end);
    format!("\\IEEEPARstart{{{first}}}{{{tail}}}{remainder}")
}

fn render_section(doc: &mut String, section: &Section, opening: bool) {
    let _ = writeln!(doc, "\\section{{{}}}", section.heading);
    for (idx, block) in section.blocks.iter().enumerate() {
        match block {
            Block::Text(text) if opening && idx == 0 => {
                let _ = writeln!(doc, "{}\n", drop_cap(text));
            }
            Block::Text(text) => {
                let _ = writeln!(doc, "{}\n", text.trim());
            }
            Block::Figure(figure) => {
                let _ = writeln!(doc, "{}\n", render_figure(figure));
            }
        }
    }
}

fn render_figure(figure: &Figure) -> String {
    match figure {
        Figure::Single {
            file,
            caption,
            label,
            width,
            placement,
            wide,
        } => {
            let env = if *wide { "figure*" } else { "figure" };
            let mut out = format!(
                "\\begin{{{env}}}[{placement}]\n\\centering\n\\includegraphics[width={width}]{{{file}}}\n\\caption{{{}}}\n",
                latex_text(caption)
            );
            if let Some(label) = label {
                let _ = writeln!(out, "\\label{{{label}}}");
            }
            let _ = write!(out, "\\end{{{env}}}");
            out
        }
        Figure::Pair {
            left,
            right,
            placement,
        } => {
            let minipage = |file: &str, caption: &str| {
                format!(
                    "\\begin{{minipage}}{{0.48\\columnwidth}}\n  \\centering\n  \\includegraphics[width=\\linewidth]{{{file}}}\n  \\caption{{{}}}\n\\end{{minipage}}",
                    latex_text(caption)
                )
            };
            format!(
                "\\begin{{figure}}[{placement}]\n\\centering\n{}\\hfill\n{}\n\\end{{figure}}",
                minipage(left.file, left.caption),
                minipage(right.file, right.caption)
            )
        }
        Figure::Joint {
            files: [left, right],
            caption,
            placement,
        } => format!(
            "\\begin{{figure}}[{placement}]\n\\centering\n\\includegraphics[width=0.48\\columnwidth]{{{left}}}\\hfill\n\\includegraphics[width=0.48\\columnwidth]{{{right}}}\n\\caption{{{}}}\n\\end{{figure}}",
            latex_text(caption)
        ),
    }
}

/// `thebibliography` with keys `b1`, `b2`, ... matching the `[n]` citations in the text.
fn bibliography(references: &[Reference]) -> String {
    let mut out = String::from("\\begin{thebibliography}{00}\n");
    for (idx, Reference(entry)) in references.iter().enumerate() {
        let _ = writeln!(out, "\\bibitem{{b{}}} {}", idx + 1, entry);
    }
    out.push_str("\\end{thebibliography}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{
        IeeeHeader, drop_cap, render_blind, render_figure, render_ieee, render_title_page,
    };
    use crate::content::{illustrated, journal, submission};
    use crate::models::manuscript::{Block, Figure, Manuscript};
    use crate::models::metadata::PaperMetadata;

    /// Assert every needle occurs exactly once in `haystack`, in the given order.
    fn assert_once_in_order(haystack: &str, needles: &[String]) {
        let mut cursor = 0;
        for needle in needles {
            assert_eq!(
                haystack.matches(needle.as_str()).count(),
                1,
                "expected exactly one {needle:?}"
            );
            let pos = haystack.find(needle.as_str()).unwrap();
            assert!(pos >= cursor, "{needle:?} is out of order");
            cursor = pos + needle.len();
        }
    }

    /// Headings and prose blocks in reading order; the opening block is
    /// checked from its second word on, since the drop cap rewrites the first.
    fn body_fields(manuscript: &Manuscript) -> Vec<String> {
        let mut fields = vec![manuscript.abstract_text.clone()];
        for (section_idx, section) in manuscript.sections.iter().enumerate() {
            fields.push(format!("\\section{{{}}}", section.heading));
            for (block_idx, block) in section.blocks.iter().enumerate() {
                if let Block::Text(text) = block {
                    let text = text.trim();
                    if section_idx == 0 && block_idx == 0 {
                        let (_, rest) = text.split_once(' ').unwrap();
                        fields.push(rest.to_string());
                    } else {
                        fields.push(text.to_string());
                    }
                }
            }
        }
        fields
    }

    #[test]
    fn drop_cap_splits_first_word() {
        assert_eq!(drop_cap("We live here"), "\\IEEEPARstart{W}{e} live here");
        assert_eq!(drop_cap("A test"), "\\IEEEPARstart{A}{} test");
        assert_eq!(drop_cap("42 units"), "42 units");
    }

    #[test]
    fn journal_contains_every_field_once_in_order() {
        let meta = PaperMetadata::default();
        let manuscript = journal::manuscript();
        let tex = render_ieee(&meta, &manuscript, IeeeHeader::Journal).unwrap();

        assert!(tex.starts_with("\\documentclass[journal]{IEEEtran}"));
        assert!(tex.contains("\\thanks{Manuscript received December 31, 2025.}"));
        assert!(tex.contains(
            "\\thanks{Department of Unorthodox Engineering, Future Institute (email: utah@utahcreates.com).}"
        ));
        assert!(tex.contains("\\markboth{Leonardo, Vol. 58, No. 3, 2025}"));
        assert!(tex.contains("\\IEEEPARstart{W}{e} live in an era"));
        assert!(!tex.contains("We live"));
        assert!(tex.contains("\\section{Observations and Discussion}"));
        assert!(tex.contains("\\begin{IEEEkeywords}"));

        assert_once_in_order(&tex, &body_fields(&manuscript));
        let bib: Vec<String> = (1..=manuscript.references.len())
            .map(|n| format!("\\bibitem{{b{n}}}"))
            .collect();
        assert_once_in_order(&tex, &bib);
        assert!(tex.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn journal_sanitizes_metadata() {
        let meta = PaperMetadata {
            title: "Bits & Atoms: 100% “Tangible”".into(),
            ..PaperMetadata::default()
        };
        let tex = render_ieee(&meta, &journal::manuscript(), IeeeHeader::Journal).unwrap();
        assert!(tex.contains("\\title{Bits and Atoms: 100\\% \"Tangible\"}"));
    }

    // An address or title with TeX specials must come out escaped in every layout.
    #[test]
    fn metadata_special_characters_are_escaped() {
        let meta = PaperMetadata::default()
            .with_overrides(r#"{"email":"first_last@example.org","title":"C# Artifacts_v2"}"#)
            .unwrap();
        meta.validate().unwrap();

        let journal =
            render_ieee(&meta, &journal::manuscript(), IeeeHeader::Journal).unwrap();
        let blind = render_blind(&meta, &submission::blind_manuscript());
        let title_page = render_title_page(&meta, submission::ABSTRACT);

        for tex in [&journal, &blind, &title_page] {
            assert!(!tex.contains("first_last@"));
            assert!(!tex.contains("C# Artifacts_v2"));
        }
        assert!(journal.contains("\\title{C\\# Artifacts\\_v2}"));
        assert!(journal.contains("(email: first\\_last@example.org)"));
        assert!(journal.contains("{Utah Hans: C\\# Artifacts\\_v2}"));
        assert!(blind.contains("\\textbf{\\Large C\\# Artifacts\\_v2}"));
        assert!(title_page.contains("\\texttt{first\\_last@example.org}"));
    }

    #[test]
    fn illustrated_places_figures_after_their_text() {
        let manuscript = illustrated::manuscript();
        let tex = render_ieee(&PaperMetadata::default(), &manuscript, IeeeHeader::Journal).unwrap();

        assert_once_in_order(
            &tex,
            &[
                "\\begin{figure*}[t]".to_string(),
                "{fig1_collection.jpg}".to_string(),
                "\\section{Methodology: The Artifacts}".to_string(),
                "{fig2a_qpid.jpg}".to_string(),
                "{fig2b_isochron.jpg}".to_string(),
                "\\subsection{The Aspect Interface".to_string(),
                "{fig3a_aspect.jpg}".to_string(),
                "{fig3b_mnemonic.jpg}".to_string(),
                "\\section{Theoretical Framework}".to_string(),
                "{fig4_diagram.png}".to_string(),
                "\\label{fig:diagram}".to_string(),
            ],
        );
        assert_eq!(tex.matches("\\begin{minipage}").count(), 4);
    }

    #[test]
    fn repository_header_has_affiliation_and_no_footnotes() {
        let manuscript = submission::repository_manuscript();
        let tex = render_ieee(&PaperMetadata::default(), &manuscript, IeeeHeader::Repository)
            .unwrap();

        assert!(tex.contains(
            "\\author{Utah Hans\\\\ \\textit{Department of Unorthodox Engineering, Future Institute}}"
        ));
        assert!(!tex.contains("\\thanks"));
        assert!(!tex.contains("\\markboth"));
        assert!(!tex.contains("IEEEkeywords"));
        assert!(tex.contains("\\caption{Q-PID and Isochron Key.}"));
        assert_once_in_order(&tex, &body_fields(&manuscript));
    }

    #[test]
    fn blind_manuscript_is_anonymous() {
        let meta = PaperMetadata::default();
        let manuscript = submission::blind_manuscript();
        let tex = render_blind(&meta, &manuscript);

        assert!(tex.starts_with("\\documentclass[12pt, letterpaper]{article}"));
        assert!(tex.contains("\\doublespacing"));
        assert!(tex.contains("[Author Details Redacted for Blind Review]"));
        assert!(!tex.contains(&meta.author));
        assert!(!tex.contains(&meta.email));
        assert!(!tex.contains("\\includegraphics"));
        assert!(!tex.contains("IEEEPARstart"));
        assert!(tex.contains("\\noindent As algorithmic complexity"));
        assert!(tex.contains("\\newpage\n\\begin{thebibliography}{00}"));
        assert!(tex.contains("\\textit{Scientific American}"));
    }

    #[test]
    fn title_page_lists_author_details() {
        let meta = PaperMetadata::default();
        let tex = render_title_page(&meta, submission::ABSTRACT);

        assert_once_in_order(
            &tex,
            &[
                format!("\\textbf{{\\Large {}}}", meta.title),
                format!("\\textbf{{{}}} \\\\", meta.author),
                format!("\\textit{{{}}}", meta.affiliation),
                format!("\\texttt{{{}}}", meta.email),
                "\\textbf{Abstract:}".to_string(),
                format!("Corresponding Author: {}", meta.author),
            ],
        );
    }

    #[test]
    fn single_figure_without_label_omits_it() {
        let figure = Figure::Single {
            file: "a.jpg",
            caption: "Caption & more",
            label: None,
            width: "\\columnwidth",
            placement: "h",
            wide: false,
        };
        assert_eq!(
            render_figure(&figure),
            "\\begin{figure}[h]\n\\centering\n\\includegraphics[width=\\columnwidth]{a.jpg}\n\\caption{Caption and more}\n\\end{figure}"
        );
    }
}
