// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Structured paper content: sections, figure blocks and references.

use crate::utils::latex_text;

/// Content placed inside a section, in reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Sanitized LaTeX prose.
    Text(String),
    Figure(Figure),
}

/// A `\section` and its blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: Vec<Block>,
}

impl Section {
    /// Section opening with `body`, passed through [`latex_text`].
    pub fn new(heading: &'static str, body: &str) -> Self {
        Self {
            heading,
            blocks: vec![Block::Text(latex_text(body))],
        }
    }

    /// Append a figure block.
    pub fn with_figure(mut self, figure: Figure) -> Self {
        self.blocks.push(Block::Figure(figure));
        self
    }

    /// Append another prose block.
    pub fn with_text(mut self, body: &str) -> Self {
        self.blocks.push(Block::Text(latex_text(body)));
        self
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Figure(figure) => Some(figure),
            Block::Text(_) => None,
        })
    }
}

/// One image with its own caption inside a side-by-side pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub file: &'static str,
    pub caption: &'static str,
}

/// Figure environments used by the paper layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Figure {
    /// One image. `wide` selects `figure*` spanning both columns.
    Single {
        file: &'static str,
        caption: &'static str,
        label: Option<&'static str>,
        width: &'static str,
        placement: &'static str,
        wide: bool,
    },
    /// Two minipages, each with its own caption.
    Pair {
        left: Panel,
        right: Panel,
        placement: &'static str,
    },
    /// Two images side by side under one caption.
    Joint {
        files: [&'static str; 2],
        caption: &'static str,
        placement: &'static str,
    },
}

impl Figure {
    /// Staged filenames referenced by the block, in order.
    pub fn files(&self) -> Vec<&'static str> {
        match self {
            Figure::Single { file, .. } => vec![*file],
            Figure::Pair { left, right, .. } => vec![left.file, right.file],
            Figure::Joint { files, .. } => files.to_vec(),
        }
    }
}

/// A `\bibitem` body, without the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference(pub &'static str);

/// Everything below the title block of a paper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manuscript {
    /// Sanitized abstract.
    pub abstract_text: String,
    /// Comma-separated IEEE keywords, when the layout prints them.
    pub keywords: Option<&'static str>,
    pub sections: Vec<Section>,
    pub references: Vec<Reference>,
}

impl Manuscript {
    /// Every staged figure file the manuscript includes.
    pub fn figure_files(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .flat_map(Section::figures)
            .flat_map(Figure::files)
            .collect()
    }

    /// Same text without figures, for layouts that print none.
    pub fn without_figures(mut self) -> Self {
        for section in &mut self.sections {
            section
                .blocks
                .retain(|block| matches!(block, Block::Text(_)));
        }
        self
    }
}
