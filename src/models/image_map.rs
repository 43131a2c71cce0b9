// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Image staging plan: which delivered photo lands under which safe filename.

use std::collections::HashSet;

use anyhow::{Result, anyhow, bail};

use crate::content::collection;
use crate::utils::sanitize_component;
use crate::utils::sanitize_component::is_safe_component;

/// One source image and the filename it is staged to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMapping {
    /// Filename inside the images directory (may contain spaces and parentheses).
    pub source: String,
    /// Filename in the working directory referenced by the LaTeX sources.
    pub staged: String,
}

impl ImageMapping {
    pub fn new(source: impl Into<String>, staged: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            staged: staged.into(),
        }
    }
}

/// Validated, ordered list of mappings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagingPlan {
    mappings: Vec<ImageMapping>,
}

impl StagingPlan {
    /// Build a plan, rejecting unsafe or duplicate staged names.
    pub fn new(mappings: Vec<ImageMapping>) -> Result<Self> {
        for mapping in &mappings {
            if !is_safe_component(&mapping.staged) {
                bail!(
                    "Staged filename {:?} for {:?} is not LaTeX-safe (expected {:?})",
                    mapping.staged,
                    mapping.source,
                    sanitize_component(&mapping.staged)
                );
            }
        }
        assert_unique_staged_names(&mappings)?;
        Ok(Self { mappings })
    }

    /// The plan for the collection: group photo, the four artifact photos, then the diagram.
    pub fn collection() -> Result<Self> {
        let mut mappings = vec![ImageMapping::new(
            collection::COLLECTION_PHOTO,
            collection::COLLECTION_FIGURE,
        )];
        mappings.extend(
            collection::ARTIFACTS
                .iter()
                .map(|artifact| ImageMapping::new(artifact.photo, artifact.figure)),
        );
        mappings.push(ImageMapping::new(
            collection::DIAGRAM_FIGURE,
            collection::DIAGRAM_FIGURE,
        ));
        Self::new(mappings)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }
}

/// Ensure no two mappings write to the same staged filename.
pub fn assert_unique_staged_names(mappings: &[ImageMapping]) -> Result<()> {
    let mut seen = HashSet::new();
    for mapping in mappings {
        if !seen.insert(mapping.staged.clone()) {
            return Err(anyhow!(
                "Duplicate staged image filename: {}",
                mapping.staged
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ImageMapping, StagingPlan};

    #[test]
    fn collection_plan_is_valid_and_ordered() {
        let plan = StagingPlan::collection().unwrap();
        let staged: Vec<_> = plan.iter().map(|m| m.staged.as_str()).collect();
        assert_eq!(
            staged,
            vec![
                "fig1_collection.jpg",
                "fig2a_qpid.jpg",
                "fig2b_isochron.jpg",
                "fig3a_aspect.jpg",
                "fig3b_mnemonic.jpg",
                "fig4_diagram.png",
            ]
        );
        assert_eq!(
            plan.iter().next().unwrap().source,
            "THE FULL COLLECTOR'S SET.jpg"
        );
    }

    #[test]
    fn plan_rejects_duplicate_staged_names() {
        let result = StagingPlan::new(vec![
            ImageMapping::new("a.jpg", "fig.jpg"),
            ImageMapping::new("b.jpg", "fig.jpg"),
        ]);
        assert!(result.is_err(), "duplicate staged names should be rejected");
    }

    #[test]
    fn plan_rejects_unsafe_staged_names() {
        let result = StagingPlan::new(vec![ImageMapping::new("a.jpg", "my fig.jpg")]);
        assert!(result.is_err());
    }
}
