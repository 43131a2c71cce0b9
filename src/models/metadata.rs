// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Paper metadata (title, author, contact) with optional JSON overrides.
//! Parsing is kept pure so the README and every LaTeX variant share one source.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use email_address::EmailAddress;
use serde::Deserialize;
use time::Date;
use time::macros::{date, format_description};

use crate::content::collection;

/// Bibliographic details printed on every variant of the paper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperMetadata {
    pub title: String,
    pub author: String,
    pub affiliation: String,
    pub email: String,
    /// Date printed in the "Manuscript received" footnote.
    pub received: Date,
    /// Running journal line used in the IEEE page header.
    pub journal: String,
}

impl Default for PaperMetadata {
    fn default() -> Self {
        Self {
            title: collection::PAPER_TITLE.to_string(),
            author: collection::PAPER_AUTHOR.to_string(),
            affiliation: collection::PAPER_AFFILIATION.to_string(),
            email: collection::PAPER_EMAIL.to_string(),
            received: date!(2025 - 12 - 31),
            journal: collection::JOURNAL_LINE.to_string(),
        }
    }
}

/// Keys accepted in a metadata override file. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetadataOverrides {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    affiliation: Option<String>,
    #[serde(default)]
    email: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    received: Option<String>,
    #[serde(default)]
    journal: Option<String>,
}

impl PaperMetadata {
    /// Load the defaults, apply the override file when given, and validate the result.
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        let metadata = match overrides {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read metadata file {:?}", path))?;
                Self::default()
                    .with_overrides(&json)
                    .with_context(|| format!("Invalid metadata file {:?}", path))?
            }
            None => Self::default(),
        };
        metadata.validate()?;
        Ok(metadata)
    }

    /// Apply overrides from a JSON object; absent or blank keys keep the current value.
    pub fn with_overrides(mut self, json: &str) -> Result<Self> {
        let raw: MetadataOverrides =
            serde_json::from_str(json).context("Failed to parse metadata JSON")?;

        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(title) = non_blank(raw.title) {
            self.title = title;
        }
        if let Some(author) = non_blank(raw.author) {
            self.author = author;
        }
        if let Some(affiliation) = non_blank(raw.affiliation) {
            self.affiliation = affiliation;
        }
        if let Some(email) = non_blank(raw.email) {
            self.email = email.trim().to_string();
        }
        if let Some(received) = non_blank(raw.received) {
            self.received = Date::parse(received.trim(), format_description!("[year]-[month]-[day]"))
                .map_err(|err| anyhow!("Invalid received date {:?}: {}", received, err))?;
        }
        if let Some(journal) = non_blank(raw.journal) {
            self.journal = journal;
        }
        Ok(self)
    }

    /// Reject metadata that would produce a broken title block.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("Paper title must not be empty");
        }
        if self.author.trim().is_empty() {
            bail!("Paper author must not be empty");
        }
        if EmailAddress::parse_with_options(&self.email, Default::default()).is_err() {
            bail!("Invalid author email address: {:?}", self.email);
        }
        Ok(())
    }

    /// Received date in long form, e.g. `December 31, 2025`.
    pub fn received_long(&self) -> Result<String> {
        self.received
            .format(format_description!(
                "[month repr:long] [day padding:none], [year]"
            ))
            .map_err(|err| anyhow!("Failed to format received date: {}", err))
    }

    /// Year of the received date, used in citations.
    pub fn year(&self) -> i32 {
        self.received.year()
    }
}
