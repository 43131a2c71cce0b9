// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the generators and the build steps.

pub mod hash;
pub mod latex_text;
pub mod paths;
pub mod sanitize_component;

/// Compute the SHA-256 hash of a file.
pub use hash::hash_file;
/// Normalize prose for inclusion in LaTeX sources.
pub use latex_text::{latex_literal, latex_text};
/// Swap or add a file extension.
pub use paths::ensure_extension;
/// Sanitize user-provided strings into filesystem-safe path components.
pub use sanitize_component::sanitize_component;
