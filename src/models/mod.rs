// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared by the generators and build steps.

pub mod artifact;
pub mod build;
pub mod image_map;
pub mod manuscript;
pub mod metadata;
