// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Document generation, image staging and compiler handling.

pub mod compiler;
pub mod latex;
pub mod paper;
pub mod readme;
pub mod staging;
