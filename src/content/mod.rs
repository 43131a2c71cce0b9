// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fixed copy for the collection: artifact descriptions, README prose and the paper editions.

pub mod collection;
pub mod illustrated;
pub mod journal;
pub mod readme;
pub mod submission;
