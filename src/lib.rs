// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//
//! Svgex library - batch SVG object export via the Inkscape CLI
//!
//! This crate provides the pieces behind the `svgex` binary: the resolved
//! run configuration, the external Inkscape command abstraction, the batch
//! orchestrator and the run report. The actual rendering is Inkscape's
//! job; everything here is selection, policy and process plumbing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod export;
pub mod inkscape;
pub mod report;
