// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Run report - what was matched, exported and skipped

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// One exported object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectExport {
    /// Object ID inside the input file
    pub id: String,
    /// Destination file that was written
    pub dest: PathBuf,
}

/// Per-input-file outcome
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The input file
    pub input: PathBuf,
    /// IDs selected by the pattern
    pub matched: usize,
    /// Selected IDs not exported (existing destination, not confirmed)
    pub skipped: usize,
    /// Objects written to disk
    pub exported: Vec<ObjectExport>,
}

impl FileReport {
    /// Empty report for one input file
    #[must_use]
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            matched: 0,
            skipped: 0,
            exported: Vec::new(),
        }
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// One entry per input file, in processing order
    pub files: Vec<FileReport>,
}

impl ExportReport {
    /// Empty report stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            files: Vec::new(),
        }
    }

    /// Total number of objects written across all input files
    #[must_use]
    pub fn total_exported(&self) -> usize {
        self.files.iter().map(|f| f.exported.len()).sum()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }
}

impl Default for ExportReport {
    fn default() -> Self {
        Self::new()
    }
}
