// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Batch export orchestration
//!
//! Walks the input files in the order given, queries each file's object
//! IDs, filters them through the selection pattern and drives one export
//! invocation per kept ID, applying the overwrite policy in between.
//! Strictly sequential; each external invocation completes before the
//! next one starts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::{dest_path, Config};
use crate::inkscape::Inkscape;
use crate::report::{ExportReport, FileReport, ObjectExport};

/// What to do with one destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Write the file, clobbering anything there
    Export,
    /// Leave the existing file alone
    Skip,
    /// Ask the user
    Ask,
}

/// Overwrite policy. Force always exports; a missing destination always
/// exports; silent mode never overwrites an existing file; otherwise the
/// user decides.
#[must_use]
pub fn overwrite_decision(force: bool, silent: bool, dest_exists: bool) -> Overwrite {
    if force || !dest_exists {
        Overwrite::Export
    } else if silent {
        Overwrite::Skip
    } else {
        Overwrite::Ask
    }
}

/// Run the batch export described by `config`
pub fn run(config: &Config) -> Result<ExportReport> {
    let inkscape = Inkscape::new(&config.inkscape);
    let mut report = ExportReport::new();

    for infile in &config.infiles {
        if !config.silent {
            println!("exporting from {}", infile.display());
        }

        let ids = inkscape
            .query_all(infile)
            .with_context(|| format!("Failed to query objects in {}", infile.display()))?;

        let mut file_report = FileReport::new(infile.clone());

        for id in ids {
            if !config.selects(&id) {
                continue;
            }
            file_report.matched += 1;

            let dest = dest_path(&config.destdir, &id, config.export_type);

            let decision = overwrite_decision(config.force, config.silent, dest.exists());
            let export = match decision {
                Overwrite::Export => true,
                Overwrite::Skip => {
                    debug!("skipping existing {}", dest.display());
                    false
                }
                Overwrite::Ask => confirm(&format!(
                    "File {} already exists, do you want to overwrite it?",
                    dest.display()
                ))?,
            };

            if !export {
                file_report.skipped += 1;
                continue;
            }

            inkscape
                .export(infile, &id, config.export_type, &dest, &config.extra, config.silent)
                .with_context(|| {
                    format!("Failed to export `{}` from {}", id, infile.display())
                })?;

            if !config.silent {
                println!("  {} to {}", id, dest.display());
            }
            file_report.exported.push(ObjectExport { id, dest });
        }

        report.files.push(file_report);
    }

    Ok(report)
}

/// Prompt for a yes/no answer on the controlling terminal. Empty input
/// means no.
fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let answer = confirm_with(&mut stdin.lock(), &mut io::stdout(), prompt)
        .context("Failed to read confirmation from stdin")?;
    Ok(answer)
}

/// Confirmation loop over explicit reader/writer handles.
///
/// Accepted tokens are `y`/`Y` and `n`/`N`; an empty line or end of input
/// yields the default answer (no); anything else re-prompts.
pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    loop {
        write!(output, "{prompt} N/y: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // end of input, take the default
            return Ok(false);
        }

        match line.trim() {
            "" | "n" | "N" => return Ok(false),
            "y" | "Y" => return Ok(true),
            _ => writeln!(output, "please enter y or n.")?,
        }
    }
}
