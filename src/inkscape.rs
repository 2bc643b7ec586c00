// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Inkscape command line abstraction
//!
//! All interaction with the external editor goes through [`Inkscape`]:
//! the availability check (`-V`), the per-file ID query (`--query-all`)
//! and the per-object export invocation. Commands are argument lists
//! handed to [`std::process::Command`]; nothing is ever interpreted by a
//! shell. Each invocation is waited on synchronously before the batch
//! continues.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

use crate::config::ExportType;

/// Errors from driving the external editor
#[derive(Debug, Error)]
pub enum ToolError {
    /// The executable could not be located or started
    #[error("could not run Inkscape at `{}`: {source}", path.display())]
    NotFound {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying spawn failure
        #[source]
        source: std::io::Error,
    },

    /// The executable ran but reported failure
    #[error("`{command}` failed with {status}")]
    CommandFailed {
        /// Human-readable rendering of the invocation
        command: String,
        /// Exit status of the child process
        status: ExitStatus,
    },
}

/// Handle on the Inkscape command line executable
#[derive(Debug, Clone)]
pub struct Inkscape {
    exe: PathBuf,
}

impl Inkscape {
    /// Wrap the given executable path
    #[must_use]
    pub fn new(exe: &Path) -> Self {
        Self {
            exe: exe.to_path_buf(),
        }
    }

    /// Check that the executable can be run at all, via its version query.
    ///
    /// A failure here is fatal to the whole batch; the caller reports a
    /// remediation hint and exits with a distinct code before any file is
    /// processed.
    pub fn verify(&self) -> Result<(), ToolError> {
        let output = Command::new(&self.exe).arg("-V").output().map_err(|source| {
            ToolError::NotFound {
                path: self.exe.clone(),
                source,
            }
        })?;

        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                command: format!("{} -V", self.exe.display()),
                status: output.status,
            });
        }

        debug!(
            "inkscape version check: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }

    /// Query all object IDs contained in `file`.
    ///
    /// Inkscape prints one line per object, `<id>,<x>,<y>,<w>,<h>`; only
    /// the ID field is kept.
    pub fn query_all(&self, file: &Path) -> Result<Vec<String>, ToolError> {
        let output = Command::new(&self.exe)
            .arg("--query-all")
            .arg(file)
            .output()
            .map_err(|source| ToolError::NotFound {
                path: self.exe.clone(),
                source,
            })?;

        if !output.status.success() {
            debug!(
                "query-all stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(ToolError::CommandFailed {
                command: format!("{} --query-all {}", self.exe.display(), file.display()),
                status: output.status,
            });
        }

        let ids = parse_query_output(&String::from_utf8_lossy(&output.stdout));
        debug!("{} objects in {}", ids.len(), file.display());
        Ok(ids)
    }

    /// Export one object from `file` to `dest`.
    ///
    /// In silent mode the child's output is captured; otherwise it is
    /// inherited so Inkscape's own progress is visible. A non-zero exit
    /// status propagates as an error and aborts the remaining batch.
    pub fn export(
        &self,
        file: &Path,
        id: &str,
        export_type: ExportType,
        dest: &Path,
        extra: &[String],
        silent: bool,
    ) -> Result<(), ToolError> {
        let args = export_args(id, export_type, dest, extra, file);
        debug!("running: {}", display_command(&self.exe, &args));

        let mut cmd = Command::new(&self.exe);
        cmd.args(&args);

        let status = if silent {
            let output = cmd.output().map_err(|source| ToolError::NotFound {
                path: self.exe.clone(),
                source,
            })?;
            if !output.status.success() {
                debug!(
                    "export stderr: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            output.status
        } else {
            cmd.status().map_err(|source| ToolError::NotFound {
                path: self.exe.clone(),
                source,
            })?
        };

        if !status.success() {
            return Err(ToolError::CommandFailed {
                command: display_command(&self.exe, &args),
                status,
            });
        }
        Ok(())
    }
}

/// Build the argument list for one export invocation:
/// `-i <id> --export-<type> <dest> <extra...> <file>`
#[must_use]
pub fn export_args(
    id: &str,
    export_type: ExportType,
    dest: &Path,
    extra: &[String],
    file: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-i".into(),
        id.into(),
        export_type.export_flag().into(),
        dest.as_os_str().to_os_string(),
    ];
    args.extend(extra.iter().map(OsString::from));
    args.push(file.as_os_str().to_os_string());
    args
}

/// Extract object IDs from `--query-all` output: the first comma-separated
/// field of each non-empty line.
#[must_use]
pub fn parse_query_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn display_command(exe: &Path, args: &[OsString]) -> String {
    let mut out = exe.display().to_string();
    for arg in args {
        out.push(' ');
        out.push_str(&arg.to_string_lossy());
    }
    out
}
