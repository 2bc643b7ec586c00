// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Command line surface and resolved run configuration

use clap::{Parser, ValueEnum};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default selection pattern: matches most object IDs that Inkscape
/// generates automatically (`rect3381`, `path10`, `g12`, ...). When the
/// pattern is left at this default, exclude mode is switched on so that
/// only hand-named objects are exported.
pub const DEFAULT_PATTERN: &str = r"^(rect|layer|path|use|g\d|svg|text|tspan)\d";

/// Platform default for the Inkscape command line executable
#[must_use]
pub fn default_inkscape_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Progra~1\Inkscape\inkscape.com")
    } else {
        PathBuf::from("inkscape")
    }
}

fn parse_pattern(s: &str) -> Result<Regex, regex::Error> {
    Regex::new(s)
}

/// Exports objects from SVG files, based on their ID, to various formats
/// (PNG, SVG, PS, EPS, PDF).
///
/// By default all objects whose ID was not generated automatically by
/// Inkscape are exported. If a custom --pattern is provided, it selects
/// which objects are *included* unless --exclude is also given.
#[derive(Debug, Parser)]
#[command(name = "svgex")]
#[command(author, version, about)]
pub struct Cli {
    /// SVG file(s) to export objects from, wildcards expanded by the shell
    #[arg(value_name = "INFILE", required_unless_present = "completions")]
    pub infiles: Vec<PathBuf>,

    /// Pattern (regular expression) identifying which object IDs to export
    /// or to exclude from export (depending on --exclude). The default
    /// pattern matches most IDs generated automatically by Inkscape (in
    /// exclude mode).
    #[arg(short, long, default_value = DEFAULT_PATTERN, value_parser = parse_pattern)]
    pub pattern: Regex,

    /// Use the pattern to determine which objects to exclude from export,
    /// rather than include
    #[arg(short, long)]
    pub exclude: bool,

    /// Directory where images are exported to
    #[arg(short, long, default_value = "./", value_name = "DIR")]
    pub destdir: PathBuf,

    /// Do not print status output. Silent mode does not overwrite existing
    /// files; combine with --force if needed.
    #[arg(short, long)]
    pub silent: bool,

    /// Do not prevent existing files from being overwritten
    #[arg(short, long)]
    pub force: bool,

    /// Path to the Inkscape command line executable
    #[arg(
        short,
        long,
        env = "SVGEX_INKSCAPE",
        default_value_os_t = default_inkscape_path(),
        value_name = "PATH"
    )]
    pub inkscape: PathBuf,

    /// Export type (and file suffix)
    #[arg(short = 't', long = "type", value_enum, default_value_t = ExportType::Png)]
    pub export_type: ExportType,

    /// Extra options passed through to the Inkscape export invocation,
    /// split on whitespace. See Inkscape --help for more.
    #[arg(short = 'x', long, value_name = "OPTS")]
    pub extra: Option<String>,

    /// Increase diagnostic verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportType {
    /// Raster PNG
    Png,
    /// PostScript
    Ps,
    /// Encapsulated PostScript
    Eps,
    /// Portable Document Format
    Pdf,
    /// SVG stripped of Inkscape-specific markup
    PlainSvg,
}

impl ExportType {
    /// The Inkscape export flag for this type
    #[must_use]
    pub fn export_flag(&self) -> &'static str {
        match self {
            Self::Png => "--export-png",
            Self::Ps => "--export-ps",
            Self::Eps => "--export-eps",
            Self::Pdf => "--export-pdf",
            Self::PlainSvg => "--export-plain-svg",
        }
    }

    /// File suffix appended to the object ID, leading dot included
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Ps => ".ps",
            Self::Eps => ".eps",
            Self::Pdf => ".pdf",
            Self::PlainSvg => ".plain-svg.svg",
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Ps => "ps",
            Self::Eps => "eps",
            Self::Pdf => "pdf",
            Self::PlainSvg => "plain-svg",
        };
        f.write_str(name)
    }
}

/// Destination file for one exported object: a pure function of the
/// destination directory, the object ID and the export type.
#[must_use]
pub fn dest_path(destdir: &Path, id: &str, export_type: ExportType) -> PathBuf {
    destdir.join(format!("{id}{}", export_type.extension()))
}

/// Resolved run configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Input files, processed in the order given
    pub infiles: Vec<PathBuf>,
    /// Compiled selection pattern
    pub pattern: Regex,
    /// Whether the pattern excludes rather than includes
    pub exclude: bool,
    /// Output directory, created at startup if absent
    pub destdir: PathBuf,
    /// Suppress status output and default overwriting
    pub silent: bool,
    /// Always overwrite existing destination files
    pub force: bool,
    /// Inkscape executable
    pub inkscape: PathBuf,
    /// Output format
    pub export_type: ExportType,
    /// Extra arguments forwarded to every export invocation
    pub extra: Vec<String>,
    /// Emit the run report as JSON
    pub json: bool,
}

impl Config {
    /// Resolve CLI arguments into the run configuration.
    ///
    /// Exclude mode is switched on automatically when the pattern was left
    /// at its built-in default; a custom pattern leaves the mode exactly as
    /// given on the command line.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        let exclude = cli.exclude || cli.pattern.as_str() == DEFAULT_PATTERN;
        let extra = cli
            .extra
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();

        Self {
            infiles: cli.infiles,
            pattern: cli.pattern,
            exclude,
            destdir: cli.destdir,
            silent: cli.silent,
            force: cli.force,
            inkscape: cli.inkscape,
            export_type: cli.export_type,
            extra,
            json: cli.json,
        }
    }

    /// Whether an object with this ID is selected for export.
    ///
    /// Matching is an unanchored substring search; include mode keeps
    /// matching IDs, exclude mode keeps the non-matching ones.
    #[must_use]
    pub fn selects(&self, id: &str) -> bool {
        self.pattern.is_match(id) != self.exclude
    }
}
