// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//
//! Svgex CLI - batch-export objects from SVG files via Inkscape

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

mod config;
mod export;
mod inkscape;
mod report;

use config::{Cli, Config};
use inkscape::Inkscape;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.silent => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::from_cli(cli);

    // The external editor must be runnable before any file is touched
    let ink = Inkscape::new(&config.inkscape);
    if let Err(err) = ink.verify() {
        eprintln!("{err}");
        eprintln!(
            "Could not find the Inkscape command line executable, set --inkscape accordingly."
        );
        eprintln!(
            "It is usually /usr/bin/inkscape on Linux and C:\\Progra~1\\Inkscape\\inkscape.com on Windows."
        );
        std::process::exit(2);
    }

    std::fs::create_dir_all(&config.destdir).with_context(|| {
        format!(
            "Failed to create destination directory {}",
            config.destdir.display()
        )
    })?;

    let report = export::run(&config)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else if !config.silent {
        println!(
            "exported {} object(s) from {} file(s)",
            report.total_exported(),
            report.files.len()
        );
    }

    Ok(())
}
