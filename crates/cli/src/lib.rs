#![warn(clippy::pedantic)]

pub mod log;

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use ::log::{LevelFilter, info};
use anyhow::Context;
use clap::Parser;
use vbcoach_domain::Session;
use vbcoach_export::{Export, ExportSettings, export_session_with};

#[derive(Parser, Debug)]
#[command(
    name = "vbcoach-export",
    version,
    about = "Export a training session for GPS watches",
    long_about = "Exports a training session as TCX, Garmin Connect JSON, plain text or Markdown."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Session document (JSON), `-` reads from stdin
    pub session: PathBuf,

    /// Export format: tcx, json, garmin, txt, text, md or markdown
    #[arg(long, short, default_value = "tcx")]
    pub format: String,

    /// Athlete display name
    #[arg(long, short, default_value = "")]
    pub athlete: String,

    /// Export settings (JSON)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Directory the export is written to
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Write the export to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,

    /// Log one JSON object per line
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    #[must_use]
    pub fn log_style(&self) -> log::Style {
        if self.log_json {
            log::Style::Json
        } else {
            log::Style::Plain
        }
    }
}

/// # Errors
///
/// Returns an error if the session or the settings cannot be read, the format is not supported
/// or the export cannot be written.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_deref())?;
    let session = if args.session == Path::new("-") {
        read_session(io::stdin().lock()).context("failed to read session from stdin")?
    } else {
        let file = fs::File::open(&args.session)
            .with_context(|| format!("failed to open {}", args.session.display()))?;
        read_session(file)
            .with_context(|| format!("failed to read session from {}", args.session.display()))?
    };

    let export = export_session_with(&session, &args.athlete, &args.format, &settings)?;

    if args.stdout {
        write_export(&export, io::stdout().lock())?;
    } else {
        let path = args.output.join(&export.filename);
        fs::write(&path, &export.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {} ({})", path.display(), export.content_type);
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the input is not a valid session document.
pub fn read_session(reader: impl Read) -> anyhow::Result<Session> {
    Ok(serde_json::from_reader(reader)?)
}

/// # Errors
///
/// Returns an error if the settings file cannot be read or is invalid.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<ExportSettings> {
    let Some(path) = path else {
        return Ok(ExportSettings::default());
    };
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    ExportSettings::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn write_export(export: &Export, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(export.content.as_bytes())?;
    writer.flush()
}
