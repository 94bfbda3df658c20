//! Export format selection and output writing

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use isl_avatar::{Avatar, ExportFormat, Timeline};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Export format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Structured JSON animation record
    Json,
    /// Biovision hierarchy (not supported yet)
    Bvh,
    /// Autodesk FBX (not supported yet)
    Fbx,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Bvh => ExportFormat::Bvh,
            FormatArg::Fbx => ExportFormat::Fbx,
        }
    }
}

/// Output options shared by commands that export frames
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export a timeline and write it where the user asked
pub fn write_export(avatar: &Avatar, timeline: &Timeline, args: &ExportArgs) -> Result<()> {
    let format = ExportFormat::from(args.format);
    if !format.is_supported() {
        bail!("Export format '{}' is not supported yet", format);
    }

    let contents = avatar
        .export_string(timeline, format)
        .with_context(|| format!("Failed to export {} frames as {}", timeline.len(), format))?;

    write_output(&contents, args.output.as_deref())
}

/// Write text to a file, or to stdout when no path is given
pub fn write_output(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", contents.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
