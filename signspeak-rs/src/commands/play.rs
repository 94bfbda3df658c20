//! Single gesture playback

use anyhow::{Context, Result};
use clap::Args;
use isl_avatar::Avatar;

use crate::utils::{ExportArgs, write_export};

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Gesture name (matched case-insensitively, e.g. hello or THANK_YOU)
    pub name: String,

    /// Stretch or compress the gesture to this many seconds
    #[arg(short, long)]
    pub duration: Option<f32>,

    /// Make the A-Z letter gestures playable
    #[arg(short, long)]
    pub alphabet: bool,

    #[command(flatten)]
    pub export: ExportArgs,
}

pub fn execute(args: &PlayArgs) -> Result<()> {
    let avatar = if args.alphabet {
        Avatar::with_alphabet()
    } else {
        Avatar::new()
    };

    let name = args.name.trim().to_uppercase();
    let timeline = avatar
        .play(&name, args.duration)
        .with_context(|| format!("Failed to play gesture {name}"))?;

    log::info!(
        "{}: {} frames over {:.2}s",
        name,
        timeline.len(),
        timeline.duration()
    );

    write_export(&avatar, &timeline, &args.export)
}
