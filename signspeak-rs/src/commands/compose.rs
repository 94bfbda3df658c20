//! Text to gesture timeline composition

use anyhow::{Context, Result};
use clap::Args;
use isl_avatar::compose::{DEFAULT_LETTER_PAUSE, DEFAULT_WORD_PAUSE};
use isl_avatar::{Avatar, ComposeOptions};

use crate::utils::{ExportArgs, write_export};

#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Text to translate; several arguments are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Rest pause after each word, in seconds
    #[arg(long, default_value_t = DEFAULT_WORD_PAUSE)]
    pub word_pause: f32,

    /// Rest pause after each fingerspelled letter, in seconds
    #[arg(long, default_value_t = DEFAULT_LETTER_PAUSE)]
    pub letter_pause: f32,

    /// Skip fingerspelling; words outside the catalog are dropped
    #[arg(long)]
    pub no_alphabet: bool,

    #[command(flatten)]
    pub export: ExportArgs,
}

pub fn execute(args: &ComposeArgs) -> Result<()> {
    let options = ComposeOptions::new(args.word_pause, args.letter_pause)
        .context("Invalid --word-pause or --letter-pause")?;

    let avatar = if args.no_alphabet {
        Avatar::new()
    } else {
        Avatar::with_alphabet()
    };

    let text = args.text.join(" ");
    let timeline = avatar.compose_with(&text, &options)?;

    log::info!(
        "Composed {} words into {} frames over {:.2}s",
        text.split_whitespace().count(),
        timeline.len(),
        timeline.duration()
    );

    write_export(&avatar, &timeline, &args.export)
}
