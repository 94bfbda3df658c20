//! Root CLI structure for signspeak-rs

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "signspeak-rs")]
#[command(about = "Command-line tools for ISL gesture animation", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the avatar's joint hierarchy
    Skeleton(crate::commands::skeleton::SkeletonArgs),

    /// List the available gestures
    Gestures(crate::commands::gestures::GesturesArgs),

    /// Play a single gesture and export its frames
    Play(crate::commands::play::PlayArgs),

    /// Translate text into a gesture timeline and export it
    Compose(crate::commands::compose::ComposeArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
