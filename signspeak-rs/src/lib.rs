//! SignSpeak CLI library
//!
//! Command definitions and helpers behind the `signspeak-rs` binary.

pub mod cli;
pub mod commands;
pub mod utils;
