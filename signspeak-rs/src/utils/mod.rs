//! Shared utilities for the signspeak-rs CLI

pub mod output;
pub mod tree;

pub use output::*;
pub use tree::*;
