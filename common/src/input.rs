//! # Local Input
//!
//! Text formats accepted from files or standard input.
//!
//! * [`lines`]: the tagged / untagged inventory line grammars.
//! * [`tidy`]: turns emoji-tagged free text into untagged lines.

pub mod lines;
pub mod tidy;
