#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

//! Line input and string helpers for `no_std` serial shells.
//!
//! This crate provides an editable line reader with selectable echo,
//! delimiter splitting, a small checksum and the shared shell flags.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod checksum;
pub mod echo;
pub mod flags;
pub mod line_buffer;
pub mod reader;
pub mod tokenizer;
pub mod writer;

#[cfg(test)]
mod mock;

pub use checksum::{djb2, fingerprint, Fingerprint};
pub use echo::{Echo, EchoPolicy, DEFAULT_MASK};
pub use flags::{DeviceInfo, SharedDeviceInfo, SystemFlags};
pub use line_buffer::{Line, LineBuffer, LineStorage};
pub use reader::{LineReader, ReadLineError, ReaderConfig};
pub use tokenizer::{count_newlines, split, split_bounded, split_dynamic, SplitPolicy, Tokens};
pub use writer::TerminalWriter;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::echo::EchoPolicy;
    pub use crate::line_buffer::Line;
    pub use crate::reader::{LineReader, ReadLineError, ReaderConfig};
    pub use crate::tokenizer::{SplitPolicy, Tokens};
    pub use crate::writer::TerminalWriter;
}
