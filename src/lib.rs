//! Base Converter - convert numbers and text between bases 1 through 64
//!
//! The crate is split into a pure codec and the pieces around it:
//!
//! - [`codec`]: integer and text conversion over the alphabet `0-9A-Za-z+/`
//! - [`history`]: a persistent JSON log of conversions with search and stats
//! - [`menu`]: the line-oriented interactive menu
//! - [`tui`]: a full-screen history browser
//! - [`cli`]: the command-line entry point
//!
//! # Example
//!
//! ```
//! use base_converter::{convert, text_to_base_groups};
//!
//! assert_eq!(convert("FF", 16, 2)?, "11111111");
//! assert_eq!(text_to_base_groups("Hi", 16)?, vec!["48", "69"]);
//! # Ok::<(), base_converter::CodecError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod codec;
pub mod history;
pub mod menu;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use codec::{
    Base, CodecError, base_groups_to_text, convert, decode, encode, text_to_base_groups,
};
pub use history::{HistoryError, HistoryStore};
pub use models::{ConversionKind, ConversionRecord, NewRecord};
pub use utils::paths::format_path_with_tilde;
