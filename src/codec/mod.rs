//! Base codec: integers and text to and from digit strings in bases 1-64.
//!
//! The digit alphabet is `0-9`, `A-Z`, `a-z`, `+`, `/` (values 0-63). Base 1
//! is unary. Every function takes the base as a plain radix and rejects
//! anything outside 1..=64 with [`CodecError::InvalidBase`]; use [`Base`] to
//! parse a base from user input (`"16"` or `"hexadecimal"`).
//!
//! All functions are pure and never swallow errors.

pub mod alphabet;
pub mod base;
pub mod error;
pub mod number;
pub mod text;

pub use alphabet::ALPHABET;
pub use base::Base;
pub use error::CodecError;
pub use number::{MAX_UNARY_LEN, convert, decode, encode};
pub use text::{
    base_groups_to_text, decode_groups, group_width, join_groups, split_groups,
    text_to_base_groups,
};
