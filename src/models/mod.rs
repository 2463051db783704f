//! Data models for the conversion history.
//!
//! - [`ConversionRecord`] - One stored entry (`input`, `output`, `type`, `date`)
//! - [`NewRecord`] - An entry before it is date-stamped
//! - [`ConversionKind`] - The conversions the tool performs, rendered as `type` labels
//!
//! Dates use custom serde functions from [`crate::history::deserializers`].

pub mod record;

pub use record::{ConversionKind, ConversionRecord, NewRecord};
