//! # Loaders
//!
//! File-input helpers feeding the processor.
//!
//! Responsibilities:
//! - Decode structured text into values
//! - Load CSV tables into sequences of row mappings
//! - Resolve plan input specs into processable values

pub mod csv;
mod input;
pub mod json;

pub use input::resolve_input;
