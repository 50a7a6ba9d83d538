//! # Formats Module
//!
//! Byte-level formats understood by the core. The app layer does the I/O.

mod wire;

pub use wire::*;
