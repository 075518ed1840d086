//! Rendering configuration types.

pub mod options;
