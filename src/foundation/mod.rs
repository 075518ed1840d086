//! Shared building blocks: the error taxonomy and decimal digit helpers.

pub mod digits;
pub mod error;
