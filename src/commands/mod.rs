//! Command implementations for pyboot CLI

pub mod completions;
pub mod ensure;
pub mod version;
