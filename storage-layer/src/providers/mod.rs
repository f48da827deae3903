//! Bundled provider backends

pub mod memory;
