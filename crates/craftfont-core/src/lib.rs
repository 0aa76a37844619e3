//! craftfont Core
//!
//! Shared building blocks for the craftfont crates: logging bootstrap, profiling hooks,
//! integer geometry and a fast hash map.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod profiling;
