//! Optimized collection types.
//!
//! The hash map alias over AHash, used for the small read-only lookup
//! tables the text pipeline builds once at startup.

pub use ahash::AHashMap as HashMap;
