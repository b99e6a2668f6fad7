//! Core data types for pantree.
//!
//! This crate defines the in-memory representation of a resolved dependency
//! tree: distribution nodes, their ordered dependency collections, and the
//! forest of requested roots, together with the text renderings of a forest.
//!
//! This crate is intentionally free of async code and file I/O.

pub mod distribution;
pub mod render;
