//! Shared utilities for pantree.
//!
//! This crate provides the cross-cutting concerns used by all other pantree
//! crates: the unified error type and a JSON file decoding helper that
//! attaches path context to failures.

pub mod errors;
pub mod json;
