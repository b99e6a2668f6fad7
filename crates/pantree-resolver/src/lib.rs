//! Dependency tree resolution: recursive expansion of distribution
//! requirements, core module filtering, and a session cache shared across
//! resolution workers.

pub mod cache;
pub mod filter;
pub mod resolver;
