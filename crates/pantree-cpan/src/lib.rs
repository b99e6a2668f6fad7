//! CPAN metadata access: the module-to-distribution map, the core module
//! list, and per-distribution `META.json` requirement files, all read from
//! a local metadata directory.

pub mod meta;
pub mod repository;
