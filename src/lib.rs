#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use serde_json as _;
// Only the tests iterate over engine names.
use strum as _;

pub mod config;
pub mod graph;
pub mod grid;
pub mod search;

pub use config::SearchConfig;
pub use graph::Graph;

#[cfg(test)]
mod test_utils;
