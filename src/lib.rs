//! Library crate root re-exporting the demo, check, and shared modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod check;
pub mod cli;
pub mod config;
pub mod demo;
pub mod tools;
