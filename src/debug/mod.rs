// src/debug/mod.rs

//! The `debug` module is message macros for all builds and helper
//! functions for test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
