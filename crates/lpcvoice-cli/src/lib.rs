//! lpcvoice CLI library.
//!
//! Config loading, command-line overrides and the command implementations
//! behind the `lpcvoice` binary.

pub mod commands;
pub mod input;
