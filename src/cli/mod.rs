//! Command line interface: argument parsing, command dispatch, output.

pub mod args;
pub mod commands;
pub mod output;
