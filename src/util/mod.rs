//! Shared low-level utilities.

pub mod varint;
