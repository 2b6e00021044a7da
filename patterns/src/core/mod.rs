//! Deterministic, pure pattern implementations.
//!
//! Core modules must be free of I/O side effects. They take plain values and
//! return values; rendering and logging belong to the callers.

pub mod chain;
pub mod collection;
pub mod sorter;
