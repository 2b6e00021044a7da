//! Three classic design patterns, kept small enough to read in one sitting.
//!
//! - **[`core`]**: The patterns themselves: a sorting strategy, a chain of
//!   responsibility, and a cursor-based collection. No I/O, fully testable in
//!   isolation.
//! - **[`demo`]**: Wires core components to the fixed sample data and collects
//!   a report. Takes no inputs.
//! - **[`render`]**: Turns the report into text or JSON for the `patterns`
//!   binary.

pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
