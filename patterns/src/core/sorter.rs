//! Interchangeable sorting strategies.
//!
//! A [`SortingStrategy`] never mutates its input; it returns a freshly ordered
//! copy. [`Sorter`] is the context object that holds whichever strategy the
//! caller selected and forwards to it.

use serde::{Deserialize, Serialize};

/// A sorting algorithm over plain integers.
pub trait SortingStrategy {
    /// Return a new sequence holding the same values in non-decreasing order.
    fn sort(&self, input: &[i64]) -> Vec<i64>;

    /// Stable label used when reporting which strategy ran.
    fn name(&self) -> &'static str;
}

/// Classic exchange sort: `n` passes, each bubbling the largest remaining
/// value to the end of the unsorted prefix.
///
/// There is no early exit when a pass performs no swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl SortingStrategy for BubbleSort {
    fn sort(&self, input: &[i64]) -> Vec<i64> {
        let mut values = input.to_vec();
        let len = values.len();
        for pass in 0..len {
            for j in 0..len - pass - 1 {
                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                }
            }
        }
        values
    }

    fn name(&self) -> &'static str {
        "bubble"
    }
}

/// Strategy context: sorts with the currently selected strategy.
pub struct Sorter {
    strategy: Box<dyn SortingStrategy>,
}

impl Sorter {
    pub fn new(strategy: Box<dyn SortingStrategy>) -> Self {
        Self { strategy }
    }

    /// Swap the algorithm used by subsequent [`Sorter::sort`] calls.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortingStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn sort(&self, input: &[i64]) -> Vec<i64> {
        self.strategy.sort(input)
    }

    /// Sort `input` and capture both sides for reporting.
    pub fn report(&self, input: &[i64]) -> SortReport {
        SortReport {
            strategy: self.strategy_name().to_string(),
            input: input.to_vec(),
            sorted: self.sort(input),
        }
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new(Box::new(BubbleSort))
    }
}

/// Before/after snapshot of one sort run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    pub strategy: String,
    pub input: Vec<i64>,
    pub sorted: Vec<i64>,
}
