//! Orchestration: builds core components from the fixed sample data and
//! runs them.
//!
//! Each `run_*` function returns a serializable report instead of printing,
//! leaving presentation to [`crate::render`]. The demonstration takes no
//! inputs, so every run produces the same report.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::chain::{ChainNode, Outcome, RoleHandler};
use crate::core::collection::Collection;
use crate::core::sorter::{SortReport, Sorter};

/// Integers handed to the sorting strategy.
pub const SORT_INPUT: [i64; 5] = [5, 3, 8, 4, 2];

/// Request label claimed by the operator.
pub const OPERATOR_LABEL: &str = "Simple request";
/// Request label claimed by the manager.
pub const MANAGER_LABEL: &str = "Medium request";
/// Request label claimed by the director.
pub const DIRECTOR_LABEL: &str = "Complex request";

/// Requests sent through the chain, in order. The last one matches no role.
pub const REQUESTS: [&str; 4] = [
    OPERATOR_LABEL,
    MANAGER_LABEL,
    DIRECTOR_LABEL,
    "Unknown request",
];

/// Items stored in the collection, in traversal order.
pub const ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

/// Which demonstrations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sort,
    Chain,
    Iterate,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Sort, Section::Chain, Section::Iterate];
}

/// Combined results of one demonstration run.
///
/// Sections that were not requested are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SortReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<Outcome>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterator: Option<Vec<String>>,
}

/// Wire operator → manager → director with the sample labels.
pub fn support_chain() -> ChainNode {
    let mut operator = ChainNode::new(RoleHandler::operator(OPERATOR_LABEL));
    let manager = ChainNode::new(RoleHandler::manager(MANAGER_LABEL));
    let director = ChainNode::new(RoleHandler::director(DIRECTOR_LABEL));
    operator.set_next(manager).set_next(director);
    operator
}

pub fn run_sort() -> SortReport {
    let sorter = Sorter::default();
    let report = sorter.report(&SORT_INPUT);
    debug!(
        strategy = sorter.strategy_name(),
        len = report.input.len(),
        "sorted input"
    );
    report
}

pub fn run_chain() -> Vec<Outcome> {
    let chain = support_chain();
    debug!(depth = chain.depth(), "chain built");
    REQUESTS
        .iter()
        .map(|request| {
            let outcome = chain.handle(request);
            debug!(request = %request, handled = outcome.is_handled(), "request routed");
            outcome
        })
        .collect()
}

/// Drain a fresh cursor over the sample items.
///
/// Reads with the explicit `has_next`/`try_next` protocol so exhaustion is
/// checked before every read.
pub fn run_iterate() -> Result<Vec<String>> {
    drain(&Collection::new(ITEMS))
}

fn drain(collection: &Collection) -> Result<Vec<String>> {
    let mut cursor = collection.cursor();
    let mut items = Vec::with_capacity(collection.len());
    while cursor.has_next() {
        let item = cursor
            .try_next()
            .with_context(|| format!("read item {}", cursor.position()))?;
        items.push(item.to_string());
    }
    debug!(count = items.len(), "collection drained");
    Ok(items)
}

/// Run the requested sections in their canonical order.
pub fn run(sections: &[Section]) -> Result<DemoReport> {
    let mut report = DemoReport::default();
    for section in Section::ALL {
        if !sections.contains(&section) {
            continue;
        }
        info!(?section, "running demonstration");
        match section {
            Section::Sort => report.strategy = Some(run_sort()),
            Section::Chain => report.chain = Some(run_chain()),
            Section::Iterate => report.iterator = Some(run_iterate()?),
        }
    }
    Ok(report)
}
