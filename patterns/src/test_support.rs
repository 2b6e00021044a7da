//! Test-only helpers for building chains, collections, and scratch directories.

use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::chain::ChainNode;
use crate::core::collection::Collection;
use crate::demo::support_chain;

/// Operator → manager → director chain with the default request labels.
pub fn support_desk() -> ChainNode {
    support_chain()
}

/// `["Item 1", "Item 2", "Item 3"]`.
pub fn sample_collection() -> Collection {
    Collection::new(["Item 1", "Item 2", "Item 3"])
}

/// Temporary working directory for driving the binary.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
