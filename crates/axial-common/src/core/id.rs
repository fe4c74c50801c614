// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque node identifier (64 bits).
///
/// Identifiers are assigned by the graph that owns the nodes and are stable
/// for the lifetime of a computation. The engine never interprets the bits;
/// it only requires total ordering and hashability.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: u64 = s
            .parse()
            .map_err(|e| anyhow!("Invalid NodeId '{}': {}", s, e))?;
        Ok(Self(raw))
    }
}
