// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Identity mapping between opaque node identifiers and dense algorithm slots.
//!
//! Graph algorithms require dense integer indices (0..V) for efficient
//! array-based state. Graphs hand out opaque 64-bit `NodeId`s. This module
//! provides bidirectional mapping between the two, preserving insertion
//! order so that slot order equals the graph's node enumeration order.

use axial_common::NodeId;
use fxhash::FxHashMap;

/// Bidirectional mapping between `NodeId`s and dense algorithm slots.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert(NodeId::new(100));  // slot 0
/// id_map.insert(NodeId::new(7));    // slot 1
///
/// assert_eq!(id_map.to_slot(NodeId::new(7)), Some(1));
/// assert_eq!(id_map.to_node(0), Some(NodeId::new(100)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> NodeId, in insertion order
    slot_to_node: Vec<NodeId>,
    /// NodeId -> dense slot
    node_to_slot: FxHashMap<NodeId, u32>,
}

impl IdMap {
    /// Create an empty ID map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ID map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_node: Vec::with_capacity(capacity),
            node_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a node and return its slot.
    ///
    /// If the node already exists, returns the existing slot.
    pub fn insert(&mut self, node: NodeId) -> u32 {
        if let Some(&slot) = self.node_to_slot.get(&node) {
            return slot;
        }

        let slot = self.slot_to_node.len() as u32;
        self.slot_to_node.push(node);
        self.node_to_slot.insert(node, slot);
        slot
    }

    /// Get the slot for a node.
    #[inline]
    pub fn to_slot(&self, node: NodeId) -> Option<u32> {
        self.node_to_slot.get(&node).copied()
    }

    /// Get the node for a slot.
    #[inline]
    pub fn to_node(&self, slot: u32) -> Option<NodeId> {
        self.slot_to_node.get(slot as usize).copied()
    }

    /// Get the node for a slot (panics if out of bounds).
    #[inline]
    pub fn to_node_unchecked(&self, slot: u32) -> NodeId {
        self.slot_to_node[slot as usize]
    }

    /// Number of mapped nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_node.len()
    }

    /// Whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_node.is_empty()
    }

    /// Check if a node is in the map.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node_to_slot.contains_key(&node)
    }

    /// Iterate over all (slot, node) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, NodeId)> + '_ {
        self.slot_to_node
            .iter()
            .enumerate()
            .map(|(slot, &node)| (slot as u32, node))
    }

    /// Memory usage in bytes.
    pub fn memory_size(&self) -> usize {
        self.slot_to_node.len() * std::mem::size_of::<NodeId>()
            + self.node_to_slot.len()
                * (std::mem::size_of::<NodeId>() + std::mem::size_of::<u32>() + 8)
    }
}

impl FromIterator<NodeId> for IdMap {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for node in iter {
            map.insert(node);
        }

        map
    }
}
