// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

use crate::core::id::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AxialError {
    /// An algorithm parameter is outside its valid domain.
    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },

    /// A node referenced by an algorithm parameter is not in the graph.
    #[error("Node '{node}' not found in graph")]
    NodeNotFound { node: NodeId },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AxialError {
    /// Shorthand for parameter-validation failures.
    pub fn invalid_argument(arg: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg: arg.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AxialError>;
