// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The dependency graph builder (C4) and its two neighboring components:
//! the graph node (C3) and the attribute filler (C5).

pub mod attributes;
pub mod builder;
pub mod node;

pub use attributes::fill_attributes;
pub use builder::{DependencyGraph, DependencyGraphBuilder};
pub use node::{GraphNode, NodeId};

use std::collections::HashMap;

use serde_json::Value;

use crate::descriptors::TypeTag;

/// A single externally supplied attribute: its value plus the declared type
/// the graph builder checks assignability against.
#[derive(Debug, Clone)]
pub struct AttributeEntry {
    pub value: Value,
    pub type_tag: TypeTag,
}

impl AttributeEntry {
    pub fn new(value: Value, type_tag: TypeTag) -> Self {
        Self { value, type_tag }
    }
}

/// The attribute map supplied to the builder, keyed by external name.
pub type AttributeCatalogue = HashMap<String, AttributeEntry>;

/// Project an [`AttributeCatalogue`] down to the type-only map
/// [`DependencyGraphBuilder::new`] consumes.
pub fn type_catalogue(attributes: &AttributeCatalogue) -> HashMap<String, TypeTag> {
    attributes
        .iter()
        .map(|(name, entry)| (name.clone(), entry.type_tag.clone()))
        .collect()
}
