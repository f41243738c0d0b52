// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Graph Node (C3): a processor instance wrapped with its resolved outgoing
//! edges. Created one per processor during build; mutated only during build,
//! by appending outgoing edges as later processors declare dependencies on
//! this node's outputs.

use crate::descriptors::{InputDescriptor, OutputDescriptor};
use crate::processor::SharedProcessor;

/// Index of a [`GraphNode`] within a [`crate::graph::builder::DependencyGraph`]'s node set.
pub type NodeId = usize;

/// A processor instance plus its resolved dependency edges.
///
/// Carries the input/output descriptors the builder already validated for
/// this processor, so later passes (the attribute filler, the demo engine)
/// never need to re-derive or re-validate them.
#[derive(Clone)]
pub struct GraphNode {
    pub id: NodeId,
    pub processor: SharedProcessor,
    pub input_descriptors: Vec<InputDescriptor>,
    pub output_descriptors: Vec<OutputDescriptor>,
    /// Nodes that depend on this node's output (forward edges).
    pub dependents: Vec<NodeId>,
}

impl GraphNode {
    pub fn new(
        id: NodeId,
        processor: SharedProcessor,
        input_descriptors: Vec<InputDescriptor>,
        output_descriptors: Vec<OutputDescriptor>,
    ) -> Self {
        Self {
            id,
            processor,
            input_descriptors,
            output_descriptors,
            dependents: Vec::new(),
        }
    }

    /// Observability key: the processor's declared name, stable across runs.
    pub fn observability_key(&self) -> &str {
        self.processor.name()
    }

    fn add_dependent(&mut self, dependent: NodeId) {
        if !self.dependents.contains(&dependent) {
            self.dependents.push(dependent);
        }
    }
}

pub(crate) fn link(nodes: &mut [GraphNode], producer: NodeId, dependent: NodeId) {
    nodes[producer].add_dependent(dependent);
}
