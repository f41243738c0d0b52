// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured messages emitted while building the dependency graph (C4) and
//! filling attributes (C5).

use std::fmt;

use tracing::{Level, Span};

use super::StructuredLog;

pub struct GraphNodeExamined<'a> {
    pub processor: &'a str,
    pub node_id: usize,
}

impl fmt::Display for GraphNodeExamined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "examining processor '{}' (node {})", self.processor, self.node_id)
    }
}

impl StructuredLog for GraphNodeExamined<'_> {
    fn log(&self) {
        tracing::debug!(processor = self.processor, node_id = self.node_id, "{}", self);
    }
    fn span(&self, name: &str) -> Span {
        tracing::span!(Level::DEBUG, "graph_node_examined", span_name = name, processor = self.processor, node_id = self.node_id)
    }
}

pub struct GraphConstructionFailed<'a> {
    pub reason: &'a str,
}

impl fmt::Display for GraphConstructionFailed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph construction failed: {}", self.reason)
    }
}

impl StructuredLog for GraphConstructionFailed<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }
    fn span(&self, name: &str) -> Span {
        tracing::span!(Level::WARN, "graph_construction_failed", span_name = name, reason = self.reason)
    }
}

pub struct AttributeBound<'a> {
    pub processor: &'a str,
    pub external_name: &'a str,
    pub internal_name: &'a str,
}

impl fmt::Display for AttributeBound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute '{}' bound to processor '{}' as '{}'",
            self.external_name, self.processor, self.internal_name
        )
    }
}

impl StructuredLog for AttributeBound<'_> {
    fn log(&self) {
        tracing::trace!(
            processor = self.processor,
            external = self.external_name,
            internal = self.internal_name,
            "{}",
            self
        );
    }
    fn span(&self, name: &str) -> Span {
        tracing::span!(
            Level::TRACE,
            "attribute_bound",
            span_name = name,
            processor = self.processor,
            external = self.external_name
        )
    }
}
