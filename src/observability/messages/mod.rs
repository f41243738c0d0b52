// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging and distributed tracing.
//!
//! Each message type implements:
//!
//! * `Display` - Human-readable output (supports future i18n)
//! * `StructuredLog` - Machine-readable fields + OpenTelemetry span creation
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `graph` - dependency-graph construction and attribute-filling events
//! * `fetch` - URI dispatcher and resolver retry events
//!
//! # Usage
//!
//! ```rust
//! use mapprint_planner::observability::messages::{StructuredLog, graph::GraphNodeExamined};
//!
//! let msg = GraphNodeExamined { processor: "map-data", node_id: 0 };
//!
//! // Human-readable only
//! tracing::debug!("{}", msg);
//!
//! // Human-readable message AND structured fields
//! msg.log();
//! ```

pub mod fetch;
pub mod graph;

use tracing::Span;

/// Trait for messages that support structured logging and distributed tracing.
///
/// This trait provides two key capabilities:
///
/// 1. **Structured Logging** - Emit log events with machine-readable fields
///    for querying, metrics extraction, and alerting
/// 2. **Distributed Tracing** - Create OpenTelemetry spans with attributes
///    for end-to-end request tracing and performance analysis
///
/// # Benefits
///
/// ## Structured Fields
/// - **Queryable**: Filter logs by field values without string parsing
/// - **Metrics**: Automatically extract metrics from log fields
/// - **i18n-Ready**: Fields are language-independent, only messages change
///
/// ## Distributed Tracing
/// - **Request Flow**: See graph construction and fetch retries as a trace
///   with nested spans
/// - **Filtering**: Query traces by span attributes (processor, uri, etc.)
pub trait StructuredLog {
    /// Emit a log event: the human-readable `Display` message plus
    /// machine-readable fields. The log level is determined by the message
    /// type's semantic meaning (e.g. a retry is `debug`, exhaustion is `warn`).
    fn log(&self);

    /// Create a span with this message's fields as attributes.
    fn span(&self, name: &str) -> Span;
}
