// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and distributed tracing.
//!
//! This module provides centralized message types for the core's diagnostic
//! and operational logging. Message types follow a struct-based pattern with
//! a `Display` impl to:
//!
//! * Eliminate magic strings scattered throughout call sites
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::graph` - dependency-graph construction and attribute-filling events
//! * `messages::fetch` - URI dispatcher and resolver retry events
//!
//! # Usage
//!
//! ```rust
//! use mapprint_planner::observability::messages::graph::GraphConstructionFailed;
//!
//! let msg = GraphConstructionFailed { reason: "duplicate output 'x'" };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
