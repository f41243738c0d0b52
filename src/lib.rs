// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The execution planner and resource fetcher of a map/report printing
//! engine: a dependency-graph builder for declarative processors
//! ([`graph`], [`descriptors`], [`processor`]) and a config-resolving HTTP
//! fetcher ([`fetch`]).

pub mod config;
pub mod descriptors;
pub mod engine;
pub mod errors;
pub mod fetch;
pub mod graph;
pub mod observability;
pub mod processor;
pub mod processors;
pub mod well_known;
