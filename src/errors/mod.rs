// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error kinds surfaced by the core: graph construction, attribute binding,
//! and fetching. Each is a `thiserror` enum so fallible APIs stay on
//! `Result<T, E>` with `?`-propagation throughout.

pub mod attributes;
pub mod fetch;
pub mod graph;

pub use attributes::AttributeBindingError;
pub use fetch::FetchError;
pub use graph::GraphConstructionError;
