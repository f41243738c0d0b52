// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A minimal sample processor catalogue, used by both the unit tests and
//! the demo binary.

pub mod http_resource;
pub mod legend;
pub mod map_data;
pub mod template_bound;

pub use http_resource::HttpResourceProcessor;
pub use legend::LegendProcessor;
pub use map_data::MapDataProcessor;
pub use template_bound::TemplateBoundProcessor;
