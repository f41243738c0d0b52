// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ambient attribute names the surrounding report-engine is documented to
//! supply. Their concrete types are owned by that out-of-scope system, so
//! the graph builder's catalogue seeds them all with the `Any` type tag
//! rather than asserting a shape this crate has no way to check.

use crate::descriptors::TypeTag;

pub const VALUES: &str = "values";
pub const TASK_DIRECTORY: &str = "taskDirectory";
pub const CLIENT_HTTP_REQUEST_FACTORY: &str = "clientHttpRequestFactory";
pub const TEMPLATE: &str = "template";
pub const PDF_CONFIG: &str = "pdfConfig";
pub const SUB_REPORT_DIR: &str = "subReportDir";
pub const OUTPUT_FORMAT: &str = "outputFormat";
pub const REQUEST_HEADERS: &str = "requestHeaders";

/// All ambient names, for seeding the builder's `type_by_name` catalogue.
pub const ALL: &[&str] = &[
    VALUES,
    TASK_DIRECTORY,
    CLIENT_HTTP_REQUEST_FACTORY,
    TEMPLATE,
    PDF_CONFIG,
    SUB_REPORT_DIR,
    OUTPUT_FORMAT,
    REQUEST_HEADERS,
];

/// The ambient catalogue as `(name, type)` pairs, all tagged `Any`.
pub fn ambient_catalogue() -> Vec<(String, TypeTag)> {
    ALL.iter().map(|name| (name.to_string(), TypeTag::Any)).collect()
}
