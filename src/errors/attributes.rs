// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Failures raised while pushing attributes into or harvesting them from
/// processors (C5).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AttributeBindingError {
    #[error(
        "attribute '{external_name}' (bound to processor '{processor}' input '{internal_name}') has type {expected}, found {found}"
    )]
    AttributeTypeMismatch {
        processor: String,
        external_name: String,
        internal_name: String,
        expected: String,
        found: String,
    },
}
