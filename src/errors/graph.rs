// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::descriptors::UnmappedAlias;

/// Every failure the dependency graph builder (C4) can raise. Graph
/// construction fails fast on the first unrecoverable violation, except
/// mapping verification, which collects all offending mappings into one
/// error before returning.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphConstructionError {
    #[error("processor '{processor}' has no value for input '{input}'")]
    MissingInput { processor: String, input: String },

    #[error(
        "processor '{processor}' input '{input}' conflicts with attribute type: expected {expected}, found {found}"
    )]
    TypeConflictWithAttribute {
        processor: String,
        input: String,
        expected: String,
        found: String,
    },

    #[error(
        "processor '{processor}' input '{input}' conflicts with producer '{producer}' type: expected {expected}, found {found}"
    )]
    TypeConflictWithProducer {
        processor: String,
        input: String,
        producer: String,
        expected: String,
        found: String,
    },

    #[error("output '{0}' is provided by more than one processor")]
    DuplicateOutput(String),

    #[error("output '{0}' clashes with an attribute of the same name")]
    OutputClashesWithAttribute(String),

    #[error(
        "processor '{processor}' input mapper names unknown fields {unmapped:?}; legal fields are {legal_fields:?}"
    )]
    UnmappedInputAlias {
        processor: String,
        unmapped: Vec<UnmappedAlias>,
        legal_fields: Vec<String>,
    },

    #[error(
        "processor '{processor}' output mapper names unknown fields {unmapped:?}; legal fields are {legal_fields:?}"
    )]
    UnmappedOutputAlias {
        processor: String,
        unmapped: Vec<UnmappedAlias>,
        legal_fields: Vec<String>,
    },

    #[error("graph does not contain all processors; unreachable: {0:?}")]
    UnreachableProcessors(Vec<String>),
}
