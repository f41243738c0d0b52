// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The `Processor` trait (C2): the unit of work the graph builder links
//! together. A processor declares its input/output field shapes explicitly
//! (there is no reflection to harvest them from) and is driven by `execute`
//! once its inputs are satisfied.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptors::{FieldSpec, NameMap, OutputFieldSpec};

/// The bag of named values a processor reads from and writes into. Keyed by
/// internal field name (not external/mapped name) on both sides of `execute`.
pub type ValueBag = HashMap<String, Value>;

/// A unit of work in the dependency graph.
///
/// Implementors declare their input/output shapes via [`input_fields`] and
/// [`output_fields`] rather than relying on reflection over a typed struct;
/// [`crate::descriptors::build_input_descriptors`] and
/// [`crate::descriptors::build_output_descriptors`] turn those declarations,
/// plus this processor's prefix/mapper configuration, into the external-name
/// descriptors the graph builder actually links on.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Stable identifier used in graph diagnostics and logs.
    fn name(&self) -> &str;

    /// The processor's declared input fields, in the shape a reflective
    /// runtime would have enumerated from a typed input struct.
    fn input_fields(&self) -> Vec<FieldSpec>;

    /// The processor's declared output fields.
    fn output_fields(&self) -> Vec<OutputFieldSpec>;

    /// Prefix prepended to every external input name.
    fn input_prefix(&self) -> Option<&str> {
        None
    }

    /// Prefix prepended to every external output name.
    fn output_prefix(&self) -> Option<&str> {
        None
    }

    /// Rename overrides for input fields (external -> internal pairs).
    fn input_mapper(&self) -> NameMap {
        NameMap::default()
    }

    /// Rename overrides for output fields (internal -> external pairs).
    fn output_mapper(&self) -> NameMap {
        NameMap::default()
    }

    /// When this processor declares the wildcard `VALUES` input, an explicit
    /// list of external names it actually depends on, narrowing the wildcard
    /// edge set the builder would otherwise draw from every known producer.
    fn custom_dependencies(&self) -> Option<Vec<String>> {
        None
    }

    /// Whether the attribute filler (C5) should push live attributes into
    /// this processor before execution.
    fn requires_attributes(&self) -> bool {
        false
    }

    /// Whether this processor extends the live attribute map for later
    /// processors in the walk order.
    fn provides_attributes(&self) -> bool {
        false
    }

    /// The attribute values this processor contributes, keyed by internal
    /// output field name, when [`Processor::provides_attributes`] is true.
    fn provided_attributes(&self) -> ValueBag {
        ValueBag::new()
    }

    /// Execute against a bag of resolved inputs, producing a bag of outputs.
    /// Both bags are keyed by internal field name.
    async fn execute(&self, inputs: ValueBag) -> Result<ValueBag, ProcessorError>;
}

/// An error raised by a processor during [`Processor::execute`].
#[derive(Debug, thiserror::Error)]
#[error("processor '{processor}' failed: {message}")]
pub struct ProcessorError {
    pub processor: String,
    pub message: String,
}

impl ProcessorError {
    pub fn new(processor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            processor: processor.into(),
            message: message.into(),
        }
    }
}

/// Shared-ownership handle to a processor, the shape the graph builder and
/// engine actually pass around.
pub type SharedProcessor = Arc<dyn Processor>;
