// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Attribute Filler (C5): two-pass propagation of declarative attributes
//! through the processors that require or provide them, walked in the same
//! order the graph was built in. Runs after [`DependencyGraphBuilder::build`]
//! succeeds, reusing the descriptors the builder already validated.

use std::collections::HashMap;

use crate::descriptors::WILDCARD_INPUT;
use crate::errors::AttributeBindingError;
use crate::graph::{AttributeCatalogue, AttributeEntry, DependencyGraph, NodeId};
use crate::observability::messages::graph::AttributeBound;
use crate::observability::messages::StructuredLog;
use crate::processor::ValueBag;

/// The attribute bag bound to each attribute-requiring node, keyed by node
/// id and, within each bag, by the processor's *internal* field name —
/// ready to be merged into that node's inputs before [`crate::processor::Processor::execute`].
pub fn fill_attributes(
    graph: &DependencyGraph,
    initial_attributes: &AttributeCatalogue,
) -> Result<HashMap<NodeId, ValueBag>, AttributeBindingError> {
    let mut live: AttributeCatalogue = initial_attributes.clone();
    let mut bound: HashMap<NodeId, ValueBag> = HashMap::new();

    for node in graph.nodes() {
        let processor = &node.processor;

        if processor.requires_attributes() {
            let mut bag = ValueBag::new();
            for input in &node.input_descriptors {
                if input.external_name == WILDCARD_INPUT {
                    for (external_name, entry) in &live {
                        bag.insert(external_name.clone(), entry.value.clone());
                    }
                    continue;
                }

                let Some(entry) = live.get(&input.external_name) else {
                    continue;
                };

                if !input.type_tag.is_assignable_from(&entry.type_tag) {
                    return Err(AttributeBindingError::AttributeTypeMismatch {
                        processor: processor.name().to_string(),
                        external_name: input.external_name.clone(),
                        internal_name: input.internal_name.clone(),
                        expected: input.type_tag.to_string(),
                        found: entry.type_tag.to_string(),
                    });
                }

                AttributeBound {
                    processor: processor.name(),
                    external_name: &input.external_name,
                    internal_name: &input.internal_name,
                }
                .log();
                bag.insert(input.internal_name.clone(), entry.value.clone());
            }
            bound.insert(node.id, bag);
        }

        if processor.provides_attributes() {
            let provided = processor.provided_attributes();
            for output in &node.output_descriptors {
                if let Some(value) = provided.get(&output.internal_name) {
                    tracing::trace!(
                        processor = processor.name(),
                        external = output.external_name.as_str(),
                        "attribute harvested from processor"
                    );
                    live.insert(
                        output.external_name.clone(),
                        AttributeEntry::new(value.clone(), output.type_tag.clone()),
                    );
                }
            }
        }
    }

    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
    use crate::graph::DependencyGraphBuilder;
    use crate::processor::{Processor, ProcessorError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct RequiresTemplate;

    #[async_trait]
    impl Processor for RequiresTemplate {
        fn name(&self) -> &str {
            "requires-template"
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            vec![FieldSpec::new("tmpl", TypeTag::Any)]
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            vec![]
        }
        fn requires_attributes(&self) -> bool {
            true
        }
        async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            Ok(ValueBag::new())
        }
    }

    struct ProvidesExtra;

    #[async_trait]
    impl Processor for ProvidesExtra {
        fn name(&self) -> &str {
            "provides-extra"
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            vec![]
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            vec![OutputFieldSpec::new("extra", TypeTag::Any)]
        }
        fn provides_attributes(&self) -> bool {
            true
        }
        fn provided_attributes(&self) -> ValueBag {
            let mut bag = ValueBag::new();
            bag.insert("extra".to_string(), json!("hello"));
            bag
        }
        async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            Ok(ValueBag::new())
        }
    }

    struct RequiresExtra;

    #[async_trait]
    impl Processor for RequiresExtra {
        fn name(&self) -> &str {
            "requires-extra"
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            vec![FieldSpec::new("extra", TypeTag::Any).with_default()]
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            vec![]
        }
        fn requires_attributes(&self) -> bool {
            true
        }
        async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            Ok(ValueBag::new())
        }
    }

    #[test]
    fn pushes_matching_attribute_under_internal_name() {
        let mut attributes = AttributeCatalogue::new();
        attributes.insert(
            "template".to_string(),
            AttributeEntry::new(json!("layout.html"), TypeTag::Any),
        );

        let processor: Arc<dyn Processor> = Arc::new(RequiresTemplate);
        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[processor])
            .unwrap();

        let bound = fill_attributes(&graph, &attributes).unwrap();
        assert_eq!(bound[&0]["tmpl"], json!("layout.html"));
    }

    #[test]
    fn provided_attribute_becomes_visible_to_later_processor() {
        let provides: Arc<dyn Processor> = Arc::new(ProvidesExtra);
        let requires: Arc<dyn Processor> = Arc::new(RequiresExtra);
        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[provides, requires])
            .unwrap();

        let bound = fill_attributes(&graph, &AttributeCatalogue::new()).unwrap();
        assert_eq!(bound[&1]["extra"], json!("hello"));
    }
}
