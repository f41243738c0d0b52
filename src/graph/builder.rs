// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency Graph Builder (C4): constructs the DAG from a processor list
//! plus an attribute catalogue in a single pass, enforcing every invariant
//! on input/output typing and naming as it goes. Ordering is an explicit
//! contract: the caller decides processor priority; edges only ever run
//! from an earlier-positioned processor to a later one, which is what makes
//! the resulting graph acyclic without a separate cycle check.

use std::collections::HashMap;

use crate::descriptors::{
    build_input_descriptors, build_output_descriptors, TypeTag, WILDCARD_INPUT,
};
use crate::errors::GraphConstructionError;
use crate::graph::node::{link, GraphNode, NodeId};
use crate::observability::messages::graph::{GraphConstructionFailed, GraphNodeExamined};
use crate::observability::messages::StructuredLog;
use crate::processor::SharedProcessor;
use crate::well_known;

/// The built, immutable dependency graph (C4's output / C3's node set).
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    roots: Vec<NodeId>,
}

impl DependencyGraph {
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id]
    }

    /// A topological ordering of node ids (Kahn's algorithm over the
    /// builder's producer -> dependent edges). Used by the demo execution
    /// walker; the builder itself never needs this.
    pub fn topological_order(&self) -> Vec<NodeId> {
        let mut in_degree = vec![0usize; self.nodes.len()];
        for node in &self.nodes {
            for &dependent in &node.dependents {
                in_degree[dependent] += 1;
            }
        }

        let mut queue: Vec<NodeId> = (0..self.nodes.len())
            .filter(|&id| in_degree[id] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(id) = queue.pop() {
            order.push(id);
            for &dependent in &self.nodes[id].dependents {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push(dependent);
                }
            }
        }

        order
    }
}

/// Builds a [`DependencyGraph`] from a fixed processor ordering and an
/// attribute catalogue (external attribute name -> declared type).
pub struct DependencyGraphBuilder {
    attributes: HashMap<String, TypeTag>,
}

impl DependencyGraphBuilder {
    pub fn new(attributes: HashMap<String, TypeTag>) -> Self {
        Self { attributes }
    }

    pub fn build(
        &self,
        processors: &[SharedProcessor],
    ) -> Result<DependencyGraph, GraphConstructionError> {
        let mut producer_by_name: HashMap<String, NodeId> = HashMap::new();
        let mut type_by_name: HashMap<String, TypeTag> = HashMap::new();

        for (name, tag) in &self.attributes {
            type_by_name.insert(name.clone(), tag.clone());
        }
        for (name, tag) in well_known::ambient_catalogue() {
            type_by_name.entry(name).or_insert(tag);
        }

        let mut nodes: Vec<GraphNode> = Vec::with_capacity(processors.len());
        let mut roots: Vec<NodeId> = Vec::new();
        let mut fresh_token: u64 = 0;

        for processor in processors {
            let id = nodes.len();
            GraphNodeExamined { processor: processor.name(), node_id: id }.log();

            let input_fields = processor.input_fields();
            let input_descriptors = build_input_descriptors(
                &input_fields,
                processor.input_prefix(),
                &processor.input_mapper(),
            )
            .map_err(|(unmapped, legal_fields)| {
                GraphConstructionFailed { reason: "unmapped input alias" }.log();
                GraphConstructionError::UnmappedInputAlias {
                    processor: processor.name().to_string(),
                    unmapped,
                    legal_fields,
                }
            })?;

            let output_fields = processor.output_fields();
            let mut output_descriptors = build_output_descriptors(
                &output_fields,
                processor.output_prefix(),
                &processor.output_mapper(),
            )
            .map_err(|(unmapped, legal_fields)| {
                GraphConstructionFailed { reason: "unmapped output alias" }.log();
                GraphConstructionError::UnmappedOutputAlias {
                    processor: processor.name().to_string(),
                    unmapped,
                    legal_fields,
                }
            })?;

            nodes.push(GraphNode::new(
                id,
                processor.clone(),
                input_descriptors.clone(),
                Vec::new(),
            ));

            let mut has_incoming = false;

            for input in &input_descriptors {
                if input.external_name == WILDCARD_INPUT {
                    if let Some(deps) = processor.custom_dependencies() {
                        for dep_name in deps {
                            if let Some(&producer_id) = producer_by_name.get(&dep_name) {
                                link(&mut nodes, producer_id, id);
                                has_incoming = true;
                            }
                        }
                    } else {
                        let producer_ids: Vec<NodeId> =
                            producer_by_name.values().copied().collect();
                        for producer_id in producer_ids {
                            link(&mut nodes, producer_id, id);
                            has_incoming = true;
                        }
                    }
                    continue;
                }

                match type_by_name.get(&input.external_name) {
                    None => {
                        if !input.has_default {
                            return Err(GraphConstructionError::MissingInput {
                                processor: processor.name().to_string(),
                                input: input.external_name.clone(),
                            });
                        }
                    }
                    Some(producer_type) => {
                        if !input.type_tag.is_assignable_from(producer_type) {
                            return Err(match producer_by_name.get(&input.external_name) {
                                Some(&producer_id) => GraphConstructionError::TypeConflictWithProducer {
                                    processor: processor.name().to_string(),
                                    input: input.external_name.clone(),
                                    producer: nodes[producer_id].observability_key().to_string(),
                                    expected: input.type_tag.to_string(),
                                    found: producer_type.to_string(),
                                },
                                None => GraphConstructionError::TypeConflictWithAttribute {
                                    processor: processor.name().to_string(),
                                    input: input.external_name.clone(),
                                    expected: input.type_tag.to_string(),
                                    found: producer_type.to_string(),
                                },
                            });
                        }
                        if let Some(&producer_id) = producer_by_name.get(&input.external_name) {
                            link(&mut nodes, producer_id, id);
                            has_incoming = true;
                        }
                    }
                }
            }

            if !has_incoming {
                roots.push(id);
            }

            for output in &mut output_descriptors {
                if type_by_name.contains_key(&output.external_name) {
                    if output.renameable {
                        fresh_token += 1;
                        output.external_name = format!("{}~{}", output.external_name, fresh_token);
                    } else if producer_by_name.contains_key(&output.external_name) {
                        return Err(GraphConstructionError::DuplicateOutput(
                            output.external_name.clone(),
                        ));
                    } else {
                        return Err(GraphConstructionError::OutputClashesWithAttribute(
                            output.external_name.clone(),
                        ));
                    }
                }
                type_by_name.insert(output.external_name.clone(), output.type_tag.clone());
                producer_by_name.insert(output.external_name.clone(), id);
            }

            nodes[id].output_descriptors = output_descriptors;

            for input in &input_descriptors {
                if input.is_also_output {
                    producer_by_name.insert(input.external_name.clone(), id);
                }
            }
        }

        let missing = unreachable_processors(&nodes, &roots);
        if !missing.is_empty() {
            GraphConstructionFailed { reason: "unreachable processors" }.log();
            return Err(GraphConstructionError::UnreachableProcessors(missing));
        }

        Ok(DependencyGraph { nodes, roots })
    }
}

fn unreachable_processors(nodes: &[GraphNode], roots: &[NodeId]) -> Vec<String> {
    let mut reachable = vec![false; nodes.len()];
    let mut stack: Vec<NodeId> = roots.to_vec();
    for &r in roots {
        reachable[r] = true;
    }
    while let Some(n) = stack.pop() {
        for &dependent in &nodes[n].dependents {
            if !reachable[dependent] {
                reachable[dependent] = true;
                stack.push(dependent);
            }
        }
    }
    nodes
        .iter()
        .enumerate()
        .filter(|(i, _)| !reachable[*i])
        .map(|(_, n)| n.observability_key().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{FieldSpec, NameMap, OutputFieldSpec};
    use crate::processor::{Processor, ProcessorError, ValueBag};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubProcessor {
        name: &'static str,
        inputs: Vec<FieldSpec>,
        outputs: Vec<OutputFieldSpec>,
        input_mapper: NameMap,
        output_mapper: NameMap,
        custom_dependencies: Option<Vec<String>>,
    }

    impl StubProcessor {
        fn new(name: &'static str, inputs: Vec<FieldSpec>, outputs: Vec<OutputFieldSpec>) -> Self {
            Self {
                name,
                inputs,
                outputs,
                input_mapper: NameMap::default(),
                output_mapper: NameMap::default(),
                custom_dependencies: None,
            }
        }
    }

    #[async_trait]
    impl Processor for StubProcessor {
        fn name(&self) -> &str {
            self.name
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            self.inputs.clone()
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            self.outputs.clone()
        }
        fn input_mapper(&self) -> NameMap {
            self.input_mapper.clone()
        }
        fn output_mapper(&self) -> NameMap {
            self.output_mapper.clone()
        }
        fn custom_dependencies(&self) -> Option<Vec<String>> {
            self.custom_dependencies.clone()
        }
        async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            Ok(ValueBag::new())
        }
    }

    fn tag(name: &str) -> TypeTag {
        TypeTag::named(name)
    }

    #[test]
    fn simple_chain_links_producer_to_consumer() {
        let p1 = Arc::new(StubProcessor::new(
            "p1",
            vec![],
            vec![OutputFieldSpec::new("map", tag("Map"))],
        ));
        let p2 = Arc::new(StubProcessor::new(
            "p2",
            vec![FieldSpec::new("map", tag("Map"))],
            vec![OutputFieldSpec::new("legend", tag("Legend"))],
        ));

        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p1, p2])
            .unwrap();

        assert_eq!(graph.roots(), &[0]);
        assert_eq!(graph.node(0).dependents, vec![1]);
    }

    #[test]
    fn duplicate_output_is_rejected() {
        let p1 = Arc::new(StubProcessor::new(
            "p1",
            vec![],
            vec![OutputFieldSpec::new("x", tag("Int"))],
        ));
        let p2 = Arc::new(StubProcessor::new(
            "p2",
            vec![],
            vec![OutputFieldSpec::new("x", tag("Int"))],
        ));

        let err = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p1, p2])
            .unwrap_err();
        assert_eq!(err, GraphConstructionError::DuplicateOutput("x".to_string()));
    }

    #[test]
    fn output_clashing_with_attribute_is_rejected() {
        let p1 = Arc::new(StubProcessor::new(
            "p1",
            vec![],
            vec![OutputFieldSpec::new("x", tag("Int"))],
        ));
        let mut attributes = HashMap::new();
        attributes.insert("x".to_string(), tag("Int"));

        let err = DependencyGraphBuilder::new(attributes)
            .build(&[p1])
            .unwrap_err();
        assert_eq!(
            err,
            GraphConstructionError::OutputClashesWithAttribute("x".to_string())
        );
    }

    #[test]
    fn missing_input_without_default_is_rejected() {
        let p2 = Arc::new(StubProcessor::new(
            "p2",
            vec![FieldSpec::new("x", tag("String"))],
            vec![],
        ));

        let err = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p2])
            .unwrap_err();
        assert_eq!(
            err,
            GraphConstructionError::MissingInput {
                processor: "p2".to_string(),
                input: "x".to_string(),
            }
        );
    }

    #[test]
    fn type_conflict_with_producer_is_rejected() {
        let p1 = Arc::new(StubProcessor::new(
            "p1",
            vec![],
            vec![OutputFieldSpec::new("x", tag("Int"))],
        ));
        let p2 = Arc::new(StubProcessor::new(
            "p2",
            vec![FieldSpec::new("x", tag("String"))],
            vec![],
        ));

        let err = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p1, p2])
            .unwrap_err();
        assert!(matches!(
            err,
            GraphConstructionError::TypeConflictWithProducer { .. }
        ));
    }

    #[test]
    fn wildcard_with_custom_dependencies_narrows_edges() {
        let p0 = Arc::new(StubProcessor::new(
            "p0",
            vec![],
            vec![OutputFieldSpec::new("a", TypeTag::Any)],
        ));
        let unrelated = Arc::new(StubProcessor::new(
            "unrelated",
            vec![],
            vec![OutputFieldSpec::new("b", TypeTag::Any)],
        ));
        let mut wildcard = StubProcessor::new(
            "wildcard",
            vec![FieldSpec::new(WILDCARD_INPUT, TypeTag::Any)],
            vec![],
        );
        wildcard.custom_dependencies = Some(vec!["a".to_string()]);
        let wildcard = Arc::new(wildcard);

        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p0, unrelated, wildcard])
            .unwrap();

        assert_eq!(graph.node(0).dependents, vec![2]);
        assert!(graph.node(1).dependents.is_empty());
    }

    #[test]
    fn unmapped_input_alias_is_rejected() {
        let mut p = StubProcessor::new("p", vec![FieldSpec::new("map", tag("Map"))], vec![]);
        p.input_mapper = NameMap::new([("mapData".to_string(), "nope".to_string())]);
        let p = Arc::new(p);

        let err = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p])
            .unwrap_err();
        assert!(matches!(
            err,
            GraphConstructionError::UnmappedInputAlias { .. }
        ));
    }

    #[test]
    fn topological_order_respects_edges() {
        let p1 = Arc::new(StubProcessor::new(
            "p1",
            vec![],
            vec![OutputFieldSpec::new("map", tag("Map"))],
        ));
        let p2 = Arc::new(StubProcessor::new(
            "p2",
            vec![FieldSpec::new("map", tag("Map"))],
            vec![OutputFieldSpec::new("legend", tag("Legend"))],
        ));

        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[p1, p2])
            .unwrap();
        let order = graph.topological_order();
        let p1_pos = order.iter().position(|&id| id == 0).unwrap();
        let p2_pos = order.iter().position(|&id| id == 1).unwrap();
        assert!(p1_pos < p2_pos);
    }
}
