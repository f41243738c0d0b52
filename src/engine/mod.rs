// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A thin demonstration walker over a built [`DependencyGraph`].
//!
//! This is explicitly not a scheduler: it runs nodes strictly in topological
//! order on the current task, with no concurrency, priority, or
//! partial-failure continuation. It exists only to prove the graph this
//! crate builds is usable end to end; real execution scheduling is the
//! surrounding system's job.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::descriptors::WILDCARD_INPUT;
use crate::graph::{DependencyGraph, NodeId};
use crate::processor::{ProcessorError, ValueBag};

/// Every node's output bag, keyed by node id, plus the external-name value
/// store the walk accumulated along the way.
pub struct ExecutionReport {
    pub outputs: HashMap<NodeId, ValueBag>,
    pub values_by_external_name: HashMap<String, Value>,
}

/// Walk `graph` in topological order, executing each node's processor with
/// inputs resolved from upstream outputs and, where present, the attribute
/// bag `fill_attributes` bound to that node.
pub async fn run(
    graph: &DependencyGraph,
    attribute_bound: &HashMap<NodeId, ValueBag>,
) -> Result<ExecutionReport, ProcessorError> {
    let mut values_by_external_name: HashMap<String, Value> = HashMap::new();
    let mut outputs: HashMap<NodeId, ValueBag> = HashMap::new();

    for node_id in graph.topological_order() {
        let node = graph.node(node_id);

        let mut inputs = attribute_bound.get(&node_id).cloned().unwrap_or_default();

        for input in &node.input_descriptors {
            if input.external_name == WILDCARD_INPUT {
                let bag: Map<String, Value> = values_by_external_name
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                inputs.insert(input.internal_name.clone(), Value::Object(bag));
            } else if let Some(value) = values_by_external_name.get(&input.external_name) {
                inputs.insert(input.internal_name.clone(), value.clone());
            }
        }

        let node_outputs = node.processor.execute(inputs).await?;

        for output in &node.output_descriptors {
            if let Some(value) = node_outputs.get(&output.internal_name) {
                values_by_external_name.insert(output.external_name.clone(), value.clone());
            }
        }

        outputs.insert(node_id, node_outputs);
    }

    Ok(ExecutionReport {
        outputs,
        values_by_external_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
    use crate::graph::DependencyGraphBuilder;
    use crate::processor::Processor;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct Producer;

    #[async_trait]
    impl Processor for Producer {
        fn name(&self) -> &str {
            "producer"
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            vec![]
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            vec![OutputFieldSpec::new("map", TypeTag::named("Map"))]
        }
        async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            let mut out = ValueBag::new();
            out.insert("map".to_string(), json!({"layers": 3}));
            Ok(out)
        }
    }

    struct Consumer;

    #[async_trait]
    impl Processor for Consumer {
        fn name(&self) -> &str {
            "consumer"
        }
        fn input_fields(&self) -> Vec<FieldSpec> {
            vec![FieldSpec::new("map", TypeTag::named("Map"))]
        }
        fn output_fields(&self) -> Vec<OutputFieldSpec> {
            vec![OutputFieldSpec::new("legend", TypeTag::named("Legend"))]
        }
        async fn execute(&self, inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
            let layers = inputs["map"]["layers"].as_i64().unwrap_or(0);
            let mut out = ValueBag::new();
            out.insert("legend".to_string(), json!({"entries": layers}));
            Ok(out)
        }
    }

    #[tokio::test]
    async fn walks_graph_and_threads_values_between_nodes() {
        let producer: Arc<dyn Processor> = Arc::new(Producer);
        let consumer: Arc<dyn Processor> = Arc::new(Consumer);
        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[producer, consumer])
            .unwrap();

        let report = run(&graph, &HashMap::new()).await.unwrap();
        assert_eq!(
            report.values_by_external_name["legend"],
            json!({"entries": 3})
        );
    }
}
