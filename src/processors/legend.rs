// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A toy legend builder: consumes `map`, produces `legend`.

use async_trait::async_trait;
use serde_json::json;

use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
use crate::processor::{Processor, ProcessorError, ValueBag};

pub struct LegendProcessor;

#[async_trait]
impl Processor for LegendProcessor {
    fn name(&self) -> &str {
        "legend"
    }

    fn input_fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("map", TypeTag::named("Map"))]
    }

    fn output_fields(&self) -> Vec<OutputFieldSpec> {
        vec![OutputFieldSpec::new("legend", TypeTag::named("Legend"))]
    }

    async fn execute(&self, inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
        let layers = inputs
            .get("map")
            .and_then(|map| map.get("layers"))
            .and_then(|layers| layers.as_array())
            .cloned()
            .unwrap_or_default();

        let mut out = ValueBag::new();
        out.insert("legend".to_string(), json!({"entries": layers}));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn builds_legend_entries_from_map_layers() {
        let mut inputs = ValueBag::new();
        inputs.insert("map".to_string(), json!({"layers": ["roads"]}));

        let out = LegendProcessor.execute(inputs).await.unwrap();
        assert_eq!(out["legend"]["entries"][0], "roads");
    }
}
