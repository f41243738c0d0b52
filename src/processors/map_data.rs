// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A toy map-data producer: no inputs, publishes a static `map` output.
//! Scoped down to exercise the graph builder's root-node invariant.

use async_trait::async_trait;
use serde_json::json;

use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
use crate::processor::{Processor, ProcessorError, ValueBag};

pub struct MapDataProcessor;

#[async_trait]
impl Processor for MapDataProcessor {
    fn name(&self) -> &str {
        "map-data"
    }

    fn input_fields(&self) -> Vec<FieldSpec> {
        vec![]
    }

    fn output_fields(&self) -> Vec<OutputFieldSpec> {
        vec![OutputFieldSpec::new("map", TypeTag::named("Map"))]
    }

    async fn execute(&self, _inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
        let mut out = ValueBag::new();
        out.insert("map".to_string(), json!({"layers": ["roads", "parcels"]}));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn produces_a_map_with_layers() {
        let out = MapDataProcessor.execute(ValueBag::new()).await.unwrap();
        assert_eq!(out["map"]["layers"][0], "roads");
    }
}
