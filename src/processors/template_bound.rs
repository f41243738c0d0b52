// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A toy processor requiring the ambient `template` attribute (C5), proving
//! the attribute filler's require-attributes path end to end.

use async_trait::async_trait;
use serde_json::json;

use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
use crate::processor::{Processor, ProcessorError, ValueBag};
use crate::well_known;

pub struct TemplateBoundProcessor;

#[async_trait]
impl Processor for TemplateBoundProcessor {
    fn name(&self) -> &str {
        "template-bound"
    }

    fn input_fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("tmpl", TypeTag::Any)]
    }

    fn output_fields(&self) -> Vec<OutputFieldSpec> {
        vec![OutputFieldSpec::new("rendered", TypeTag::Any)]
    }

    fn input_mapper(&self) -> crate::descriptors::NameMap {
        crate::descriptors::NameMap::new([(well_known::TEMPLATE.to_string(), "tmpl".to_string())])
    }

    fn requires_attributes(&self) -> bool {
        true
    }

    async fn execute(&self, inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
        let template = inputs
            .get("tmpl")
            .cloned()
            .ok_or_else(|| ProcessorError::new(self.name(), "template attribute not bound"))?;

        let mut out = ValueBag::new();
        out.insert("rendered".to_string(), json!({"template": template}));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{fill_attributes, AttributeCatalogue, AttributeEntry, DependencyGraphBuilder};
    use std::collections::HashMap;
    use std::sync::Arc;

    #[tokio::test]
    async fn receives_template_attribute_through_filler() {
        let mut attributes = AttributeCatalogue::new();
        attributes.insert(
            well_known::TEMPLATE.to_string(),
            AttributeEntry::new(json!("layout.html"), TypeTag::Any),
        );

        let processor: Arc<dyn Processor> = Arc::new(TemplateBoundProcessor);
        let graph = DependencyGraphBuilder::new(HashMap::new())
            .build(&[processor])
            .unwrap();

        let bound = fill_attributes(&graph, &attributes).unwrap();
        let out = graph.node(0)
            .processor
            .execute(bound[&0].clone())
            .await
            .unwrap();
        assert_eq!(out["rendered"]["template"], "layout.html");
    }
}
