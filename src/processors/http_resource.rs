// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A toy processor that fetches a resource through the URI dispatcher (C6)
//! and publishes its bytes, base64-encoded, as its output.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::descriptors::{FieldSpec, OutputFieldSpec, TypeTag};
use crate::fetch::{dispatch, Configuration, DiagnosticContext, FetchRequest, RetryingHttpResolver};
use crate::processor::{Processor, ProcessorError, ValueBag};

pub struct HttpResourceProcessor {
    config: Arc<dyn Configuration>,
    http: Arc<RetryingHttpResolver>,
}

impl HttpResourceProcessor {
    pub fn new(config: Arc<dyn Configuration>, http: Arc<RetryingHttpResolver>) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl Processor for HttpResourceProcessor {
    fn name(&self) -> &str {
        "http-resource"
    }

    fn input_fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("uri", TypeTag::named("String"))]
    }

    fn output_fields(&self) -> Vec<OutputFieldSpec> {
        vec![OutputFieldSpec::new("resource", TypeTag::named("Bytes"))]
    }

    async fn execute(&self, inputs: ValueBag) -> Result<ValueBag, ProcessorError> {
        let uri = inputs
            .get("uri")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ProcessorError::new(self.name(), "missing 'uri' input"))?;

        let request = FetchRequest::get(uri);
        let context = DiagnosticContext::new();
        let cancel = CancellationToken::new();

        let response = dispatch(request, self.config.as_ref(), &self.http, &context, &cancel)
            .await
            .map_err(|e| ProcessorError::new(self.name(), e.to_string()))?;

        let mut out = ValueBag::new();
        out.insert(
            "resource".to_string(),
            json!(BASE64.encode(response.body)),
        );
        Ok(out)
    }
}
