// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Retrying HTTP Resolver (C9): executes the transport with bounded retry,
//! context header injection, and cancellation awareness.
//!
//! The retry loop is a straight bounded loop: attempt, classify,
//! sleep-or-terminate. The sleep is the only interruptible point, modeled
//! with a [`tokio_util::sync::CancellationToken`] raced against the delay
//! via `tokio::select!`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::errors::FetchError;
use crate::fetch::context::{DiagnosticContext, APPLICATION_ID_KEY, JOB_ID_KEY};
use crate::fetch::request::{FetchRequest, RequestConfigurator};
use crate::fetch::response::Response;
use crate::observability::messages::fetch::{FetchRetryExhausted, FetchRetrying};
use crate::observability::messages::StructuredLog;

/// Bounded-retry HTTP resolver. `max_attempts` and `retry_interval` are its
/// request-factory parameters.
pub struct RetryingHttpResolver {
    client: reqwest::Client,
    max_attempts: u32,
    retry_interval: Duration,
    configurators: Vec<Arc<RequestConfigurator>>,
}

impl RetryingHttpResolver {
    pub fn new(max_attempts: u32, retry_interval: Duration) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be >= 1");
        Self {
            client: reqwest::Client::new(),
            max_attempts,
            retry_interval,
            configurators: Vec::new(),
        }
    }

    /// Register a request-configurator callback. Callbacks run in
    /// registration order, on every attempt.
    pub fn with_configurator(mut self, configurator: Arc<RequestConfigurator>) -> Self {
        self.configurators.push(configurator);
        self
    }

    /// Resolve `request` against the live transport, retrying 5xx statuses
    /// and transport errors up to `max_attempts` times.
    pub async fn resolve(
        &self,
        request: FetchRequest,
        context: &DiagnosticContext,
        cancel: &CancellationToken,
    ) -> Result<Response, FetchError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .unwrap_or(Method::GET);

        let mut last_transport_error: Option<reqwest::Error> = None;
        let mut last_status: Option<u16> = None;

        for attempt in 1..=self.max_attempts {
            let mut attempt_request = request.clone();
            for configurator in &self.configurators {
                configurator(&mut attempt_request);
            }
            inject_context_headers(&mut attempt_request, context);

            let mut builder = self.client.request(method.clone(), &attempt_request.uri);
            for (name, value) in &attempt_request.headers {
                builder = builder.header(name, value);
            }

            match builder.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if status < 500 {
                        return to_response(resp, &request.uri).await;
                    }
                    last_status = Some(status);
                    FetchRetrying {
                        uri: &request.uri,
                        attempt,
                        reason: &format!("5xx response (status {status})"),
                    }
                    .log();
                }
                Err(err) => {
                    FetchRetrying {
                        uri: &request.uri,
                        attempt,
                        reason: &format!("transport error: {err}"),
                    }
                    .log();
                    last_transport_error = Some(err);
                }
            }

            if attempt < self.max_attempts {
                if !sleep_interruptible(self.retry_interval, cancel).await {
                    return Err(FetchError::InterruptedDuringRetry);
                }
            }
        }

        if let Some(status) = last_status {
            FetchRetryExhausted { uri: &request.uri }.log();
            return Err(FetchError::RetryExhausted5xx {
                uri: request.uri,
                status,
            });
        }

        FetchRetryExhausted { uri: &request.uri }.log();
        Err(FetchError::RetryExhaustedTransport {
            uri: request.uri,
            cause: last_transport_error.expect("either a status or a transport error was recorded"),
        })
    }
}

fn inject_context_headers(request: &mut FetchRequest, context: &DiagnosticContext) {
    if let Some(job_id) = context.get(JOB_ID_KEY) {
        request.headers.insert("X-Request-ID".to_string(), job_id.clone());
        request.headers.insert("X-Job-ID".to_string(), job_id.clone());
    }
    if let Some(application_id) = context.get(APPLICATION_ID_KEY) {
        request
            .headers
            .insert("X-Application-ID".to_string(), application_id.clone());
    }
}

/// Sleep for `duration`, or return `false` early if `cancel` fires first.
async fn sleep_interruptible(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => true,
        _ = cancel.cancelled() => false,
    }
}

async fn to_response(resp: reqwest::Response, uri: &str) -> Result<Response, FetchError> {
    let status = resp.status().as_u16();
    let reason = resp
        .status()
        .canonical_reason()
        .unwrap_or("")
        .to_string();
    let headers = resp
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();
    let body = resp
        .bytes()
        .await
        .map_err(|cause| FetchError::ResponseBodyReadFailed {
            uri: uri.to_string(),
            cause,
        })?;

    Ok(Response {
        status,
        reason,
        headers,
        body,
    })
}
