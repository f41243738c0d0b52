// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured messages emitted by the URI dispatcher and its resolvers
//! (C6-C9): a debug trace per retry, a warn on exhaustion.

use std::fmt;

use tracing::{Level, Span};

use super::StructuredLog;

pub struct FetchRetrying<'a> {
    pub uri: &'a str,
    pub attempt: u32,
    pub reason: &'a str,
}

impl fmt::Display for FetchRetrying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "retrying fetch of '{}' (attempt {}): {}",
            self.uri, self.attempt, self.reason
        )
    }
}

impl StructuredLog for FetchRetrying<'_> {
    fn log(&self) {
        tracing::debug!(uri = self.uri, attempt = self.attempt, reason = self.reason, "{}", self);
    }
    fn span(&self, name: &str) -> Span {
        tracing::span!(Level::DEBUG, "fetch_retrying", span_name = name, uri = self.uri, attempt = self.attempt)
    }
}

pub struct FetchRetryExhausted<'a> {
    pub uri: &'a str,
}

impl fmt::Display for FetchRetryExhausted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "retry exhausted fetching '{}'", self.uri)
    }
}

impl StructuredLog for FetchRetryExhausted<'_> {
    fn log(&self) {
        tracing::warn!(uri = self.uri, "{}", self);
    }
    fn span(&self, name: &str) -> Span {
        tracing::span!(Level::WARN, "fetch_retry_exhausted", span_name = name, uri = self.uri)
    }
}
