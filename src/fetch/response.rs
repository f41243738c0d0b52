// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The shared response data model. Synthetic responses from the data/file
//! resolvers always report status 200 / "OK".

use std::collections::HashMap;

use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl Response {
    /// Build a synthetic 200 response, the shape every local resolver (C7, C8) returns.
    pub fn synthetic_ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn is_retryable_status(&self) -> bool {
        self.status >= 500
    }
}
