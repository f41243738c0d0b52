// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The shared request data model consumed by C6-C9.

use std::collections::HashMap;

/// A logical fetch request: a URI plus pending headers a resolver may
/// further enrich (context headers, configurator callbacks) before
/// dispatch. Resolvers consume this by value; a request is executed at
/// most once.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub uri: String,
    pub method: String,
    pub headers: HashMap<String, String>,
}

impl FetchRequest {
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method: "GET".to_string(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A request-configurator callback: mutates a prepared request before
/// dispatch. Registered callbacks run in stable order on every attempt, so
/// late-bound context (e.g. a refreshed auth header) is observed on
/// retries, not just the first attempt.
pub type RequestConfigurator = dyn Fn(&mut FetchRequest) + Send + Sync;
