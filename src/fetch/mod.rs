// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The Config-Resolving HTTP Fetcher: the URI dispatcher (C6) and its three
//! resolvers (C7-C9), plus the shared request/response model and context
//! propagator (C10).

pub mod config_file;
pub mod context;
pub mod data_uri;
pub mod dispatcher;
pub mod http;
pub mod request;
pub mod response;

pub use config_file::{ConfigFileStore, Configuration};
pub use context::{ContextFactory, ContextGuard, DiagnosticContext};
pub use dispatcher::dispatch;
pub use http::RetryingHttpResolver;
pub use request::FetchRequest;
pub use response::Response;
