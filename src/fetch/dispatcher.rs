// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! URI Dispatcher (C6): routes a request to one of {data, file, http}
//! resolvers based on URI scheme. Dispatch is exhaustive — anything that
//! isn't a recognized local scheme falls through to the HTTP resolver,
//! which delegates to the real transport.

use tokio_util::sync::CancellationToken;

use crate::errors::FetchError;
use crate::fetch::config_file::{self, Configuration};
use crate::fetch::context::DiagnosticContext;
use crate::fetch::data_uri;
use crate::fetch::http::RetryingHttpResolver;
use crate::fetch::request::FetchRequest;
use crate::fetch::response::Response;

const LOCAL_SCHEMES: &[&str] = &["file", "classpath", "servlet"];

fn scheme_of(uri: &str) -> Option<&str> {
    uri.split_once(':').map(|(scheme, _)| scheme)
}

/// Dispatch `request` to the resolver its URI scheme names.
pub async fn dispatch(
    request: FetchRequest,
    config: &dyn Configuration,
    http: &RetryingHttpResolver,
    context: &DiagnosticContext,
    cancel: &CancellationToken,
) -> Result<Response, FetchError> {
    match scheme_of(&request.uri) {
        Some("data") => data_uri::resolve(&request.uri),
        Some(scheme) if LOCAL_SCHEMES.contains(&scheme) => {
            config_file::resolve(&request.uri, config)
        }
        None => config_file::resolve(&request.uri, config),
        Some(_) => http.resolve(request, context, cancel).await,
    }
}
