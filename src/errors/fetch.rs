// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Failures raised by the URI dispatcher and its resolvers (C6-C9).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("retry exhausted for {uri}: final status {status}")]
    RetryExhausted5xx { uri: String, status: u16 },

    #[error("retry exhausted for {uri}: {cause}")]
    RetryExhaustedTransport {
        uri: String,
        #[source]
        cause: reqwest::Error,
    },

    #[error("retry sleep was interrupted")]
    InterruptedDuringRetry,

    #[error("malformed data: URI: {0}")]
    DataUriMalformed(String),

    #[error("failed to read response body for {uri}: {cause}")]
    ResponseBodyReadFailed {
        uri: String,
        #[source]
        cause: reqwest::Error,
    },

    #[error("failed to load config-file resource {uri}: {cause}")]
    ConfigFileLoadFailed {
        uri: String,
        #[source]
        cause: anyhow::Error,
    },
}
