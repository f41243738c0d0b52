// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Data-URI Resolver (C7): decodes an inline `data:[<mime>][;base64],<payload>`
//! URI into a synthetic response. No retry — there's no transport to fail.
//!
//! Parsed directly over the raw URI string: the payload after the comma is
//! not a legal URL authority/path, so running it through a generic URL
//! parser would mangle it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use percent_encoding::percent_decode_str;

use crate::errors::FetchError;
use crate::fetch::response::Response;

const DEFAULT_MEDIA_TYPE: &str = "text/plain;charset=US-ASCII";

/// Resolve a `data:` URI. `uri` must include the `data:` scheme prefix.
pub fn resolve(uri: &str) -> Result<Response, FetchError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| FetchError::DataUriMalformed(uri.to_string()))?;

    let comma = rest
        .find(',')
        .ok_or_else(|| FetchError::DataUriMalformed(uri.to_string()))?;
    let (meta, payload) = rest.split_at(comma);
    let payload = &payload[1..]; // drop the comma

    let is_base64 = meta.split(';').any(|part| part.eq_ignore_ascii_case("base64"));
    let media_type = meta
        .split(';')
        .find(|part| !part.eq_ignore_ascii_case("base64"))
        .filter(|part| !part.is_empty())
        .unwrap_or(DEFAULT_MEDIA_TYPE);

    let body = if is_base64 {
        BASE64
            .decode(payload)
            .map_err(|e| FetchError::DataUriMalformed(format!("bad base64 payload: {e}")))?
    } else {
        percent_decode_str(payload).collect()
    };

    Ok(Response::synthetic_ok(body).with_header("Content-Type", media_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_payload() {
        let response = resolve("data:text/plain;base64,SGk=").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_ref(), b"Hi");
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    }

    #[test]
    fn decodes_percent_encoded_payload() {
        let response = resolve("data:text/html,%3Cp%3Ex%3C%2Fp%3E").unwrap();
        assert_eq!(response.body.as_ref(), b"<p>x</p>");
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/html");
    }

    #[test]
    fn defaults_media_type_when_absent() {
        let response = resolve("data:,hello").unwrap();
        assert_eq!(
            response.headers.get("Content-Type").unwrap(),
            DEFAULT_MEDIA_TYPE
        );
        assert_eq!(response.body.as_ref(), b"hello");
    }

    #[test]
    fn rejects_uri_without_comma() {
        let err = resolve("data:text/plain;base64").unwrap_err();
        assert!(matches!(err, FetchError::DataUriMalformed(_)));
    }
}
