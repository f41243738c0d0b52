// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Config-File Resolver (C8): loads a file by logical path through the
//! active configuration's lookup chain.
//!
//! `Content-Length` carries the actual byte count and `Content-Type` carries
//! the filesystem MIME probe.

use std::path::Path;

use crate::errors::FetchError;
use crate::fetch::response::Response;

/// The surrounding report engine's configuration surface, as consumed here.
/// A concrete filesystem-backed implementation is provided below as
/// [`ConfigFileStore`]; the surrounding system may supply its own.
pub trait Configuration: Send + Sync {
    fn load(&self, uri: &str) -> anyhow::Result<Vec<u8>>;
    fn locate(&self, uri: &str) -> Option<std::path::PathBuf>;
}

/// Resolve a `file:`/`classpath:`/`servlet:`/schemeless URI via `config`.
pub fn resolve(uri: &str, config: &dyn Configuration) -> Result<Response, FetchError> {
    let bytes = config
        .load(uri)
        .map_err(|cause| FetchError::ConfigFileLoadFailed {
            uri: uri.to_string(),
            cause,
        })?;

    let mut response = Response::synthetic_ok(bytes.clone())
        .with_header("Content-Length", bytes.len().to_string());

    if let Some(path) = config.locate(uri) {
        let media_type = mime_guess::from_path(&path).first_or_octet_stream();
        response = response.with_header("Content-Type", media_type.to_string());
    }

    Ok(response)
}

/// A [`Configuration`] backed by a single filesystem root. `load`/`locate`
/// both accept the full URI string; the `file:`/empty-scheme prefix (and any
/// leading `/`) is stripped before joining onto the root.
pub struct ConfigFileStore {
    root: std::path::PathBuf,
}

impl ConfigFileStore {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve_path(&self, uri: &str) -> std::path::PathBuf {
        let relative = uri
            .strip_prefix("file://")
            .or_else(|| uri.strip_prefix("file:"))
            .or_else(|| uri.strip_prefix("classpath:"))
            .or_else(|| uri.strip_prefix("servlet:"))
            .unwrap_or(uri);
        let relative = relative.trim_start_matches('/');
        self.root.join(relative)
    }
}

impl Configuration for ConfigFileStore {
    fn load(&self, uri: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.resolve_path(uri);
        std::fs::read(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
    }

    fn locate(&self, uri: &str) -> Option<std::path::PathBuf> {
        let path = self.resolve_path(uri);
        if Path::new(&path).exists() {
            Some(path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_file_and_sets_corrected_headers() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("foo.txt"), b"hello world").unwrap();
        let store = ConfigFileStore::new(dir.path());

        let response = resolve("file:///foo.txt", &store).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_ref(), b"hello world");
        assert_eq!(response.headers.get("Content-Length").unwrap(), "11");
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    }

    #[test]
    fn missing_file_surfaces_load_failure() {
        let dir = tempdir().unwrap();
        let store = ConfigFileStore::new(dir.path());

        let err = resolve("file:///missing.txt", &store).unwrap_err();
        assert!(matches!(err, FetchError::ConfigFileLoadFailed { .. }));
    }
}
