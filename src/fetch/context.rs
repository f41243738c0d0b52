// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Context Propagator (C10): diagnostic-context save/swap/restore around a
//! fetch. The concurrency model here is worker threads, so the live context
//! is thread-local rather than task-local; either satisfies the
//! save/swap/restore contract.
//!
//! The snapshot is installed only when it differs from the caller's current
//! context, rather than swapping unconditionally on every entry.

use std::cell::RefCell;
use std::collections::HashMap;

/// A process-wide keyed string map attached to the calling thread.
pub type DiagnosticContext = HashMap<String, String>;

pub const JOB_ID_KEY: &str = "jobId";
pub const APPLICATION_ID_KEY: &str = "applicationId";

thread_local! {
    static CURRENT: RefCell<DiagnosticContext> = RefCell::new(DiagnosticContext::new());
}

/// The diagnostic context currently visible on this thread.
pub fn current() -> DiagnosticContext {
    CURRENT.with(|c| c.borrow().clone())
}

/// Captures a diagnostic-context snapshot at creation time and hands out
/// scoped guards that install it around a fetch.
pub struct ContextFactory {
    snapshot: DiagnosticContext,
}

impl ContextFactory {
    /// Capture the calling thread's current context as this factory's snapshot.
    pub fn capture() -> Self {
        Self {
            snapshot: current(),
        }
    }

    pub fn from_snapshot(snapshot: DiagnosticContext) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &DiagnosticContext {
        &self.snapshot
    }

    /// Enter a scope: save the caller's current context, install the
    /// captured snapshot iff it differs, and restore the caller's context
    /// when the returned guard drops (including on an early return via `?`).
    pub fn enter(&self) -> ContextGuard {
        ContextGuard::enter(&self.snapshot)
    }
}

/// RAII guard restoring the pre-entry diagnostic context on drop. Never
/// mutates the caller's original map — it holds an owned clone, not a
/// reference, so the caller's map is unaffected regardless of what happens
/// inside the scope.
pub struct ContextGuard {
    previous: DiagnosticContext,
}

impl ContextGuard {
    fn enter(snapshot: &DiagnosticContext) -> Self {
        let previous = current();
        if &previous != snapshot {
            CURRENT.with(|c| *c.borrow_mut() = snapshot.clone());
        }
        Self { previous }
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT.with(|c| *c.borrow_mut() = self.previous.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_caller_context_on_drop() {
        CURRENT.with(|c| c.borrow_mut().insert("caller".to_string(), "1".to_string()));
        let before = current();

        let factory = ContextFactory::from_snapshot(DiagnosticContext::from([(
            "jobId".to_string(),
            "abc".to_string(),
        )]));

        {
            let _guard = factory.enter();
            assert_eq!(current().get("jobId"), Some(&"abc".to_string()));
        }

        assert_eq!(current(), before);
    }

    #[test]
    fn restores_even_when_scope_panics_via_early_return() {
        CURRENT.with(|c| c.borrow_mut().clear());
        let before = current();
        let factory = ContextFactory::from_snapshot(DiagnosticContext::from([(
            "jobId".to_string(),
            "xyz".to_string(),
        )]));

        let result: Result<(), &'static str> = (|| {
            let _guard = factory.enter();
            Err("boom")
        })();

        assert!(result.is_err());
        assert_eq!(current(), before);
    }

    #[test]
    fn does_not_swap_when_snapshot_equals_current() {
        CURRENT.with(|c| {
            c.borrow_mut().clear();
            c.borrow_mut()
                .insert("jobId".to_string(), "same".to_string());
        });
        let snapshot = current();
        let factory = ContextFactory::from_snapshot(snapshot.clone());

        let _guard = factory.enter();
        assert_eq!(current(), snapshot);
    }
}
