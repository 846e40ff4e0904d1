//! Submission coalescing for interactive callers.
//!
//! A user typing produces a burst of submissions. The session collapses
//! each burst into at most one outstanding translation per debounce
//! window, and a slow response never overwrites a newer one: whichever
//! submission is newest when a result arrives is the only one that
//! reports it.

use crate::translator::{TranslateError, TranslationService};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default debounce window between a submission and its network call.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces rapid submissions against one translation service.
///
/// Shared across tasks behind an `Arc`; the generation counter is the only
/// state and needs no locking.
pub struct TranslateSession {
    service: TranslationService,
    debounce: Duration,
    generation: AtomicU64,
}

impl TranslateSession {
    pub fn new(service: TranslationService) -> Self {
        Self::with_debounce(service, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(service: TranslationService, debounce: Duration) -> Self {
        Self {
            service,
            debounce,
            generation: AtomicU64::new(0),
        }
    }

    /// Submit one edit.
    ///
    /// Returns `None` when a newer submission superseded this one, either
    /// during the debounce window or while the call was in flight. The
    /// newest submission always wins.
    pub async fn submit(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Option<Result<String, TranslateError>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            return None;
        }

        let result = self.service.translate(source, target, text).await;

        // A newer submission may have been issued while the call was in
        // flight; its result must not be overwritten by this one.
        if self.generation.load(Ordering::SeqCst) != ticket {
            return None;
        }
        Some(result)
    }
}
