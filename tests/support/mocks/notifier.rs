// tests/support/mocks/notifier.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use newsdesk_core::application::ports::social::SocialNotifier;
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::news::NewsItem;

/// Counts publish calls; optionally fails every one of them.
#[derive(Default)]
pub struct CountingNotifier {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingNotifier {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocialNotifier for CountingNotifier {
    async fn publish(&self, _item: &NewsItem) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(DomainError::Persistence("social endpoint unreachable".into()))
        } else {
            Ok(())
        }
    }
}
