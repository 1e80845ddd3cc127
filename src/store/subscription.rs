//! Live query handles
//!
//! A [`Subscription`] is the consumer side of a registered live query:
//! a watch channel carrying full result-set snapshots. The first `recv`
//! resolves immediately with the current snapshot; every subsequent
//! `recv` waits for a change. A slow consumer only ever observes the
//! latest snapshot, never a stale final state.

use futures::Stream;
use futures_util::StreamExt;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Removes the live query from its collection when dropped.
struct Unsubscribe {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Handle to a live query. Dropping it (or calling [`unsubscribe`])
/// releases the query; this is the only cancellation primitive.
///
/// [`unsubscribe`]: Subscription::unsubscribe
pub struct Subscription<S> {
    rx: watch::Receiver<S>,
    first: bool,
    _guard: Unsubscribe,
}

impl<S: Clone + Send + Sync + 'static> Subscription<S> {
    pub(crate) fn new(rx: watch::Receiver<S>, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            rx,
            first: true,
            _guard: Unsubscribe {
                release: Some(Box::new(release)),
            },
        }
    }

    /// Current snapshot without waiting.
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Next snapshot. Resolves immediately on the first call, then once
    /// per change. `None` when the producing collection went away.
    pub async fn recv(&mut self) -> Option<S> {
        if self.first {
            self.first = false;
            return Some(self.rx.borrow_and_update().clone());
        }
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// Consume the handle into a snapshot stream. The live query stays
    /// registered until the stream is dropped.
    pub fn into_stream(self) -> impl Stream<Item = S> + Send {
        let Subscription { rx, _guard, .. } = self;
        let guard = _guard;
        WatchStream::new(rx).map(move |snapshot| {
            let _keep_alive = &guard;
            snapshot
        })
    }

    /// Explicitly release the live query.
    pub fn unsubscribe(self) {}
}
