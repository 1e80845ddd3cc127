//! Typed document collections
//!
//! In-memory stand-in for the managed document backend. Each
//! [`Collection`] owns one document type and provides what the rest of
//! the crate relies on: server-assigned ids and creation timestamps,
//! equality-filtered sorted queries, per-document atomic
//! read-modify-write, and push-based live queries delivering the full
//! current result set on every change.
//!
//! Ordering inside a result set is decided by the caller's comparator;
//! ties always fall back to insertion order, so two documents stamped in
//! the same millisecond still come back in a stable order.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use super::error::{Result, StoreError};
use super::subscription::Subscription;

type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type Compare<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
type View<T> = Arc<dyn Fn(Vec<T>) -> Vec<T> + Send + Sync>;

/// Document plus the insertion sequence number used for tie-breaks.
struct Stored<T> {
    doc: T,
    seq: u64,
}

/// A registered live query: re-evaluated on every mutation.
struct LiveQuery<T> {
    filter: Filter<T>,
    cmp: Compare<T>,
    view: Option<View<T>>,
    tx: watch::Sender<Vec<T>>,
}

pub struct Collection<T> {
    name: &'static str,
    docs: DashMap<String, Stored<T>>,
    seq: AtomicU64,
    watchers: Arc<DashMap<u64, LiveQuery<T>>>,
    watcher_ids: AtomicU64,
    // Serializes compound lookup-then-insert paths; plain inserts and
    // per-document updates do not take it.
    creation: Mutex<()>,
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: DashMap::new(),
            seq: AtomicU64::new(0),
            watchers: Arc::new(DashMap::new()),
            watcher_ids: AtomicU64::new(0),
            creation: Mutex::new(()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Insert a new document. The collection assigns the id and the
    /// creation timestamp; `make` builds the document from them.
    pub fn insert_with<F>(&self, make: F) -> T
    where
        F: FnOnce(String, DateTime<Utc>) -> T,
    {
        let doc = self.insert_inner(make);
        self.notify();
        doc
    }

    fn insert_inner<F>(&self, make: F) -> T
    where
        F: FnOnce(String, DateTime<Utc>) -> T,
    {
        let id = Uuid::new_v4().to_string();
        let doc = make(id.clone(), Utc::now());
        let seq = self.seq.fetch_add(1, AtomicOrdering::Relaxed);
        debug!(collection = self.name, id = %id, "Document inserted");
        self.docs.insert(
            id,
            Stored {
                doc: doc.clone(),
                seq,
            },
        );
        doc
    }

    /// First document matching `pred`, or insert a new one built by
    /// `make`. Lookup and insert happen under the collection's creation
    /// lock, so two concurrent callers resolve to the same document.
    pub fn get_or_insert_matching<P, F>(&self, pred: P, make: F) -> T
    where
        P: Fn(&T) -> bool,
        F: FnOnce(String, DateTime<Utc>) -> T,
    {
        let doc;
        {
            let _creation = self
                .creation
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(existing) = self.find_first(&pred) {
                return existing;
            }
            doc = self.insert_inner(make);
        }
        self.notify();
        doc
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.docs.get(id).map(|entry| entry.doc.clone())
    }

    /// Atomic read-modify-write on one document. The entry stays locked
    /// for the duration of `apply`, which is how numeric increments stay
    /// race-free.
    pub fn update<F>(&self, id: &str, apply: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let updated = {
            let mut entry = self.docs.get_mut(id).ok_or(StoreError::NotFound)?;
            apply(&mut entry.doc);
            entry.doc.clone()
        };
        self.notify();
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        self.docs.remove(id).ok_or(StoreError::NotFound)?;
        self.notify();
        Ok(())
    }

    /// Oldest matching document (insertion order), if any.
    pub fn find_first<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.docs
            .iter()
            .filter(|entry| pred(&entry.doc))
            .min_by_key(|entry| entry.seq)
            .map(|entry| entry.doc.clone())
    }

    /// All matching documents, sorted by `cmp` with insertion order as
    /// the tie-break.
    pub fn query<P, C>(&self, pred: P, cmp: C) -> Vec<T>
    where
        P: Fn(&T) -> bool,
        C: Fn(&T, &T) -> Ordering,
    {
        self.run(&pred, &cmp, None)
    }

    /// Register a live query. The returned subscription fires once
    /// immediately with the current snapshot, then on every mutation of
    /// the collection.
    pub fn watch<P, C>(&self, pred: P, cmp: C) -> Subscription<Vec<T>>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.watch_inner(Arc::new(pred), Arc::new(cmp), None)
    }

    /// Like [`watch`], with a post-processing step applied to every
    /// snapshot before delivery (e.g. collapsing duplicates).
    ///
    /// [`watch`]: Collection::watch
    pub fn watch_view<P, C, V>(&self, pred: P, cmp: C, view: V) -> Subscription<Vec<T>>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        V: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.watch_inner(Arc::new(pred), Arc::new(cmp), Some(Arc::new(view)))
    }

    fn watch_inner(
        &self,
        filter: Filter<T>,
        cmp: Compare<T>,
        view: Option<View<T>>,
    ) -> Subscription<Vec<T>> {
        let snapshot = self.run(&*filter, &*cmp, view.as_deref());
        let (tx, rx) = watch::channel(snapshot);
        let id = self.watcher_ids.fetch_add(1, AtomicOrdering::Relaxed);
        info!(collection = self.name, "Live query registered");
        self.watchers.insert(
            id,
            LiveQuery {
                filter,
                cmp,
                view,
                tx,
            },
        );
        let watchers = Arc::clone(&self.watchers);
        Subscription::new(rx, move || {
            watchers.remove(&id);
        })
    }

    fn run(
        &self,
        filter: &dyn Fn(&T) -> bool,
        cmp: &dyn Fn(&T, &T) -> Ordering,
        view: Option<&(dyn Fn(Vec<T>) -> Vec<T> + Send + Sync)>,
    ) -> Vec<T> {
        let mut rows: Vec<(u64, T)> = self
            .docs
            .iter()
            .filter(|entry| filter(&entry.doc))
            .map(|entry| (entry.seq, entry.doc.clone()))
            .collect();
        rows.sort_by(|a, b| cmp(&a.1, &b.1).then(a.0.cmp(&b.0)));
        let snapshot: Vec<T> = rows.into_iter().map(|(_, doc)| doc).collect();
        match view {
            Some(view) => view(snapshot),
            None => snapshot,
        }
    }

    /// Re-evaluate every registered live query. Queries whose receivers
    /// are all gone get dropped here, same cleanup as a dead broadcast
    /// channel.
    fn notify(&self) {
        let mut dead = Vec::new();
        for entry in self.watchers.iter() {
            let q = entry.value();
            let snapshot = self.run(&*q.filter, &*q.cmp, q.view.as_deref());
            if q.tx.send(snapshot).is_err() {
                dead.push(*entry.key());
            }
        }
        for id in dead {
            // No one left listening, drop the query.
            debug!(collection = self.name, "Removing dead live query");
            self.watchers.remove(&id);
        }
    }
}
