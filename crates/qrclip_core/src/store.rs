//! In-memory clipboard store shared by HTTP handlers.

use crate::error::AppError;
use crate::models::Clip;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Entry {
    clip: Clip,
    seq: u64,
}

struct Inner {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

/// Process-wide mapping from clip identifier to most-recently-submitted text.
///
/// Constructed once at startup and shared by reference through the server
/// state. Every operation takes the lock exactly once, so individual
/// puts, deletes, and clears are atomic with respect to each other;
/// concurrent writers to the same identifier race and the last write wins.
/// Listing order is most-recent-first by last update.
pub struct ClipboardStore {
    inner: RwLock<Inner>,
}

impl Default for ClipboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite the text stored under `id`.
    ///
    /// Overwriting replaces the previous text; nothing accumulates. The
    /// entry's `created_at` survives overwrites, `updated_at` does not.
    ///
    /// # Returns
    /// The stored [`Clip`] after the write.
    pub fn put(&self, id: &str, text: &str) -> Clip {
        let now = Utc::now();
        let mut inner = self.write();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let entry = inner
            .entries
            .entry(id.to_string())
            .and_modify(|existing| {
                existing.clip.text = text.to_string();
                existing.clip.updated_at = now;
                existing.seq = seq;
            })
            .or_insert_with(|| Entry {
                clip: Clip {
                    id: id.to_string(),
                    text: text.to_string(),
                    created_at: now,
                    updated_at: now,
                },
                seq,
            });
        tracing::debug!(id, bytes = entry.clip.text.len(), "stored clip");
        entry.clip.clone()
    }

    /// Fetch the clip stored under `id`, if any.
    pub fn get(&self, id: &str) -> Option<Clip> {
        self.read().entries.get(id).map(|entry| entry.clip.clone())
    }

    /// List all current clips, most recently updated first.
    pub fn list(&self) -> Vec<Clip> {
        let inner = self.read();
        let mut rows: Vec<(u64, Clip)> = inner
            .entries
            .values()
            .map(|entry| (entry.seq, entry.clip.clone()))
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows.into_iter().map(|(_, clip)| clip).collect()
    }

    /// Remove the clip stored under `id`.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no such entry exists.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.write().entries.remove(id).is_some() {
            tracing::debug!(id, "deleted clip");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    /// Remove all entries unconditionally.
    pub fn clear(&self) {
        let mut inner = self.write();
        let removed = inner.entries.len();
        inner.entries.clear();
        tracing::debug!(removed, "cleared clipboard store");
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_before_any_put_is_absent() {
        let store = ClipboardStore::new();
        assert!(store.get("never-written").is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = ClipboardStore::new();
        store.put("abc", "hello world");
        let clip = store.get("abc").expect("clip should exist");
        assert_eq!(clip.text, "hello world");
        assert_eq!(clip.id, "abc");
    }

    #[test]
    fn second_put_overwrites_without_accumulating() {
        let store = ClipboardStore::new();
        let first = store.put("abc", "first");
        let second = store.put("abc", "second");
        assert_eq!(store.get("abc").expect("clip").text, "second");
        assert_eq!(store.len(), 1);
        assert_eq!(first.created_at, second.created_at);
    }

    #[test]
    fn delete_removes_entry_and_missing_delete_is_not_found() {
        let store = ClipboardStore::new();
        store.put("abc", "payload");
        store.delete("abc").expect("delete existing");
        assert!(store.get("abc").is_none());

        let err = store.delete("abc").expect_err("second delete should fail");
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn clear_empties_store_and_put_still_works_afterwards() {
        let store = ClipboardStore::new();
        store.put("a", "1");
        store.put("b", "2");
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());

        store.put("c", "3");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("c").expect("clip").text, "3");
    }

    #[test]
    fn list_orders_most_recently_updated_first() {
        let store = ClipboardStore::new();
        store.put("a", "1");
        store.put("b", "2");
        store.put("c", "3");
        // Updating an older entry moves it to the front.
        store.put("a", "1-updated");

        let ids: Vec<String> = store.list().into_iter().map(|clip| clip.id).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn interleaved_writers_leave_a_single_winning_value() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(ClipboardStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        store.put("shared", &format!("writer-{}-{}", n, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        assert_eq!(store.len(), 1);
        let text = store.get("shared").expect("clip").text;
        assert!(text.starts_with("writer-"));
    }
}
