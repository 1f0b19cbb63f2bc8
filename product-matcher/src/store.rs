//! Shared in-memory catalog with atomic snapshot swaps.
//!
//! Matching never holds the lock: readers clone an [`Arc`] to the current
//! snapshot and score against that, so an upload landing mid-request swaps
//! the pointer without tearing anyone's view of the catalog.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::model::{CatalogSnapshot, Product};

/// Process-wide catalog holder. Each upload replaces the whole catalog,
/// it never merges into the previous one.
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::empty())),
        }
    }

    /// Swap in a freshly normalized catalog. Returns the tier sizes that
    /// were accepted, for the upload acknowledgement.
    pub async fn replace(&self, visible: Vec<Product>, full: Vec<Product>) -> (usize, usize) {
        let counts = (visible.len(), full.len());
        let snapshot = Arc::new(CatalogSnapshot {
            visible,
            full,
            uploaded_at: Utc::now(),
        });
        *self.current.write().await = snapshot;
        info!(
            visible = counts.0,
            full = counts.1,
            "catalog replaced"
        );
        counts
    }

    /// Cheap pointer clone of the current catalog.
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&*self.current.read().await)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(title: &str) -> Product {
        Product {
            title: title.to_string(),
            color: "pink".to_string(),
            image: Some(format!("https://c.ai/{title}.jpg")),
            link: "#".to_string(),
        }
    }

    #[tokio::test]
    async fn replace_discards_the_previous_catalog() {
        let store = CatalogStore::new();
        store.replace(vec![named("A")], Vec::new()).await;
        store.replace(vec![named("B")], vec![named("C")]).await;

        let snap = store.snapshot().await;
        assert_eq!(snap.visible.len(), 1);
        assert_eq!(snap.visible[0].title, "B");
        assert_eq!(snap.full[0].title, "C");
    }

    #[tokio::test]
    async fn snapshots_are_isolated_from_later_uploads() {
        let store = CatalogStore::new();
        store.replace(vec![named("old")], Vec::new()).await;

        let before = store.snapshot().await;
        store.replace(vec![named("new")], Vec::new()).await;

        assert_eq!(before.visible[0].title, "old");
        assert_eq!(store.snapshot().await.visible[0].title, "new");
    }

    #[tokio::test]
    async fn new_store_starts_empty() {
        let snap = CatalogStore::new().snapshot().await;
        assert!(snap.visible.is_empty());
        assert!(snap.full.is_empty());
    }
}
