//! In-memory document collection
//!
//! Stand-in for a real document store driver behind the
//! [`DocumentRepository`] port. Ids are assigned on insert in the store's
//! native 24-hex form; `list_all` preserves insertion order.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use pitlane_domain::error::{Error, Result};
use pitlane_domain::{Document, DocumentId, DocumentRepository};

/// In-memory collection of documents, keyed by id
pub struct InMemoryCollection<T> {
    // The sequence number orders list_all by insertion.
    documents: DashMap<String, (u64, T)>,
    next_seq: AtomicU64,
}

impl<T> InMemoryCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> DocumentRepository<T> for InMemoryCollection<T> {
    async fn list_all(&self) -> Result<Vec<T>> {
        let mut entries: Vec<(u64, T)> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, document)| document).collect())
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<T>> {
        Ok(self
            .documents
            .get(id.as_str())
            .map(|entry| entry.value().1.clone()))
    }

    async fn exists(&self, id: &DocumentId) -> Result<bool> {
        Ok(self.documents.contains_key(id.as_str()))
    }

    async fn insert_one(&self, mut document: T) -> Result<T> {
        let id = DocumentId::generate();
        document.set_id(id.to_string());
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.documents
            .insert(id.to_string(), (seq, document.clone()));
        Ok(document)
    }

    async fn replace_one(&self, document: T) -> Result<T> {
        let id = document
            .id()
            .ok_or_else(|| Error::invalid_argument("document has no id to replace by"))?
            .to_string();
        let mut entry = self
            .documents
            .get_mut(&id)
            .ok_or_else(|| Error::database(format!("no document with id {id} to replace")))?;
        entry.value_mut().1 = document.clone();
        Ok(document)
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<()> {
        self.documents
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| Error::database(format!("no document with id {id} to delete")))
    }
}
