//! Generic document repository port
//!
//! One interface over the store's collection operations, parametrized over
//! the document type so a single adapter serves every entity.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::DocumentId;

/// A value persisted as a single document in a collection
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier assigned by the store, if the document has been inserted
    fn id(&self) -> Option<&str>;

    /// Bind the document to an identifier
    fn set_id(&mut self, id: String);
}

/// Repository: collection-level persistence operations
///
/// All mutations act on whole documents. `replace_one` overwrites the stored
/// document addressed by the value's own id; there is no partial update and
/// no compare-and-swap, so read-modify-write callers are last-writer-wins.
///
/// # Example
///
/// ```ignore
/// use pitlane_domain::{DocumentRepository, Robot};
///
/// let created = repo.insert_one(robot).await?;
/// let found = repo.find_by_id(&id).await?;
/// repo.delete_by_id(&id).await?;
/// ```
#[async_trait]
pub trait DocumentRepository<T: Document>: Send + Sync {
    /// Every document in the collection
    async fn list_all(&self) -> Result<Vec<T>>;

    /// Find a document by id
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<T>>;

    /// Whether a document with this id exists
    async fn exists(&self, id: &DocumentId) -> Result<bool>;

    /// Insert a new document; the store assigns its id
    async fn insert_one(&self, document: T) -> Result<T>;

    /// Replace the stored document carrying the same id
    async fn replace_one(&self, document: T) -> Result<T>;

    /// Delete the document with this id
    async fn delete_by_id(&self, id: &DocumentId) -> Result<()>;
}
