//! Repository contracts over the backing document store

mod document_repository;

pub use document_repository::{Document, DocumentRepository};
