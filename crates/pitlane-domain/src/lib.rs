//! Pitlane domain layer
//!
//! Entities, value objects, repository contracts and error types for the
//! robot lap-timing service. This crate knows nothing about HTTP or the
//! backing document store.

pub mod entities;
pub mod error;
pub mod repositories;
pub mod value_objects;

pub use entities::{LapTime, Robot};
pub use error::{Error, Result};
pub use repositories::{Document, DocumentRepository};
pub use value_objects::{DocumentId, Role};
