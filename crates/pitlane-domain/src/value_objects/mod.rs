//! Value objects

mod document_id;
mod role;

pub use document_id::{DocumentId, ID_HEX_LEN};
pub use role::Role;
