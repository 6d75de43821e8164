//! Storage collaborators the engine reads from and writes through

mod documents;
mod entities;

pub use documents::{select_documents, DocumentStore, InMemoryDocumentStore, JsonDocumentStore};
pub use entities::{EntityStore, InMemoryEntityStore};
