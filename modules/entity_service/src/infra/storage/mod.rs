//! Storage layer - document stores behind the `DocumentStore` trait

pub mod entity;
pub mod memory;
pub mod migrations;
pub mod repositories;

pub use memory::InMemoryDocumentStore;
pub use repositories::SeaOrmDocumentStore;
