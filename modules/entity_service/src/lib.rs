//! Entity Service Module
//!
//! Typed document entities with declarative relation joins and an
//! idempotent, deployment-aware seed bootstrap that gates reads until each
//! collection is ready.

// Public exports
pub mod contract;
pub use contract::{
    client::EntityApi, error::EntityError, error::JoinError, DocumentQuery, Entity, Record,
};

pub mod module;
pub use module::EntityServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
