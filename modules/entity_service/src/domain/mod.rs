//! Domain layer - join engine, bootstrap pipeline and business logic

pub mod bootstrap;
pub mod cache;
pub mod collection;
pub mod join;
pub mod readiness;
pub mod registry;
pub mod repository;
pub mod service;
pub mod transaction;
pub mod validation;

pub use service::Service;
