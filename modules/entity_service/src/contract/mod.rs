//! Contract layer - public API for inter-module communication
//!
//! Entity models, the closed `Record` sum type, transport-agnostic errors
//! and the native client trait.

pub mod client;
pub mod entities;
pub mod error;
pub mod model;
pub mod query;
pub mod record;
pub mod seeds;

pub use client::EntityApi;
pub use error::{EntityError, JoinError};
pub use model::{
    BootstrapMeta, ChangeViews, Entity, FieldErrors, FieldRule, Joinable, PhoneInfo,
    RecordHeader, Relation, JOIN_ALL, JOIN_COUNT,
};
pub use query::{DocumentQuery, RangeCondition, SortKey};
pub use record::{JoinItems, JoinSet, Joined, Record, RecordVariant};
