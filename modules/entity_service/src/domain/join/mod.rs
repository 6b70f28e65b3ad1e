//! Declarative relation hydration
//!
//! Relations are declared per entity as five-part tags. A dot-separated
//! path (`Account.Country`, `RoleFeatures.Count`, `All`) selects which
//! relations to fetch; fetched records are hydrated recursively within a
//! recursion budget.

mod descriptor;
mod query;
mod resolver;

pub use descriptor::{descriptors_for, JoinDescriptor};
pub use query::{Projection, QueryContext};
pub use resolver::JoinResolver;
