//! Contract models shared by every entity
//!
//! Entities are plain serde structs with PascalCase JSON names. Common
//! bookkeeping (id, timestamps, bootstrap metadata and the errors/joins
//! sidecars) lives in [`RecordHeader`], which every entity flattens.

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::record::{JoinSet, Record, RecordVariant};

/// Path token that requests every declared relation
pub const JOIN_ALL: &str = "All";

/// Terminal path segment requesting only the size of a many-valued relation
pub const JOIN_COUNT: &str = "Count";

/// Sidecar message for a missing required field
pub const VALIDATION_ERROR_SPECIFIC_REQUIRED: &str = "ValidationFieldSpecificRequired";

/// Sidecar message for a malformed e-mail address
pub const VALIDATION_ERROR_SPECIFIC_EMAIL: &str = "ValidationFieldSpecificEmailRequired";

/// Keys that never reach the document store
const SIDECAR_KEYS: [&str; 4] = ["Errors", "Joins", "Views", "BootstrapMeta"];

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deployment gates and overwrite policy attached to a seed record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BootstrapMeta {
    /// Record applies only while the running version is below this one
    pub version: i64,
    #[serde(deserialize_with = "nullable")]
    pub domain: String,
    #[serde(deserialize_with = "nullable")]
    pub domains: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_name: String,
    #[serde(deserialize_with = "nullable")]
    pub product_names: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub release_mode: String,
    /// Remove the stored row instead of writing the record
    pub delete_row: bool,
    /// Overwrite the stored row even when it already exists
    pub always_update: bool,
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Fields every entity carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordHeader {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_update_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_meta: Option<BootstrapMeta>,
    #[serde(default, skip_deserializing, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(default, skip_deserializing, skip_serializing_if = "JoinSet::is_empty")]
    pub joins: JoinSet,
}

impl RecordHeader {
    /// Key fields shared by all entities
    pub fn key(&self, field: &str) -> Option<&str> {
        match field {
            "Id" => Some(&self.id),
            "LastUpdateId" => Some(&self.last_update_id),
            _ => None,
        }
    }
}

/// Computed display fields derived from the update timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeViews {
    pub update_date: String,
    pub update_from_now: String,
}

impl ChangeViews {
    pub fn render(&mut self, update_date: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        match update_date {
            Some(at) => {
                self.update_date = at.format("%Y-%m-%d %H:%M:%S").to_string();
                self.update_from_now = HumanTime::from(at - now).to_string();
            }
            None => {
                self.update_date.clear();
                self.update_from_now.clear();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.update_date.is_empty() && self.update_from_now.is_empty()
    }
}

/// Phone number as captured by the UI widgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneInfo {
    pub value: String,
    pub numeric: String,
    pub dial_code: String,
    #[serde(rename = "CountryISO")]
    pub country_iso: String,
}

/// A declared relation: the slot name in the joins sidecar and its tag.
///
/// The tag holds five comma-separated parts: target collection, target
/// type, local key field, `true`/`false` for many-valued, and the foreign
/// key field (empty for lookups by id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub tag: &'static str,
}

impl Relation {
    pub const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// Save-path validation rule for a single top-level field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub email: bool,
}

impl FieldRule {
    pub const fn required(field: &'static str) -> Self {
        Self { field, required: true, email: false }
    }

    pub const fn email(field: &'static str) -> Self {
        Self { field, required: true, email: true }
    }
}

/// A persistent entity type.
///
/// Implementations are plain data; collections, joins and bootstrap are
/// driven generically through this trait and [`Record`].
pub trait Entity:
    Serialize
    + DeserializeOwned
    + Default
    + Clone
    + std::fmt::Debug
    + PartialEq
    + Send
    + Sync
    + RecordVariant
    + Into<Record>
    + 'static
{
    /// Type name used in relation tags (e.g. `Role`)
    const TYPE_NAME: &'static str;
    /// Collection name (e.g. `Roles`)
    const COLLECTION: &'static str;
    /// Base64 JSON array applied by the bootstrap pipeline
    const SEED_PAYLOAD: &'static str = "";

    fn header(&self) -> &RecordHeader;
    fn header_mut(&mut self) -> &mut RecordHeader;

    fn relations() -> &'static [Relation] {
        &[]
    }

    fn rules() -> &'static [FieldRule] {
        &[]
    }

    /// Value of a key field used as the local side of a relation
    fn key(&self, field: &str) -> Option<&str> {
        self.header().key(field)
    }

    fn render_views(&mut self, _now: DateTime<Utc>) {}
}

/// Object-safe view of an entity used by the join engine
pub trait Joinable: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn id(&self) -> &str;
    fn declared_relations(&self) -> &'static [Relation];
    fn key_value(&self, field: &str) -> Option<&str>;
    fn joins(&self) -> &JoinSet;
    fn joins_mut(&mut self) -> &mut JoinSet;
    fn render_view_fields(&mut self, now: DateTime<Utc>);
}

impl<T: Entity> Joinable for T {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn id(&self) -> &str {
        &self.header().id
    }

    fn declared_relations(&self) -> &'static [Relation] {
        <T as Entity>::relations()
    }

    fn key_value(&self, field: &str) -> Option<&str> {
        Entity::key(self, field)
    }

    fn joins(&self) -> &JoinSet {
        &self.header().joins
    }

    fn joins_mut(&mut self) -> &mut JoinSet {
        &mut self.header_mut().joins
    }

    fn render_view_fields(&mut self, now: DateTime<Utc>) {
        Entity::render_views(self, now)
    }
}

/// Drop the non-persisted sidecars from a serialized entity
pub fn strip_sidecars(document: &mut serde_json::Value) {
    if let Some(map) = document.as_object_mut() {
        for key in SIDECAR_KEYS {
            map.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_bootstrap_meta_accepts_nulls() {
        let meta: BootstrapMeta = serde_json::from_str(
            r#"{"Version":0,"Domain":"","Domains":null,"ProductNames":null,"AlwaysUpdate":true}"#,
        )
        .unwrap();
        assert!(meta.domains.is_empty());
        assert!(meta.product_names.is_empty());
        assert!(meta.always_update);
        assert!(!meta.delete_row);
    }

    #[test]
    fn test_empty_bootstrap_meta_object() {
        let meta: BootstrapMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta, BootstrapMeta::default());
    }

    #[test]
    fn test_change_views_render() {
        let now = Utc::now();
        let mut views = ChangeViews::default();
        views.render(Some(now - Duration::hours(3)), now);
        assert!(!views.update_date.is_empty());
        assert!(views.update_from_now.contains("ago"));

        views.render(None, now);
        assert!(views.is_empty());
    }

    #[test]
    fn test_strip_sidecars() {
        let mut doc = serde_json::json!({
            "Id": "a",
            "Name": "x",
            "Errors": {},
            "Joins": {},
            "Views": {},
            "BootstrapMeta": {}
        });
        strip_sidecars(&mut doc);
        assert_eq!(doc, serde_json::json!({"Id": "a", "Name": "x"}));
    }
}
