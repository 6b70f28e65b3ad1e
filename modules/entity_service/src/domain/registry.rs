//! Entity registry: type and collection names to typed constructors
//!
//! Populated once at start from the closed set of entity types. Tests may
//! register entities with replacement seed payloads.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use crate::contract::entities::{
    Account, AccountRole, ActivityLog, AppError, Country, Feature, FeatureGroup, FileObject,
    Password, PasswordReset, Role, RoleFeature, ServerSetting, State, User,
};
use crate::contract::{Entity, EntityError, Record};

type DecodeFn = fn(Value) -> serde_json::Result<Record>;
type SeedDecodeFn = fn(&[u8]) -> serde_json::Result<Vec<Record>>;
type FactoryFn = fn() -> Record;

fn decode_one<T: Entity>(value: Value) -> serde_json::Result<Record> {
    serde_json::from_value::<T>(value).map(Into::into)
}

fn decode_many<T: Entity>(bytes: &[u8]) -> serde_json::Result<Vec<Record>> {
    let rows: Vec<T> = serde_json::from_slice(bytes)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

fn zero<T: Entity>() -> Record {
    T::default().into()
}

/// Everything needed to work with one entity type by name
#[derive(Clone)]
pub struct Registration {
    pub type_name: &'static str,
    pub collection: &'static str,
    seed_payload: Cow<'static, str>,
    decode: DecodeFn,
    decode_seed: SeedDecodeFn,
    factory: FactoryFn,
}

impl Registration {
    pub fn of<T: Entity>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            collection: T::COLLECTION,
            seed_payload: Cow::Borrowed(T::SEED_PAYLOAD),
            decode: decode_one::<T>,
            decode_seed: decode_many::<T>,
            factory: zero::<T>,
        }
    }

    /// Replace the embedded base64 seed payload
    pub fn with_seed_payload(mut self, payload: impl Into<String>) -> Self {
        self.seed_payload = Cow::Owned(payload.into());
        self
    }

    pub fn seed_payload(&self) -> &str {
        &self.seed_payload
    }

    /// Seed directory name: collection name with a lowercase first letter
    pub fn seed_dir_name(&self) -> String {
        let mut chars = self.collection.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn decode(&self, document: Value) -> Result<Record, EntityError> {
        (self.decode)(document).map_err(|e| EntityError::Decode {
            collection: self.collection.to_string(),
            message: e.to_string(),
        })
    }

    /// Decode a JSON array of seed rows
    pub fn decode_seed(&self, bytes: &[u8]) -> serde_json::Result<Vec<Record>> {
        (self.decode_seed)(bytes)
    }

    pub fn new_record(&self) -> Record {
        (self.factory)()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("type_name", &self.type_name)
            .field("collection", &self.collection)
            .field("seed_payload_len", &self.seed_payload.len())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct EntityRegistry {
    entries: Vec<Registration>,
    by_type: HashMap<&'static str, usize>,
    by_collection: HashMap<&'static str, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in entity
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for registration in [
            Registration::of::<Account>(),
            Registration::of::<AccountRole>(),
            Registration::of::<ActivityLog>(),
            Registration::of::<AppError>(),
            Registration::of::<Country>(),
            Registration::of::<Feature>(),
            Registration::of::<FeatureGroup>(),
            Registration::of::<FileObject>(),
            Registration::of::<Password>(),
            Registration::of::<PasswordReset>(),
            Registration::of::<Role>(),
            Registration::of::<RoleFeature>(),
            Registration::of::<ServerSetting>(),
            Registration::of::<State>(),
            Registration::of::<User>(),
        ] {
            registry.register(registration);
        }
        registry
    }

    /// Add or replace the registration for a collection
    pub fn register(&mut self, registration: Registration) {
        if let Some(&index) = self.by_collection.get(registration.collection) {
            self.by_type.remove(self.entries[index].type_name);
            self.by_type.insert(registration.type_name, index);
            self.entries[index] = registration;
            return;
        }
        let index = self.entries.len();
        self.by_type.insert(registration.type_name, index);
        self.by_collection.insert(registration.collection, index);
        self.entries.push(registration);
    }

    /// Zero-valued instance of a type, `None` for unknown names
    pub fn resolve_entity(&self, type_name: &str) -> Option<Record> {
        self.by_type
            .get(type_name)
            .map(|&index| self.entries[index].new_record())
    }

    pub fn by_type(&self, type_name: &str) -> Option<&Registration> {
        self.by_type.get(type_name).map(|&index| &self.entries[index])
    }

    pub fn by_collection(&self, collection: &str) -> Result<&Registration, EntityError> {
        self.by_collection
            .get(collection)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| EntityError::UnknownCollection(collection.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
