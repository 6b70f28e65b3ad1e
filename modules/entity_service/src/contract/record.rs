//! Closed sum type over every entity, plus the joins sidecar containers

use serde::Serialize;
use std::collections::BTreeMap;

use super::entities::{
    Account, AccountRole, ActivityLog, AppError, Country, Feature, FeatureGroup, FileObject,
    Password, PasswordReset, Role, RoleFeature, ServerSetting, State, User,
};
use super::model::{strip_sidecars, Entity, FieldRule, Joinable, RecordHeader};

/// Typed extraction of an entity out of a [`Record`]
pub trait RecordVariant: Sized {
    fn from_record(record: Record) -> Option<Self>;
    fn from_record_ref(record: &Record) -> Option<&Self>;
}

macro_rules! records {
    ($($variant:ident),+ $(,)?) => {
        /// Any entity, serialized as the entity's own JSON
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Record {
            $($variant($variant),)+
        }

        impl Record {
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Record::$variant(_) => <$variant as Entity>::TYPE_NAME,)+
                }
            }

            pub fn collection(&self) -> &'static str {
                match self {
                    $(Record::$variant(_) => <$variant as Entity>::COLLECTION,)+
                }
            }

            pub fn header(&self) -> &RecordHeader {
                match self {
                    $(Record::$variant(e) => e.header(),)+
                }
            }

            pub fn header_mut(&mut self) -> &mut RecordHeader {
                match self {
                    $(Record::$variant(e) => e.header_mut(),)+
                }
            }

            pub fn rules(&self) -> &'static [FieldRule] {
                match self {
                    $(Record::$variant(_) => <$variant as Entity>::rules(),)+
                }
            }

            pub fn as_joinable(&self) -> &dyn Joinable {
                match self {
                    $(Record::$variant(e) => e as &dyn Joinable,)+
                }
            }

            pub fn as_joinable_mut(&mut self) -> &mut dyn Joinable {
                match self {
                    $(Record::$variant(e) => e as &mut dyn Joinable,)+
                }
            }
        }

        $(
            impl From<$variant> for Record {
                fn from(value: $variant) -> Self {
                    Record::$variant(value)
                }
            }

            impl RecordVariant for $variant {
                fn from_record(record: Record) -> Option<Self> {
                    match record {
                        Record::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                fn from_record_ref(record: &Record) -> Option<&Self> {
                    match record {
                        Record::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )+
    };
}

records!(
    Account,
    AccountRole,
    ActivityLog,
    AppError,
    Country,
    Feature,
    FeatureGroup,
    FileObject,
    Password,
    PasswordReset,
    Role,
    RoleFeature,
    ServerSetting,
    State,
    User,
);

impl Record {
    pub fn id(&self) -> &str {
        &self.header().id
    }

    pub fn downcast<T: RecordVariant>(self) -> Option<T> {
        T::from_record(self)
    }

    pub fn downcast_ref<T: RecordVariant>(&self) -> Option<&T> {
        T::from_record_ref(self)
    }

    /// JSON body as persisted: sidecars and bootstrap metadata removed
    pub fn to_document(&self) -> serde_json::Result<serde_json::Value> {
        let mut document = serde_json::to_value(self)?;
        strip_sidecars(&mut document);
        Ok(document)
    }
}

/// Many-valued join result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinItems {
    pub count: usize,
    /// `None` for count-only requests
    pub items: Option<Vec<Record>>,
}

impl JoinItems {
    pub fn counted(count: usize) -> Self {
        Self { count, items: None }
    }

    pub fn from_items(items: Vec<Record>) -> Self {
        Self { count: items.len(), items: Some(items) }
    }

    pub fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }

    /// Items of one entity type; rows of other types are skipped
    pub fn items_as<T: RecordVariant>(&self) -> Vec<&T> {
        self.items
            .iter()
            .flatten()
            .filter_map(T::from_record_ref)
            .collect()
    }
}

/// Value stored in a relation slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Joined {
    One(Box<Record>),
    Many(JoinItems),
}

/// Relation name to joined value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JoinSet(BTreeMap<String, Joined>);

impl JoinSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, relation: &str) -> Option<&Joined> {
        self.0.get(relation)
    }

    pub fn get_mut(&mut self, relation: &str) -> Option<&mut Joined> {
        self.0.get_mut(relation)
    }

    pub fn insert(&mut self, relation: impl Into<String>, value: Joined) {
        self.0.insert(relation.into(), value);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Single-valued relation as a concrete entity
    pub fn one<T: RecordVariant>(&self, relation: &str) -> Option<&T> {
        match self.0.get(relation)? {
            Joined::One(record) => T::from_record_ref(record),
            Joined::Many(_) => None,
        }
    }

    pub fn many(&self, relation: &str) -> Option<&JoinItems> {
        match self.0.get(relation)? {
            Joined::Many(items) => Some(items),
            Joined::One(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_as_entity() {
        let mut role = Role::default();
        role.header.id = "r1".to_string();
        role.name = "Admin".to_string();
        let record = Record::from(role);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Id"], "r1");
        assert_eq!(value["Name"], "Admin");
        assert_eq!(record.type_name(), "Role");
        assert_eq!(record.collection(), "Roles");
    }

    #[test]
    fn test_downcast() {
        let record = Record::from(Feature::default());
        assert!(record.downcast_ref::<Feature>().is_some());
        assert!(record.downcast_ref::<Role>().is_none());
    }

    #[test]
    fn test_join_items_count_only_serializes_null_items() {
        let value = serde_json::to_value(JoinItems::counted(3)).unwrap();
        assert_eq!(value, serde_json::json!({"Count": 3, "Items": null}));
    }

    #[test]
    fn test_to_document_drops_joins() {
        let mut user = User::default();
        user.header.id = "u1".to_string();
        user.header
            .joins
            .insert("Password", Joined::One(Box::new(Password::default().into())));
        let record = Record::from(user);

        let doc = record.to_document().unwrap();
        assert!(doc.get("Joins").is_none());
        assert!(doc.get("Views").is_none());
        assert_eq!(doc["Id"], "u1");
    }
}
