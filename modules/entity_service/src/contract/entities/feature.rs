use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, RecordHeader, Relation};
use crate::contract::seeds;

/// Capability toggle, grouped by [`super::FeatureGroup`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Feature {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub key: String,
    pub name: String,
    pub description: String,
    pub feature_group_id: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("FeatureGroup", "FeatureGroups,FeatureGroup,FeatureGroupId,false,"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

const RULES: &[FieldRule] = &[
    FieldRule::required("Key"),
    FieldRule::required("Name"),
    FieldRule::required("Description"),
    FieldRule::required("FeatureGroupId"),
];

impl Entity for Feature {
    const TYPE_NAME: &'static str = "Feature";
    const COLLECTION: &'static str = "Features";
    const SEED_PAYLOAD: &'static str = seeds::FEATURES;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "FeatureGroupId" => Some(&self.feature_group_id),
            "Key" => Some(&self.key),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
