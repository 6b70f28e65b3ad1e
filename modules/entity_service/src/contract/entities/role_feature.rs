use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, RecordHeader, Relation};

/// Feature enabled for a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RoleFeature {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub role_id: String,
    pub feature_id: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("Role", "Roles,Role,RoleId,false,"),
    Relation::new("Feature", "Features,Feature,FeatureId,false,"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

const RULES: &[FieldRule] = &[FieldRule::required("RoleId"), FieldRule::required("FeatureId")];

impl Entity for RoleFeature {
    const TYPE_NAME: &'static str = "RoleFeature";
    const COLLECTION: &'static str = "RoleFeatures";

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "RoleId" => Some(&self.role_id),
            "FeatureId" => Some(&self.feature_id),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
