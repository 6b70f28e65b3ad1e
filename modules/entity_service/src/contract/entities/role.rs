use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, RecordHeader, Relation};
use crate::contract::seeds;

/// Named set of features assignable through [`super::AccountRole`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Role {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub name: String,
    pub account_id: String,
    pub can_delete: bool,
    pub account_type: String,
    pub short_name: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("RoleFeatures", "RoleFeatures,RoleFeature,Id,true,RoleId"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

const RULES: &[FieldRule] = &[FieldRule::required("Name"), FieldRule::required("AccountType")];

impl Entity for Role {
    const TYPE_NAME: &'static str = "Role";
    const COLLECTION: &'static str = "Roles";
    const SEED_PAYLOAD: &'static str = seeds::ROLES;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "AccountId" => Some(&self.account_id),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
