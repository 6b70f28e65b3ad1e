use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, RecordHeader, Relation};

/// Audit entry for a change made through the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ActivityLog {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub account_id: String,
    pub user_id: String,
    pub entity: String,
    pub entity_id: String,
    pub action: String,
    pub value: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("User", "Users,User,UserId,false,"),
    Relation::new("Account", "Accounts,Account,AccountId,false,"),
];

impl Entity for ActivityLog {
    const TYPE_NAME: &'static str = "ActivityLog";
    const COLLECTION: &'static str = "ActivityLogs";

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "AccountId" => Some(&self.account_id),
            "UserId" => Some(&self.user_id),
            "EntityId" => Some(&self.entity_id),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
