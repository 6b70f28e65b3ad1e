use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, RecordHeader, Relation};

/// Error reported by a client or raised server side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppError {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub account_id: String,
    pub user_id: String,
    pub client_side: bool,
    pub url: String,
    pub message: String,
    pub stack_shown: String,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("User", "Users,User,UserId,false,"),
    Relation::new("Account", "Accounts,Account,AccountId,false,"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

impl Entity for AppError {
    const TYPE_NAME: &'static str = "AppError";
    const COLLECTION: &'static str = "AppErrors";

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "AccountId" => Some(&self.account_id),
            "UserId" => Some(&self.user_id),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
