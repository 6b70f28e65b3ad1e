use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, PhoneInfo, RecordHeader, Relation};
use crate::contract::seeds;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Preference {
    pub key: String,
    pub value: String,
}

/// Display fields computed for a [`User`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserViews {
    /// `Last, First`
    pub full_name: String,
    #[serde(flatten)]
    pub change: ChangeViews,
    /// `Enabled` or `Disabled`
    pub locked: String,
}

impl UserViews {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.locked.is_empty() && self.change.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub first: String,
    pub last: String,
    pub email: String,
    pub company_name: String,
    pub office_name: String,
    pub skype_id: String,
    pub default_account_id: String,
    pub phone: PhoneInfo,
    pub ext: String,
    pub mobile: PhoneInfo,
    #[serde(deserialize_with = "preferences")]
    pub preferences: Vec<Preference>,
    pub job_title: String,
    pub dept: String,
    pub bio: String,
    pub photo_icon: String,
    pub password_id: String,
    pub language: String,
    pub time_zone: String,
    pub date_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<DateTime<Utc>>,
    #[serde(rename = "LastLoginIP")]
    pub last_login_ip: String,
    pub login_attempts: i64,
    pub locked: bool,
    pub enforce_password_change: bool,
    #[serde(skip_deserializing, skip_serializing_if = "UserViews::is_empty")]
    pub views: UserViews,
}

fn preferences<'de, D>(deserializer: D) -> Result<Vec<Preference>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<Preference>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

const RELATIONS: &[Relation] = &[
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
    Relation::new("Password", "Passwords,Password,PasswordId,false,"),
    Relation::new("Account", "Accounts,Account,DefaultAccountId,false,"),
    Relation::new("AccountRoles", "AccountRoles,AccountRole,Id,true,UserId"),
];

const RULES: &[FieldRule] = &[
    FieldRule::required("First"),
    FieldRule::required("Last"),
    FieldRule::email("Email"),
];

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
    const COLLECTION: &'static str = "Users";
    const SEED_PAYLOAD: &'static str = seeds::USERS;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "DefaultAccountId" => Some(&self.default_account_id),
            "PasswordId" => Some(&self.password_id),
            "Email" => Some(&self.email),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.full_name = format!("{}, {}", self.last, self.first);
        self.views.locked = if self.locked { "Enabled" } else { "Disabled" }.to_string();
        self.views.change.render(self.header.update_date, now);
    }
}
