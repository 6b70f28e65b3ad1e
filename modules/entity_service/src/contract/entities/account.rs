use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{ChangeViews, Entity, FieldRule, PhoneInfo, RecordHeader, Relation};
use crate::contract::seeds;

/// Customer or system account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub account_name: String,
    pub address1: String,
    pub address2: String,
    pub region: String,
    pub city: String,
    pub post_code: String,
    pub country_id: String,
    pub state_name: String,
    pub state_id: String,
    pub primary_phone: PhoneInfo,
    pub secondary_phone: PhoneInfo,
    pub email: String,
    pub account_type_short: String,
    pub account_type_long: String,
    pub related_acct_id: String,
    pub is_system_account: bool,
    #[serde(skip_deserializing, skip_serializing_if = "ChangeViews::is_empty")]
    pub views: ChangeViews,
}

const RELATIONS: &[Relation] = &[
    Relation::new("Country", "Countries,Country,CountryId,false,"),
    Relation::new("State", "States,State,StateId,false,"),
    Relation::new("RelatedAccount", "Accounts,Account,RelatedAcctId,false,"),
    Relation::new("LastUpdateUser", "Users,User,LastUpdateId,false,"),
];

const RULES: &[FieldRule] = &[
    FieldRule::required("AccountName"),
    FieldRule::required("Address1"),
    FieldRule::required("City"),
    FieldRule::required("PostCode"),
    FieldRule::required("CountryId"),
    FieldRule::required("PrimaryPhone.Value"),
    FieldRule::email("Email"),
];

impl Entity for Account {
    const TYPE_NAME: &'static str = "Account";
    const COLLECTION: &'static str = "Accounts";
    const SEED_PAYLOAD: &'static str = seeds::ACCOUNTS;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "CountryId" => Some(&self.country_id),
            "StateId" => Some(&self.state_id),
            "RelatedAcctId" => Some(&self.related_acct_id),
            _ => self.header.key(field),
        }
    }

    fn render_views(&mut self, now: DateTime<Utc>) {
        self.views.render(self.header.update_date, now);
    }
}
