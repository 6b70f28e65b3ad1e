use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, RecordHeader, Relation};
use crate::contract::seeds;

/// Role granted to a user within an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountRole {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub account_id: String,
    pub user_id: String,
    pub role_id: String,
}

const RELATIONS: &[Relation] = &[
    Relation::new("User", "Users,User,UserId,false,"),
    Relation::new("Account", "Accounts,Account,AccountId,false,"),
    Relation::new("Role", "Roles,Role,RoleId,false,"),
];

impl Entity for AccountRole {
    const TYPE_NAME: &'static str = "AccountRole";
    const COLLECTION: &'static str = "AccountRoles";
    const SEED_PAYLOAD: &'static str = seeds::ACCOUNT_ROLES;

    header_access!();

    fn relations() -> &'static [Relation] {
        RELATIONS
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "AccountId" => Some(&self.account_id),
            "UserId" => Some(&self.user_id),
            "RoleId" => Some(&self.role_id),
            _ => self.header.key(field),
        }
    }
}
