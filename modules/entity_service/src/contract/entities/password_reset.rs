use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, FieldRule, RecordHeader};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PasswordReset {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub user_id: String,
    pub complete: bool,
    pub url: String,
}

const RULES: &[FieldRule] = &[FieldRule::required("UserId")];

impl Entity for PasswordReset {
    const TYPE_NAME: &'static str = "PasswordReset";
    const COLLECTION: &'static str = "PasswordResets";

    header_access!();

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "UserId" => Some(&self.user_id),
            _ => self.header.key(field),
        }
    }
}
