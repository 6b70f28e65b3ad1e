use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, FieldRule, RecordHeader};
use crate::contract::seeds;

/// Password hash, referenced by `User.PasswordId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Password {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub value: String,
}

const RULES: &[FieldRule] = &[FieldRule::required("Value")];

impl Entity for Password {
    const TYPE_NAME: &'static str = "Password";
    const COLLECTION: &'static str = "Passwords";
    const SEED_PAYLOAD: &'static str = seeds::PASSWORDS;

    header_access!();

    fn rules() -> &'static [FieldRule] {
        RULES
    }
}
