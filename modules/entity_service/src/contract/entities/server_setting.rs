use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::model::{Entity, RecordHeader};
use crate::contract::seeds;

/// Runtime-tunable server setting, looked up by `Key`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerSetting {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub name: String,
    pub key: String,
    pub category: String,
    pub value: String,
    /// Free-form payload for settings that are not plain strings
    #[serde(skip_serializing_if = "Value::is_null")]
    pub any: Value,
}

impl Entity for ServerSetting {
    const TYPE_NAME: &'static str = "ServerSetting";
    const COLLECTION: &'static str = "ServerSettings";
    const SEED_PAYLOAD: &'static str = seeds::SERVER_SETTINGS;

    header_access!();

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "Key" => Some(&self.key),
            _ => self.header.key(field),
        }
    }
}
