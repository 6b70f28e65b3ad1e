use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{Entity, RecordHeader};

/// Uploaded file, content stored inline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileObject {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub name: String,
    pub path: String,
    pub single_download: bool,
    pub content: String,
    pub size: i64,
    #[serde(rename = "Type")]
    pub content_type: String,
    pub modified_unix: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(rename = "MD5")]
    pub md5: String,
    pub account_id: String,
}

impl Entity for FileObject {
    const TYPE_NAME: &'static str = "FileObject";
    const COLLECTION: &'static str = "FileObjects";

    header_access!();

    fn key(&self, field: &str) -> Option<&str> {
        match field {
            "AccountId" => Some(&self.account_id),
            _ => self.header.key(field),
        }
    }
}
