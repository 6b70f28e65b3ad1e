//! Request and response bodies

use serde::{Deserialize, Serialize};

use crate::contract::{DocumentQuery, Record};

/// `?joins=Account,RoleFeatures.Count`
#[derive(Debug, Default, Deserialize)]
pub struct JoinsParam {
    #[serde(default)]
    pub joins: Option<String>,
}

impl JoinsParam {
    pub fn paths(&self) -> Vec<String> {
        self.joins
            .as_deref()
            .map(split_joins)
            .unwrap_or_default()
    }
}

pub fn split_joins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body of `POST /collections/{collection}/query`
#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(flatten)]
    pub query: DocumentQuery,
    #[serde(default)]
    pub joins: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub items: Vec<Record>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}
