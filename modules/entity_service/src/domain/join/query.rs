use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field selection applied to fetched documents.
///
/// A non-empty whitelist wins over the blacklist; `Id` always survives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

impl Projection {
    pub fn whitelist<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            whitelist: fields.into_iter().map(Into::into).collect(),
            blacklist: Vec::new(),
        }
    }

    pub fn blacklist<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            whitelist: Vec::new(),
            blacklist: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }

    pub fn apply(&self, document: &mut Value) {
        let Some(map) = document.as_object_mut() else {
            return;
        };
        let dropped: Vec<String> = if self.whitelist.is_empty() {
            self.blacklist
                .iter()
                .filter(|field| field.as_str() != "Id")
                .cloned()
                .collect()
        } else {
            map.keys()
                .filter(|key| key.as_str() != "Id" && !self.whitelist.contains(key))
                .cloned()
                .collect()
        };
        for key in dropped {
            map.remove(&key);
        }
    }
}

/// Per-request options shared by every level of a join walk
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    /// Render computed view fields on fetched records
    pub render_views: bool,
    /// Emit debug logs for every join query
    pub log_queries: bool,
    projections: HashMap<String, Projection>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_views(mut self, render_views: bool) -> Self {
        self.render_views = render_views;
        self
    }

    pub fn with_query_logging(mut self, log_queries: bool) -> Self {
        self.log_queries = log_queries;
        self
    }

    pub fn with_projection(mut self, collection: impl Into<String>, projection: Projection) -> Self {
        self.projections.insert(collection.into(), projection);
        self
    }

    pub fn projection(&self, collection: &str) -> Option<&Projection> {
        self.projections.get(collection).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whitelist_keeps_id() {
        let mut doc = json!({"Id": "1", "Name": "n", "Email": "e"});
        Projection::whitelist(["Name"]).apply(&mut doc);
        assert_eq!(doc, json!({"Id": "1", "Name": "n"}));
    }

    #[test]
    fn test_blacklist_removes_fields() {
        let mut doc = json!({"Id": "1", "Value": "hash", "Name": "n"});
        Projection::blacklist(["Value", "Id"]).apply(&mut doc);
        assert_eq!(doc, json!({"Id": "1", "Name": "n"}));
    }

    #[test]
    fn test_empty_projection_not_returned() {
        let ctx = QueryContext::new().with_projection("Users", Projection::default());
        assert!(ctx.projection("Users").is_none());
    }
}
