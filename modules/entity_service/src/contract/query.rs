//! Filter, sort and paging options evaluated against JSON documents
//!
//! Field names may be dotted (`PrimaryPhone.Value`) to reach nested
//! objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Inclusive bounds on one field; either side may be open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCondition {
    pub field: String,
    #[serde(default)]
    pub min: Option<Value>,
    #[serde(default)]
    pub max: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentQuery {
    /// Field must equal the value
    pub filter: BTreeMap<String, Value>,
    /// Field must equal one of the values
    pub in_filter: BTreeMap<String, Vec<Value>>,
    /// Field must equal none of the values
    pub exclude: BTreeMap<String, Vec<Value>>,
    pub range: Vec<RangeCondition>,
    pub sort: Vec<SortKey>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl DocumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    pub fn one_of(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.in_filter.insert(field.into(), values);
        self
    }

    pub fn excluding(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.exclude.insert(field.into(), values);
        self
    }

    pub fn between(
        mut self,
        field: impl Into<String>,
        min: Option<Value>,
        max: Option<Value>,
    ) -> Self {
        self.range.push(RangeCondition {
            field: field.into(),
            min,
            max,
        });
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort.push(SortKey {
            field: field.into(),
            descending,
        });
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a document passes every filter, in-filter, exclusion and range
    pub fn matches(&self, document: &Value) -> bool {
        let eq_ok = self
            .filter
            .iter()
            .all(|(field, expected)| lookup(document, field) == Some(expected));
        if !eq_ok {
            return false;
        }

        let in_ok = self.in_filter.iter().all(|(field, allowed)| {
            lookup(document, field).is_some_and(|value| allowed.contains(value))
        });
        if !in_ok {
            return false;
        }

        let exclude_ok = self.exclude.iter().all(|(field, banned)| {
            lookup(document, field).is_none_or(|value| !banned.contains(value))
        });
        if !exclude_ok {
            return false;
        }

        self.range.iter().all(|cond| {
            let Some(value) = lookup(document, &cond.field) else {
                return false;
            };
            let above_min = cond.min.as_ref().is_none_or(|min| {
                matches!(compare(value, min), Some(Ordering::Greater | Ordering::Equal))
            });
            let below_max = cond.max.as_ref().is_none_or(|max| {
                matches!(compare(value, max), Some(Ordering::Less | Ordering::Equal))
            });
            above_min && below_max
        })
    }

    /// Filter, sort and page a set of documents
    pub fn apply(&self, documents: impl IntoIterator<Item = Value>) -> Vec<Value> {
        let mut matched: Vec<Value> = documents.into_iter().filter(|d| self.matches(d)).collect();

        if !self.sort.is_empty() {
            matched.sort_by(|a, b| self.order(a, b));
        }

        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        matched.into_iter().skip(skip).take(limit).collect()
    }

    fn order(&self, a: &Value, b: &Value) -> Ordering {
        for key in &self.sort {
            let ord = match (lookup(a, &key.field), lookup(b, &key.field)) {
                (Some(x), Some(y)) => compare(x, y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            };
            let ord = if key.descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Resolve a dotted field path inside a JSON document
pub fn lookup<'a>(document: &'a Value, field: &str) -> Option<&'a Value> {
    field
        .split('.')
        .try_fold(document, |current, segment| current.get(segment))
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs() -> Vec<Value> {
        vec![
            json!({"Id": "a", "RoleId": "r1", "Rank": 3, "Phone": {"Value": "555"}}),
            json!({"Id": "b", "RoleId": "r1", "Rank": 1}),
            json!({"Id": "c", "RoleId": "r2", "Rank": 2}),
        ]
    }

    fn ids(values: &[Value]) -> Vec<&str> {
        values.iter().filter_map(|v| v["Id"].as_str()).collect()
    }

    #[test]
    fn test_eq_filter() {
        let out = DocumentQuery::new().eq("RoleId", "r1").apply(docs());
        assert_eq!(ids(&out), vec!["a", "b"]);
    }

    #[test]
    fn test_in_and_exclude() {
        let out = DocumentQuery::new()
            .one_of("Id", vec![json!("a"), json!("c")])
            .excluding("RoleId", vec![json!("r2")])
            .apply(docs());
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn test_range_sort_and_paging() {
        let out = DocumentQuery::new()
            .between("Rank", Some(json!(1)), Some(json!(2)))
            .sort_by("Rank", true)
            .apply(docs());
        assert_eq!(ids(&out), vec!["c", "b"]);

        let out = DocumentQuery::new()
            .sort_by("Rank", false)
            .skip(1)
            .limit(1)
            .apply(docs());
        assert_eq!(ids(&out), vec!["c"]);
    }

    #[test]
    fn test_dotted_lookup() {
        let out = DocumentQuery::new().eq("Phone.Value", "555").apply(docs());
        assert_eq!(ids(&out), vec!["a"]);
    }
}
