//! Save-path validation of required fields and e-mail addresses
//!
//! Failures are written into the record's `Errors` sidecar, keyed by field
//! name, and signalled with [`EntityError::Validation`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::contract::model::{VALIDATION_ERROR_SPECIFIC_EMAIL, VALIDATION_ERROR_SPECIFIC_REQUIRED};
use crate::contract::query::lookup;
use crate::contract::{EntityError, FieldErrors, FieldRule, Record};

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$").ok()
});

pub fn is_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

fn field_text(document: &Value, field: &str) -> String {
    match lookup(document, field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Check every rule against a serialized record
pub fn check_rules(document: &Value, rules: &[FieldRule]) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for rule in rules {
        let text = field_text(document, rule.field);
        if rule.required && text.is_empty() {
            errors.set(rule.field, VALIDATION_ERROR_SPECIFIC_REQUIRED);
        }
        if rule.email && !is_email(&text) {
            errors.set(rule.field, VALIDATION_ERROR_SPECIFIC_EMAIL);
        }
    }
    errors
}

/// Validate a record before save, replacing its `Errors` sidecar
pub fn validate_and_clean(record: &mut Record) -> Result<(), EntityError> {
    record.header_mut().errors.clear();
    let document = serde_json::to_value(&*record).map_err(|e| EntityError::Decode {
        collection: record.collection().to_string(),
        message: e.to_string(),
    })?;

    let errors = check_rules(&document, record.rules());
    if errors.is_empty() {
        return Ok(());
    }

    let fields = errors.clone().into_map();
    record.header_mut().errors = errors;
    Err(EntityError::Validation { fields })
}
