use crate::contract::{JoinError, Joinable, Relation, JOIN_ALL, JOIN_COUNT};

use super::query::{Projection, QueryContext};

/// One relation to resolve, parsed from its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinDescriptor {
    /// Slot name in the joins sidecar
    pub relation: &'static str,
    pub collection: String,
    pub type_name: String,
    /// Field on the source holding the lookup value
    pub local_key: String,
    pub is_many: bool,
    /// Field on the target to filter by; empty means lookup by id
    pub foreign_key: String,
    /// Path handed to the fetched records
    pub remaining_path: String,
    pub projection: Option<Projection>,
}

impl JoinDescriptor {
    pub fn parse(relation: &Relation, remaining_path: String) -> Result<Self, JoinError> {
        let malformed = || JoinError::MalformedTag {
            relation: relation.name.to_string(),
            tag: relation.tag.to_string(),
        };

        let parts: Vec<&str> = relation.tag.split(',').map(str::trim).collect();
        let [collection, type_name, local_key, many, foreign_key] = parts.as_slice() else {
            return Err(malformed());
        };
        let is_many = match *many {
            "true" => true,
            "false" => false,
            _ => return Err(malformed()),
        };
        if collection.is_empty() || type_name.is_empty() || local_key.is_empty() {
            return Err(malformed());
        }
        if is_many && foreign_key.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            relation: relation.name,
            collection: (*collection).to_string(),
            type_name: (*type_name).to_string(),
            local_key: (*local_key).to_string(),
            is_many,
            foreign_key: (*foreign_key).to_string(),
            remaining_path,
            projection: None,
        })
    }

    pub fn is_count_only(&self) -> bool {
        self.is_many && self.remaining_path == JOIN_COUNT
    }
}

/// Descriptors to resolve next for `path` on `source`.
///
/// An empty path yields nothing. `All` yields every declared relation with
/// the `All` path. Otherwise the first segment names one relation; an
/// unknown name yields nothing.
pub fn descriptors_for(
    source: &dyn Joinable,
    path: &str,
    ctx: &QueryContext,
) -> Result<Vec<JoinDescriptor>, JoinError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    let relations = source.declared_relations();
    let first = path.split('.').next().unwrap_or(path);

    let selected: Vec<(&Relation, String)> = if first == JOIN_ALL {
        relations
            .iter()
            .map(|relation| (relation, JOIN_ALL.to_string()))
            .collect()
    } else {
        let Some(relation) = relations.iter().find(|r| r.name == first) else {
            if ctx.log_queries {
                tracing::debug!(
                    path,
                    source = source.type_name(),
                    "could not resolve relation, skipping"
                );
            }
            return Ok(Vec::new());
        };
        let mut remaining = path
            .strip_prefix(first)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(path)
            .to_string();
        if remaining.starts_with(JOIN_COUNT) {
            remaining = JOIN_COUNT.to_string();
        }
        vec![(relation, remaining)]
    };

    selected
        .into_iter()
        .map(|(relation, remaining)| {
            let mut descriptor = JoinDescriptor::parse(relation, remaining)?;
            descriptor.projection = ctx.projection(&descriptor.collection).cloned();
            Ok(descriptor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::entities::{Role, User};

    fn ctx() -> QueryContext {
        QueryContext::default()
    }

    #[test]
    fn test_parse_by_id_tag() {
        let d = JoinDescriptor::parse(
            &Relation::new("Account", "Accounts,Account,DefaultAccountId,false,"),
            "Account".into(),
        )
        .unwrap();
        assert_eq!(d.collection, "Accounts");
        assert_eq!(d.type_name, "Account");
        assert_eq!(d.local_key, "DefaultAccountId");
        assert!(!d.is_many);
        assert!(d.foreign_key.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["Accounts,Account", "Accounts,Account,Id,maybe,", "Features,Feature,Id,true,"] {
            let err = JoinDescriptor::parse(&Relation::new("X", tag), String::new()).unwrap_err();
            assert!(matches!(err, JoinError::MalformedTag { .. }), "{tag}");
        }
    }

    #[test]
    fn test_empty_path_yields_nothing() {
        assert!(descriptors_for(&User::default(), "", &ctx()).unwrap().is_empty());
    }

    #[test]
    fn test_single_segment_keeps_path() {
        let joins = descriptors_for(&User::default(), "Account", &ctx()).unwrap();
        assert_eq!(joins.len(), 1);
        assert_eq!(joins[0].relation, "Account");
        assert_eq!(joins[0].remaining_path, "Account");
    }

    #[test]
    fn test_nested_path_strips_first_segment() {
        let joins = descriptors_for(&User::default(), "Account.Country.States", &ctx()).unwrap();
        assert_eq!(joins[0].remaining_path, "Country.States");
    }

    #[test]
    fn test_count_collapses() {
        let joins = descriptors_for(&Role::default(), "RoleFeatures.Count", &ctx()).unwrap();
        assert_eq!(joins[0].remaining_path, "Count");
        assert!(joins[0].is_count_only());

        let joins = descriptors_for(&Role::default(), "RoleFeatures.CountAll", &ctx()).unwrap();
        assert_eq!(joins[0].remaining_path, "Count");
    }

    #[test]
    fn test_all_yields_every_relation() {
        let joins = descriptors_for(&User::default(), "All", &ctx()).unwrap();
        let names: Vec<_> = joins.iter().map(|d| d.relation).collect();
        assert_eq!(names, vec!["LastUpdateUser", "Password", "Account", "AccountRoles"]);
        assert!(joins.iter().all(|d| d.remaining_path == JOIN_ALL));
    }

    #[test]
    fn test_unknown_segment_is_skipped() {
        assert!(descriptors_for(&User::default(), "Nope.Account", &ctx())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_projection_attached_from_context() {
        let ctx = QueryContext::default()
            .with_projection("Accounts", Projection::whitelist(["AccountName"]));
        let joins = descriptors_for(&User::default(), "Account", &ctx).unwrap();
        assert_eq!(
            joins[0].projection,
            Some(Projection::whitelist(["AccountName"]))
        );
    }
}
