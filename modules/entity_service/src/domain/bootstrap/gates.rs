//! Deployment gates evaluated against a seed record's bootstrap metadata

use std::fmt;

use crate::config::Config;
use crate::contract::BootstrapMeta;

/// Release mode in which gate rejections are logged
pub const DEVELOPMENT_MODE: &str = "development";

/// Facts about the running deployment that seed records are gated on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentScope {
    pub product_name: String,
    pub server_fqdn: String,
    pub version_numeric: i64,
    pub release_mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    VersionMismatch,
    DomainMismatch,
    DomainsMismatch,
    ProductNameMismatch,
    ProductNamesMismatch,
    ReleaseModeMismatch,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::VersionMismatch => "Version Mismatch",
            RejectReason::DomainMismatch => "FQDN Mismatch With Domain",
            RejectReason::DomainsMismatch => "FQDN Mismatch With Domains",
            RejectReason::ProductNameMismatch => "ProductName does not Match",
            RejectReason::ProductNamesMismatch => "ProductNames does not Match Product",
            RejectReason::ReleaseModeMismatch => "ReleaseMode does not match",
        })
    }
}

impl DeploymentScope {
    pub fn from_config(config: &Config) -> Self {
        Self {
            product_name: config.product_name.clone(),
            server_fqdn: config.server_fqdn.clone(),
            version_numeric: config.version_numeric,
            release_mode: config.release_mode.clone(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.release_mode == DEVELOPMENT_MODE
    }

    /// Every gate the record fails, in evaluation order; empty means the
    /// record may be written. Records without metadata always pass.
    pub fn evaluate(&self, meta: Option<&BootstrapMeta>) -> Vec<RejectReason> {
        let Some(meta) = meta else {
            return Vec::new();
        };

        let mut reasons = Vec::new();
        if meta.version > 0 && meta.version <= self.version_numeric {
            reasons.push(RejectReason::VersionMismatch);
        }
        if !meta.domain.is_empty() && meta.domain != self.server_fqdn {
            reasons.push(RejectReason::DomainMismatch);
        }
        if !meta.domains.is_empty() && !meta.domains.contains(&self.server_fqdn) {
            reasons.push(RejectReason::DomainsMismatch);
        }
        if !meta.product_name.is_empty() && meta.product_name != self.product_name {
            reasons.push(RejectReason::ProductNameMismatch);
        }
        if !meta.product_names.is_empty() && !meta.product_names.contains(&self.product_name) {
            reasons.push(RejectReason::ProductNamesMismatch);
        }
        if !meta.release_mode.is_empty() && meta.release_mode != self.release_mode {
            reasons.push(RejectReason::ReleaseModeMismatch);
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> DeploymentScope {
        DeploymentScope {
            product_name: "App".to_string(),
            server_fqdn: "app.example.com".to_string(),
            version_numeric: 5,
            release_mode: "production".to_string(),
        }
    }

    #[test]
    fn test_no_meta_passes() {
        assert!(scope().evaluate(None).is_empty());
        assert!(scope().evaluate(Some(&BootstrapMeta::default())).is_empty());
    }

    #[test]
    fn test_version_gate() {
        let scope = scope();
        let stale = BootstrapMeta { version: 5, ..Default::default() };
        assert_eq!(scope.evaluate(Some(&stale)), vec![RejectReason::VersionMismatch]);

        let newer = BootstrapMeta { version: 6, ..Default::default() };
        assert!(scope.evaluate(Some(&newer)).is_empty());
    }

    #[test]
    fn test_all_reasons_collected_in_order() {
        let meta = BootstrapMeta {
            version: 1,
            domain: "other.example.com".to_string(),
            domains: vec!["a.example.com".to_string()],
            product_name: "Other".to_string(),
            product_names: vec!["X".to_string(), "Y".to_string()],
            release_mode: "development".to_string(),
            ..Default::default()
        };
        let reasons: Vec<String> = scope()
            .evaluate(Some(&meta))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            reasons,
            vec![
                "Version Mismatch",
                "FQDN Mismatch With Domain",
                "FQDN Mismatch With Domains",
                "ProductName does not Match",
                "ProductNames does not Match Product",
                "ReleaseMode does not match",
            ]
        );
    }

    #[test]
    fn test_matching_lists_pass() {
        let meta = BootstrapMeta {
            domains: vec!["x".to_string(), "app.example.com".to_string()],
            product_names: vec!["App".to_string()],
            release_mode: "production".to_string(),
            ..Default::default()
        };
        assert!(scope().evaluate(Some(&meta)).is_empty());
    }
}
