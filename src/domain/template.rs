//! Project template catalog.
//!
//! Templates are static, compiled-in data: the selector renders them as
//! cards and the checklist uses their feature bullets for customization.

use serde::{Deserialize, Serialize};

/// Identifier of a project template (e.g. "web-app").
///
/// Ids are not validated against the catalog: the store accepts arbitrary
/// ids, and an unknown id simply means "no checklist customization".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    /// Create a template id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A selectable project template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Unique identifier within the catalog
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description shown on the card
    pub description: &'static str,
    /// Feature bullets (display only)
    pub features: &'static [&'static str],
}

impl Template {
    /// Get the id as a `TemplateId`
    pub fn template_id(&self) -> TemplateId {
        TemplateId::new(self.id)
    }
}

/// The built-in template catalog, in display order.
///
/// The last entry is the "start from scratch" fallback; it behaves like any
/// other template when selected.
pub const CATALOG: &[Template] = &[
    Template {
        id: "web-app",
        name: "Web Application",
        description: "Full-stack web app with modern frameworks",
        features: &[
            "Frontend & Backend",
            "Database Design",
            "API Specification",
            "Auth & Security",
        ],
    },
    Template {
        id: "mobile-app",
        name: "Mobile Application",
        description: "Native or cross-platform mobile app",
        features: &[
            "iOS & Android",
            "Push Notifications",
            "Offline Support",
            "App Store Ready",
        ],
    },
    Template {
        id: "api-service",
        name: "API Service",
        description: "RESTful or GraphQL API backend",
        features: &[
            "Endpoint Design",
            "Data Models",
            "Rate Limiting",
            "Documentation",
        ],
    },
    Template {
        id: "saas-platform",
        name: "SaaS Platform",
        description: "Multi-tenant SaaS with billing",
        features: &[
            "Multi-Tenancy",
            "Subscription Billing",
            "Admin Dashboard",
            "Analytics",
        ],
    },
    Template {
        id: "custom",
        name: "Start From Scratch",
        description: "Build your own custom template",
        features: &[
            "Complete Flexibility",
            "All Features Available",
            "Custom Workflows",
            "Your Rules",
        ],
    },
];

/// Look up a template by id
pub fn find_template(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_contains_expected_ids() {
        let ids: Vec<&str> = CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["web-app", "mobile-app", "api-service", "saas-platform", "custom"]
        );
    }

    #[test]
    fn test_catalog_has_scratch_fallback() {
        let custom = find_template("custom").expect("fallback entry missing");
        assert_eq!(custom.name, "Start From Scratch");
    }

    #[test]
    fn test_find_template_unknown() {
        assert!(find_template("does-not-exist").is_none());
    }

    #[test]
    fn test_template_id_roundtrip() {
        let id = TemplateId::new("saas-platform");
        assert_eq!(id.as_str(), "saas-platform");
        assert_eq!(id.to_string(), "saas-platform");
    }
}
