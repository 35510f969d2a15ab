//! Transient domain records decoded from GraphQL responses
//!
//! Every record derives `Default` and decodes with `#[serde(default)]`: a
//! node lookup that misses (wrong id, wrong type, not found) yields zero
//! values instead of a decode failure, and the tools render the resulting
//! empty report rather than erroring. Identifiers are opaque strings and are
//! never parsed or constructed locally.

use serde::Deserialize;

/// One Projects v2 entry as returned by a list query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectSummary {
    /// Opaque node identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Project number, scoped to the owner
    pub number: i64,
    /// Web URL of the project
    pub url: String,
    /// Project state as reported by the API
    pub state: String,
}

/// Full detail for one Projects v2, including its custom fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDetail {
    /// Opaque node identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Project number, scoped to the owner
    pub number: i64,
    /// Web URL of the project
    pub url: String,
    /// Project state as reported by the API
    pub state: String,
    /// Whether the project is publicly visible
    pub public: bool,
    /// Custom fields, in server-returned order
    pub fields: FieldConnection,
}

/// Connection wrapper around a project's custom fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldConnection {
    /// Field nodes in server-returned order
    pub nodes: Vec<CustomField>,
}

/// A single custom field on a project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomField {
    /// Opaque node identifier
    pub id: String,
    /// Field name
    pub name: String,
}

/// An issue resolved through a repository-scoped lookup
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueRef {
    /// Opaque node identifier, usable as mutation input
    pub id: String,
    /// Issue number within its repository
    pub number: i64,
    /// Issue title
    pub title: String,
}

/// The project item created when content is added to a project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    /// Opaque node identifier of the new item
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_detail_decodes_from_empty_object() {
        // A node(id:) miss leaves the inline fragment unmatched; the
        // resulting empty object must decode to zero values.
        let detail: ProjectDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(detail.id, "");
        assert_eq!(detail.number, 0);
        assert!(!detail.public);
        assert!(detail.fields.nodes.is_empty());
    }

    #[test]
    fn test_project_summary_decodes_partial_payload() {
        let summary: ProjectSummary =
            serde_json::from_str(r#"{"id": "PVT_1", "title": "Roadmap"}"#).unwrap();
        assert_eq!(summary.id, "PVT_1");
        assert_eq!(summary.title, "Roadmap");
        assert_eq!(summary.state, "");
    }

    #[test]
    fn test_custom_field_order_is_preserved() {
        let connection: FieldConnection = serde_json::from_str(
            r#"{"nodes": [{"id": "F2", "name": "Status"}, {"id": "F1", "name": "Priority"}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = connection.nodes.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Status", "Priority"]);
    }
}
