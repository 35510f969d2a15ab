//! Response creation utilities for MCP operations
//!
//! The formatters are deterministic: field order is fixed and sequences stay
//! in server-returned order. Tools call the `create_*_response` builders;
//! the `format_*` functions are separate so the report text can be tested
//! on its own.

use rmcp::model::CallToolResult;

use crate::github::types::{IssueRef, ProjectDetail, ProjectItem, ProjectSummary};
use crate::mcp::tool_registry::BaseToolImpl;

/// Render a list of project summaries as an itemized report
pub fn format_projects_list(projects: &[ProjectSummary]) -> String {
    if projects.is_empty() {
        return "No Projects v2 found.".to_string();
    }

    let mut result = format!("Found {} Projects v2:\n\n", projects.len());
    for project in projects {
        result.push_str(&format!("- **{}** (#{})\n", project.title, project.number));
        result.push_str(&format!("  - ID: {}\n", project.id));
        result.push_str(&format!("  - State: {}\n", project.state));
        result.push_str(&format!("  - URL: {}\n\n", project.url));
    }
    result
}

/// Render a single project's detail, with a Custom Fields section only when
/// at least one field exists
pub fn format_project_detail(project: &ProjectDetail) -> String {
    let mut result = format!("**{}** (#{})\n", project.title, project.number);
    result.push_str(&format!("- ID: {}\n", project.id));
    result.push_str(&format!("- State: {}\n", project.state));
    result.push_str(&format!("- Public: {}\n", project.public));
    result.push_str(&format!("- URL: {}\n", project.url));

    if !project.fields.nodes.is_empty() {
        result.push_str("\n**Custom Fields:**\n");
        for field in &project.fields.nodes {
            result.push_str(&format!("- {} (ID: {})\n", field.name, field.id));
        }
    }

    result
}

/// Render a resolved issue as the two-line node-id report
pub fn format_issue_node_id(issue: &IssueRef) -> String {
    format!(
        "Issue #{}: {}\nNode ID: {}",
        issue.number, issue.title, issue.id
    )
}

/// Render the confirmation line for a newly created project item
pub fn format_item_added(item: &ProjectItem) -> String {
    format!(
        "Successfully added issue to project v2. Item ID: {}",
        item.id
    )
}

/// Create the response for the project listing tool
pub fn create_projects_list_response(projects: &[ProjectSummary]) -> CallToolResult {
    BaseToolImpl::create_success_response(format_projects_list(projects))
}

/// Create the response for the project detail tool
pub fn create_project_detail_response(project: &ProjectDetail) -> CallToolResult {
    BaseToolImpl::create_success_response(format_project_detail(project))
}

/// Create the response for the issue node-id tool
pub fn create_issue_node_id_response(issue: &IssueRef) -> CallToolResult {
    BaseToolImpl::create_success_response(format_issue_node_id(issue))
}

/// Create the response for the add-item mutation tool
pub fn create_item_added_response(item: &ProjectItem) -> CallToolResult {
    BaseToolImpl::create_success_response(format_item_added(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::{CustomField, FieldConnection};

    fn sample_project(n: i64) -> ProjectSummary {
        ProjectSummary {
            id: format!("PVT_{n}"),
            title: format!("Project {n}"),
            number: n,
            url: format!("https://github.com/orgs/o/projects/{n}"),
            state: "OPEN".to_string(),
        }
    }

    #[test]
    fn test_format_projects_list_empty() {
        assert_eq!(format_projects_list(&[]), "No Projects v2 found.");
    }

    #[test]
    fn test_format_projects_list_counts_and_orders_fields() {
        let text = format_projects_list(&[sample_project(1), sample_project(2)]);
        assert!(text.starts_with("Found 2 Projects v2:\n\n"));
        assert!(text.contains("- **Project 1** (#1)\n"));

        // title/number, then id, state, url in that order
        let id_pos = text.find("ID: PVT_1").unwrap();
        let state_pos = text.find("State: OPEN").unwrap();
        let url_pos = text.find("URL: https://github.com/orgs/o/projects/1").unwrap();
        assert!(id_pos < state_pos && state_pos < url_pos);
    }

    #[test]
    fn test_format_project_detail_without_fields() {
        let detail = ProjectDetail {
            id: "PVT_9".to_string(),
            title: "Board".to_string(),
            number: 9,
            url: "https://github.com/orgs/o/projects/9".to_string(),
            state: "OPEN".to_string(),
            public: false,
            fields: FieldConnection::default(),
        };
        let text = format_project_detail(&detail);
        assert!(text.starts_with("**Board** (#9)\n"));
        assert!(text.contains("- Public: false\n"));
        assert!(!text.contains("Custom Fields"));
    }

    #[test]
    fn test_format_project_detail_with_fields_in_order() {
        let detail = ProjectDetail {
            id: "PVT_9".to_string(),
            title: "Board".to_string(),
            number: 9,
            url: "https://github.com/orgs/o/projects/9".to_string(),
            state: "OPEN".to_string(),
            public: true,
            fields: FieldConnection {
                nodes: vec![
                    CustomField {
                        id: "F1".to_string(),
                        name: "Status".to_string(),
                    },
                    CustomField {
                        id: "F2".to_string(),
                        name: "Priority".to_string(),
                    },
                ],
            },
        };
        let text = format_project_detail(&detail);
        assert!(text.contains("\n**Custom Fields:**\n"));
        let status_pos = text.find("- Status (ID: F1)").unwrap();
        let priority_pos = text.find("- Priority (ID: F2)").unwrap();
        assert!(status_pos < priority_pos);
    }

    #[test]
    fn test_format_issue_node_id_template() {
        let issue = IssueRef {
            id: "I_kwDOA".to_string(),
            number: 42,
            title: "Fix bug".to_string(),
        };
        assert_eq!(
            format_issue_node_id(&issue),
            "Issue #42: Fix bug\nNode ID: I_kwDOA"
        );
    }

    #[test]
    fn test_format_item_added_contains_item_id() {
        let item = ProjectItem {
            id: "PVTI_abc123".to_string(),
        };
        assert_eq!(
            format_item_added(&item),
            "Successfully added issue to project v2. Item ID: PVTI_abc123"
        );
    }
}
