//! Typed query and mutation schemas, one submodule per operation
//!
//! Each operation owns its GraphQL document, a serializable `Variables`
//! struct, the response shape it expects, and a `parse` helper that turns
//! the raw `data` payload into domain records. Keeping the wire schemas
//! here makes the contract with the GraphQL API reviewable and testable
//! without going through the tool formatting layer.

/// List Projects v2 for an organization or user.
///
/// One document carries both owner branches; the caller reads only the
/// branch matching the requested owner type and ignores the other.
pub mod list_projects {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::Result;
    use crate::github::client::GraphQlRequest;
    use crate::github::types::ProjectSummary;

    /// Query document, fixed page of the first 20 projects
    pub const QUERY: &str = "\
query($login: String!) {
  organization(login: $login) {
    projectsV2(first: 20) {
      nodes { id title number url state }
    }
  }
  user(login: $login) {
    projectsV2(first: 20) {
      nodes { id title number url state }
    }
  }
}";

    /// Variables for [`QUERY`]
    #[derive(Debug, Serialize)]
    pub struct Variables {
        /// Organization or user login
        pub login: String,
    }

    /// Response shape for [`QUERY`]
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Data {
        /// Populated when the login resolves to an organization
        pub organization: Option<ProjectOwner>,
        /// Populated when the login resolves to a user
        pub user: Option<ProjectOwner>,
    }

    /// Either owner branch of the response
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct ProjectOwner {
        /// The owner's projects connection
        #[serde(rename = "projectsV2")]
        pub projects_v2: ProjectConnection,
    }

    /// Connection wrapper around the project summaries
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct ProjectConnection {
        /// Project summaries in server-returned order
        pub nodes: Vec<ProjectSummary>,
    }

    /// Build the request for a login
    pub fn request(login: &str) -> Result<GraphQlRequest> {
        GraphQlRequest::new(
            QUERY,
            Variables {
                login: login.to_string(),
            },
        )
    }

    /// Decode the `data` payload
    pub fn parse(data: Value) -> Result<Data> {
        Ok(serde_json::from_value::<Option<Data>>(data)?.unwrap_or_default())
    }
}

/// Fetch one Projects v2 by node id, including up to 20 custom fields.
///
/// Uses the generic `node(id:)` lookup constrained to the ProjectV2 variant.
/// A miss (wrong id, wrong type, not found) decodes to zero values rather
/// than an error; that behavior is deliberate and preserved.
pub mod get_project {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::Result;
    use crate::github::client::GraphQlRequest;
    use crate::github::types::ProjectDetail;

    /// Query document
    pub const QUERY: &str = "\
query($id: ID!) {
  node(id: $id) {
    ... on ProjectV2 {
      id
      title
      number
      url
      state
      public
      fields(first: 20) {
        nodes {
          ... on ProjectV2FieldCommon { id name }
        }
      }
    }
  }
}";

    /// Variables for [`QUERY`]
    #[derive(Debug, Serialize)]
    pub struct Variables {
        /// Projects v2 node id
        pub id: String,
    }

    /// Response shape for [`QUERY`]
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Data {
        /// The resolved node, or `None` when the id does not exist
        pub node: Option<ProjectDetail>,
    }

    /// Build the request for a project id
    pub fn request(project_id: &str) -> Result<GraphQlRequest> {
        GraphQlRequest::new(
            QUERY,
            Variables {
                id: project_id.to_string(),
            },
        )
    }

    /// Decode the `data` payload; a missed lookup yields zero values
    pub fn parse(data: Value) -> Result<ProjectDetail> {
        let data = serde_json::from_value::<Option<Data>>(data)?.unwrap_or_default();
        Ok(data.node.unwrap_or_default())
    }
}

/// Resolve a repository-scoped issue number to its node id and title.
pub mod issue_node_id {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::Result;
    use crate::github::client::GraphQlRequest;
    use crate::github::types::IssueRef;

    /// Query document
    pub const QUERY: &str = "\
query($owner: String!, $name: String!, $issueNumber: Int!) {
  repository(owner: $owner, name: $name) {
    issue(number: $issueNumber) {
      id
      number
      title
    }
  }
}";

    /// Variables for [`QUERY`]
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        /// Repository owner login
        pub owner: String,
        /// Repository name
        pub name: String,
        /// Issue number within the repository
        pub issue_number: i32,
    }

    /// Response shape for [`QUERY`]
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Data {
        /// The repository branch of the response
        pub repository: Option<Repository>,
    }

    /// Repository wrapper around the issue lookup
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Repository {
        /// The resolved issue
        pub issue: IssueRef,
    }

    /// Build the request for an (owner, repo, issue number) triple
    pub fn request(owner: &str, repo: &str, issue_number: i32) -> Result<GraphQlRequest> {
        GraphQlRequest::new(
            QUERY,
            Variables {
                owner: owner.to_string(),
                name: repo.to_string(),
                issue_number,
            },
        )
    }

    /// Decode the `data` payload
    pub fn parse(data: Value) -> Result<IssueRef> {
        let data = serde_json::from_value::<Option<Data>>(data)?.unwrap_or_default();
        Ok(data.repository.unwrap_or_default().issue)
    }
}

/// Add an issue to a Projects v2 as a new project item.
///
/// The only mutation in the crate. Not idempotent at this layer: a repeated
/// call does whatever the upstream mutation defines, and no rollback exists.
pub mod add_project_item {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::Result;
    use crate::github::client::GraphQlRequest;
    use crate::github::types::ProjectItem;

    /// Mutation document
    pub const MUTATION: &str = "\
mutation($input: AddProjectV2ItemByIdInput!) {
  addProjectV2ItemById(input: $input) {
    item { id }
  }
}";

    /// Variables for [`MUTATION`]
    #[derive(Debug, Serialize)]
    pub struct Variables {
        /// The mutation input object
        pub input: Input,
    }

    /// Input object for `addProjectV2ItemById`
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Input {
        /// Target project node id
        pub project_id: String,
        /// Content (issue) node id to attach
        pub content_id: String,
    }

    /// Response shape for [`MUTATION`]
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Data {
        /// The mutation payload
        #[serde(rename = "addProjectV2ItemById")]
        pub add_project_v2_item_by_id: Option<Payload>,
    }

    /// Payload wrapper around the created item
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Payload {
        /// The created project item
        pub item: ProjectItem,
    }

    /// Build the request for a (project id, issue id) pair
    pub fn request(project_id: &str, issue_id: &str) -> Result<GraphQlRequest> {
        GraphQlRequest::new(
            MUTATION,
            Variables {
                input: Input {
                    project_id: project_id.to_string(),
                    content_id: issue_id.to_string(),
                },
            },
        )
    }

    /// Decode the `data` payload into the created item
    pub fn parse(data: Value) -> Result<ProjectItem> {
        let data = serde_json::from_value::<Option<Data>>(data)?.unwrap_or_default();
        Ok(data.add_project_v2_item_by_id.unwrap_or_default().item)
    }
}
