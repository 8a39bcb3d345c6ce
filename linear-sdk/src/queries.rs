// ABOUTME: GraphQL documents for every operation the SDK exposes
// ABOUTME: Kept as plain strings so each client method maps to exactly one request

pub const VIEWER: &str = r#"
query Viewer {
  viewer {
    id
    name
  }
}
"#;

pub const GET_ISSUE: &str = r#"
query GetIssue($issueId: String!) {
  issue(id: $issueId) {
    id
    identifier
    title
    description
    priority
    state {
      name
      type
    }
    assignee {
      name
      email
    }
    creator {
      name
      email
    }
    team {
      id
      name
      key
    }
    project {
      id
      name
    }
    createdAt
    updatedAt
    url
  }
}
"#;

pub const GET_ISSUE_COMMENTS: &str = r#"
query GetIssueComments($issueId: String!) {
  issue(id: $issueId) {
    id
    identifier
    comments {
      nodes {
        id
        body
        createdAt
        updatedAt
        user {
          name
          email
        }
      }
    }
  }
}
"#;

pub const CREATE_ISSUE: &str = r#"
mutation CreateIssue($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue {
      id
      identifier
      title
      description
      url
    }
  }
}
"#;

pub const UPDATE_ISSUE: &str = r#"
mutation UpdateIssue($issueId: String!, $input: IssueUpdateInput!) {
  issueUpdate(id: $issueId, input: $input) {
    success
    issue {
      id
      identifier
      title
      description
      priority
      state {
        name
        type
      }
      project {
        id
        name
      }
    }
  }
}
"#;

pub const DELETE_ISSUE: &str = r#"
mutation DeleteIssue($issueId: String!) {
  issueDelete(id: $issueId) {
    success
  }
}
"#;

const ISSUE_LIST_FIELDS: &str = r#"
    nodes {
      id
      identifier
      title
      priority
      state {
        name
        type
      }
      assignee {
        name
        email
      }
      team {
        id
        name
        key
      }
    }
"#;

pub fn search_issues() -> String {
    format!(
        "query SearchIssues($term: String!, $first: Int, $filter: IssueFilter) {{\n  searchIssues(term: $term, first: $first, filter: $filter) {{{ISSUE_LIST_FIELDS}  }}\n}}\n"
    )
}

pub fn list_issues() -> String {
    format!(
        "query ListIssues($first: Int, $filter: IssueFilter) {{\n  issues(first: $first, filter: $filter) {{{ISSUE_LIST_FIELDS}  }}\n}}\n"
    )
}

pub const WORKFLOW_STATES: &str = r#"
query WorkflowStates($teamId: String!) {
  team(id: $teamId) {
    states {
      nodes {
        id
        name
        type
        position
      }
    }
  }
}
"#;

pub const CREATE_COMMENT: &str = r#"
mutation CreateComment($input: CommentCreateInput!) {
  commentCreate(input: $input) {
    success
    comment {
      id
      body
      createdAt
      user {
        name
        email
      }
    }
  }
}
"#;

pub const UPDATE_COMMENT: &str = r#"
mutation UpdateComment($commentId: String!, $input: CommentUpdateInput!) {
  commentUpdate(id: $commentId, input: $input) {
    success
    comment {
      id
      body
      updatedAt
      user {
        name
        email
      }
    }
  }
}
"#;

pub const DELETE_COMMENT: &str = r#"
mutation DeleteComment($commentId: String!) {
  commentDelete(id: $commentId) {
    success
  }
}
"#;

pub const GET_PROJECTS: &str = r#"
query GetProjects($first: Int, $includeArchived: Boolean) {
  projects(first: $first, includeArchived: $includeArchived) {
    nodes {
      id
      name
      description
      createdAt
      updatedAt
      archivedAt
      url
      lead {
        name
        email
      }
      teams {
        nodes {
          name
        }
      }
    }
  }
}
"#;

pub const GET_TEAMS: &str = r#"
query GetTeams($first: Int) {
  teams(first: $first) {
    nodes {
      id
      name
      key
      description
    }
  }
}
"#;

pub const GET_USERS: &str = r#"
query GetUsers($first: Int) {
  users(first: $first) {
    nodes {
      id
      name
      email
      active
    }
  }
}
"#;

pub const FILE_UPLOAD: &str = r#"
mutation FileUpload($contentType: String!, $filename: String!, $size: Int!) {
  fileUpload(contentType: $contentType, filename: $filename, size: $size) {
    success
    uploadFile {
      uploadUrl
      assetUrl
      headers {
        key
        value
      }
    }
  }
}
"#;

pub const CREATE_ATTACHMENT: &str = r#"
mutation CreateAttachment($input: AttachmentCreateInput!) {
  attachmentCreate(input: $input) {
    success
    attachment {
      id
      url
    }
  }
}
"#;
