// ABOUTME: CLI argument definitions for the lin binary
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::limits;

#[derive(Parser, Debug)]
#[command(name = "lin")]
#[command(about = "Interact with Linear issues from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace to use, overriding markers and config
    #[arg(long, global = true, value_name = "NAME")]
    pub workspace: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an API token and store it for the workspace
    Login {
        /// Linear personal API token
        api_token: String,
    },
    /// Remove the stored token for the workspace
    Logout,
    /// Issue management commands
    Issue {
        #[command(subcommand)]
        command: IssueCommands,
    },
    /// Comment management commands
    Comments {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Project commands
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Team commands
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// User commands
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Workspace management commands
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum IssueCommands {
    /// View an issue
    View {
        /// Issue identifier (e.g., ENG-123)
        identifier: String,
    },
    /// Edit an issue
    Edit(IssueEditArgs),
    /// Create an issue
    Create(IssueCreateArgs),
    /// Search issues by text and/or filters
    Search(IssueSearchArgs),
    /// Change an issue's workflow state, or list the available states
    State {
        /// Issue identifier (e.g., ENG-123)
        identifier: String,

        /// Target state name (case insensitive)
        state: Option<String>,

        /// List the team's workflow states instead
        #[arg(long)]
        list: bool,
    },
    /// Delete an issue
    Delete {
        /// Issue identifier (e.g., ENG-123)
        identifier: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct IssueEditArgs {
    /// Issue identifier (e.g., ENG-123)
    pub identifier: String,

    /// New title
    #[arg(long)]
    pub summary: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Project ID to move the issue to
    #[arg(long)]
    pub project_id: Option<String>,

    /// Priority (0=None, 1=Urgent, 2=High, 3=Medium, 4=Low)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=4))]
    pub priority: Option<i64>,

    /// Assignee user ID
    #[arg(long)]
    pub assignee_id: Option<String>,

    /// Parent issue identifier (e.g., ENG-100)
    #[arg(long)]
    pub parent_id: Option<String>,

    /// File to upload and attach to the issue
    #[arg(long, value_name = "FILE")]
    pub attachment: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct IssueCreateArgs {
    /// Issue title
    pub title: String,

    /// Team ID the issue belongs to
    #[arg(long)]
    pub team_id: String,

    /// Issue description (markdown)
    #[arg(long)]
    pub description: Option<String>,

    /// Project ID
    #[arg(long)]
    pub project_id: Option<String>,

    /// Assignee user ID
    #[arg(long)]
    pub assignee_id: Option<String>,

    /// Priority (0=None, 1=Urgent, 2=High, 3=Medium, 4=Low)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=4))]
    pub priority: Option<i64>,

    /// Parent issue identifier (e.g., ENG-100)
    #[arg(long)]
    pub parent_id: Option<String>,

    /// File to upload and link from the description
    #[arg(long, value_name = "FILE")]
    pub attachment: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct IssueSearchArgs {
    /// Free-text search query
    pub query: Option<String>,

    /// Only issues in this project
    #[arg(long)]
    pub project_id: Option<String>,

    /// Only issues in this team
    #[arg(long)]
    pub team_id: Option<String>,

    /// Only issues assigned to this user
    #[arg(long)]
    pub assignee_id: Option<String>,

    /// Only issues in this workflow state (exact name)
    #[arg(long)]
    pub status: Option<String>,

    /// Maximum number of issues to fetch
    #[arg(
        short,
        long,
        default_value_t = limits::DEFAULT_ISSUE_LIMIT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub limit: i32,

    #[command(flatten)]
    pub format: OutputArgs,
}

/// `--json` / `--pretty` for list commands
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// View comments for an issue
    View {
        /// Issue identifier (e.g., ENG-123)
        identifier: String,

        /// Show comment IDs (needed for edit/delete)
        #[arg(long)]
        show_ids: bool,
    },
    /// Add a comment to an issue
    Add {
        /// Issue identifier (e.g., ENG-123)
        identifier: String,

        /// Comment text (markdown)
        body: String,

        /// File to upload, attach and link from the comment
        #[arg(long, value_name = "FILE")]
        attachment: Option<PathBuf>,
    },
    /// Replace a comment's text
    Edit {
        /// Comment ID (see `comments view --show-ids`)
        comment_id: String,

        /// New comment text (markdown)
        body: String,

        /// File to upload and link from the comment
        #[arg(long, value_name = "FILE")]
        attachment: Option<PathBuf>,
    },
    /// Delete a comment
    Delete {
        /// Comment ID (see `comments view --show-ids`)
        comment_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List {
        /// Maximum number of projects to fetch
        #[arg(
        short,
        long,
        default_value_t = limits::DEFAULT_PROJECT_LIMIT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
        limit: i32,

        /// Include archived projects
        #[arg(long)]
        include_archived: bool,

        #[command(flatten)]
        format: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List teams
    List {
        /// Maximum number of teams to fetch
        #[arg(
        short,
        long,
        default_value_t = limits::DEFAULT_TEAM_LIMIT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
        limit: i32,

        #[command(flatten)]
        format: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List active users
    List {
        /// Maximum number of users to fetch
        #[arg(
        short,
        long,
        default_value_t = limits::DEFAULT_USER_LIMIT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
        limit: i32,

        #[command(flatten)]
        format: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceCommands {
    /// List known workspaces and whether each has a stored token
    List,
    /// Show the workspace this directory resolves to
    Current,
    /// Set the workspace for this directory, or globally
    Set {
        /// Workspace name
        name: String,

        /// Set as the default workspace
        #[arg(long, conflicts_with = "config")]
        global: bool,

        /// Store in the config file instead of writing a marker file
        #[arg(long)]
        config: bool,
    },
    /// Remove this directory's config entry
    Unset,
}
