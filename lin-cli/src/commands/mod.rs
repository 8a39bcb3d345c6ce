// ABOUTME: Command handlers, one function per subcommand, plus shared dispatch
// ABOUTME: Each handler resolves the workspace, requires auth, calls the API and renders

pub mod attachments;
pub mod comments;
pub mod issue;
pub mod login;
pub mod projects;
pub mod teams;
pub mod users;
pub mod workspace;

use anyhow::Result;
use linear_sdk::{Issue, LinearClient, LinearError};

use crate::cli::{
    CommentCommands, Commands, IssueCommands, ProjectCommands, TeamCommands, UserCommands,
    WorkspaceCommands,
};
use crate::context::AppContext;

/// An authenticated client together with the workspace it belongs to
pub struct Session {
    pub client: LinearClient,
    pub workspace: String,
}

/// Resolve the workspace and require a stored token the API still accepts.
/// Fails before any data request is made.
pub async fn ensure_authenticated(ctx: &AppContext) -> Result<Session> {
    let workspace = ctx.resolve_workspace();
    let client = ctx.auth(&workspace).authenticated_client().await?;
    Ok(Session { client, workspace })
}

/// Identifier to issue, with a caller-specific label in the not-found message
pub(crate) async fn find_issue(
    client: &LinearClient,
    identifier: &str,
    label: &str,
) -> Result<Issue> {
    match client.resolve_issue(identifier).await {
        Ok(issue) => Ok(issue),
        Err(LinearError::IssueNotFound(id)) => {
            anyhow::bail!("{} {} not found.", label, id)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn run(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login { api_token } => login::login(ctx, &api_token).await,
        Commands::Logout => login::logout(ctx),
        Commands::Issue { command } => match command {
            IssueCommands::View { identifier } => issue::view(ctx, &identifier).await,
            IssueCommands::Edit(args) => issue::edit(ctx, &args).await,
            IssueCommands::Create(args) => issue::create(ctx, &args).await,
            IssueCommands::Search(args) => issue::search(ctx, &args).await,
            IssueCommands::State {
                identifier,
                state,
                list,
            } => issue::state(ctx, &identifier, state.as_deref(), list).await,
            IssueCommands::Delete { identifier } => issue::delete(ctx, &identifier).await,
        },
        Commands::Comments { command } => match command {
            CommentCommands::View {
                identifier,
                show_ids,
            } => comments::view(ctx, &identifier, show_ids).await,
            CommentCommands::Add {
                identifier,
                body,
                attachment,
            } => comments::add(ctx, &identifier, &body, attachment.as_deref()).await,
            CommentCommands::Edit {
                comment_id,
                body,
                attachment,
            } => comments::edit(ctx, &comment_id, &body, attachment.as_deref()).await,
            CommentCommands::Delete { comment_id } => comments::delete(ctx, &comment_id).await,
        },
        Commands::Projects {
            command:
                ProjectCommands::List {
                    limit,
                    include_archived,
                    format,
                },
        } => projects::list(ctx, limit, include_archived, format).await,
        Commands::Teams {
            command: TeamCommands::List { limit, format },
        } => teams::list(ctx, limit, format).await,
        Commands::Users {
            command: UserCommands::List { limit, format },
        } => users::list(ctx, limit, format).await,
        Commands::Workspace { command } => match command {
            WorkspaceCommands::List => workspace::list(ctx),
            WorkspaceCommands::Current => workspace::current(ctx).await,
            WorkspaceCommands::Set {
                name,
                global,
                config,
            } => workspace::set(ctx, &name, global, config),
            WorkspaceCommands::Unset => workspace::unset(ctx),
        },
    }
}
