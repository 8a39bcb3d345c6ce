// ABOUTME: Issue subcommands: view, edit, create, search, state and delete
// ABOUTME: Inputs carry only supplied options; identifiers resolve to IDs before mutating

use anyhow::{Result, bail};
use linear_sdk::{
    IdComparator, Issue, IssueCreateInput, IssueFilter, IssueUpdateInput, NameComparator,
    WorkflowState, priority_label,
};
use std::collections::BTreeMap;

use super::attachments::{self, append_link};
use super::{ensure_authenticated, find_issue};
use crate::cli::{IssueCreateArgs, IssueEditArgs, IssueSearchArgs};
use crate::context::AppContext;
use crate::output::{JsonFormatter, TableFormatter, format_datetime, found_line};
use crate::types::WorkflowStateType;

const NO_UPDATES: &str = "No updates provided. Use --summary, --description, --project-id, \
                          --priority, --assignee-id, --parent-id, or --attachment options.";

fn print_issue(issue: &Issue, workspace: &str) {
    println!("\n📋 Issue: {} [{}]", issue.identifier, workspace);
    println!("Title: {}", issue.title);
    if let Some(state) = &issue.state {
        println!("State: {} ({})", state.name, state.kind);
    }
    match &issue.assignee {
        Some(user) => match &user.email {
            Some(email) => println!("Assignee: {} ({})", user.name, email),
            None => println!("Assignee: {}", user.name),
        },
        None => println!("Assignee: Unassigned"),
    }
    println!("Priority: {}", priority_label(issue.priority));
    if let Some(team) = &issue.team {
        println!("Team: {} ({}) - ID: {}", team.name, team.key, team.id);
    }
    if let Some(project) = &issue.project {
        println!("Project: {} - ID: {}", project.name, project.id);
    }
    if let Some(creator) = &issue.creator {
        println!("Creator: {}", creator.name);
    }
    println!("Created: {}", format_datetime(issue.created_at.as_deref()));
    if let Some(url) = &issue.url {
        println!("URL: {}", url);
    }
    if let Some(description) = issue.description.as_deref().filter(|d| !d.is_empty()) {
        println!("\nDescription:\n{}", description);
    }
}

pub async fn view(ctx: &AppContext, identifier: &str) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let issue = find_issue(&session.client, identifier, "Issue").await?;
    print_issue(&issue, &session.workspace);
    Ok(())
}

/// Update input from the edit flags; the parent is resolved separately
fn update_input(args: &IssueEditArgs) -> IssueUpdateInput {
    IssueUpdateInput {
        title: args.summary.clone(),
        description: args.description.clone(),
        project_id: args.project_id.clone(),
        priority: args.priority,
        assignee_id: args.assignee_id.clone(),
        ..Default::default()
    }
}

pub async fn edit(ctx: &AppContext, args: &IssueEditArgs) -> Result<()> {
    let mut updates = update_input(args);
    if updates.is_empty() && args.parent_id.is_none() && args.attachment.is_none() {
        bail!(NO_UPDATES);
    }

    let session = ensure_authenticated(ctx).await?;
    let client = &session.client;
    let issue = find_issue(client, &args.identifier, "Issue").await?;

    if let Some(parent) = &args.parent_id {
        updates.parent_id = Some(find_issue(client, parent, "Parent issue").await?.id);
    }

    if let Some(path) = &args.attachment {
        let file = attachments::upload(client, &ctx.output, path).await?;
        if !attachments::attach_to_issue(client, &ctx.output, &issue.id, &file).await? {
            bail!("Failed to create attachment in Linear");
        }
    }

    if updates.is_empty() {
        ctx.output.success("Attachment operation completed!");
        return Ok(());
    }

    ctx.output.status(
        "✏️",
        &format!(
            "Updating issue {} in workspace {}...",
            args.identifier, session.workspace
        ),
    );
    let payload = client.update_issue(&issue.id, &updates).await?.issue_update;
    if !payload.success {
        bail!("Failed to update issue.");
    }

    ctx.output.success("Issue updated successfully!");
    if let Some(updated) = payload.issue {
        println!("Title: {}", updated.title);
        if let Some(description) = &updated.description {
            println!("Description: {}", description);
        }
        println!("Priority: {}", priority_label(updated.priority));
        if let Some(project) = &updated.project {
            println!("Project: {} ({})", project.name, project.id);
        }
    }
    Ok(())
}

pub async fn create(ctx: &AppContext, args: &IssueCreateArgs) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let client = &session.client;

    let mut input = IssueCreateInput {
        title: args.title.clone(),
        team_id: args.team_id.clone(),
        description: args.description.clone(),
        project_id: args.project_id.clone(),
        assignee_id: args.assignee_id.clone(),
        priority: args.priority,
        parent_id: None,
    };
    if let Some(parent) = &args.parent_id {
        input.parent_id = Some(find_issue(client, parent, "Parent issue").await?.id);
    }

    ctx.output.status(
        "📝",
        &format!(
            "Creating issue \"{}\" in workspace {}...",
            args.title, session.workspace
        ),
    );
    let payload = client.create_issue(&input).await?.issue_create;
    let issue = match (payload.success, payload.issue) {
        (true, Some(issue)) => issue,
        _ => bail!("Failed to create issue."),
    };

    ctx.output.success("Issue created successfully!");
    println!("Issue: {}", issue.identifier);
    println!("Title: {}", issue.title);
    if let Some(url) = &issue.url {
        println!("URL: {}", url);
    }
    if let Some(description) = &issue.description {
        println!("Description: {}", description);
    }

    // The issue exists at this point; attachment problems are reported, not fatal
    if let Some(path) = &args.attachment {
        if let Err(e) = attach_and_link(ctx, client, &issue, path).await {
            ctx.output.warning(&format!("Failed to upload attachment: {:#}", e));
        }
    }
    Ok(())
}

async fn attach_and_link(
    ctx: &AppContext,
    client: &linear_sdk::LinearClient,
    issue: &Issue,
    path: &std::path::Path,
) -> Result<()> {
    let file = attachments::upload(client, &ctx.output, path).await?;
    attachments::attach_to_issue(client, &ctx.output, &issue.id, &file).await?;

    let update = IssueUpdateInput {
        description: Some(append_link(
            issue.description.as_deref(),
            &file.markdown_link(),
        )),
        ..Default::default()
    };
    if !client.update_issue(&issue.id, &update).await?.issue_update.success {
        bail!("could not add the attachment link to the description");
    }
    Ok(())
}

/// Filter from the supplied search options, `None` when none were given
pub fn search_filter(args: &IssueSearchArgs) -> Option<IssueFilter> {
    let filter = IssueFilter {
        project: args.project_id.as_deref().map(IdComparator::equals),
        team: args.team_id.as_deref().map(IdComparator::equals),
        assignee: args.assignee_id.as_deref().map(IdComparator::equals),
        state: args.status.as_deref().map(NameComparator::equals),
    };
    (!filter.is_empty()).then_some(filter)
}

pub async fn search(ctx: &AppContext, args: &IssueSearchArgs) -> Result<()> {
    let query = args.query.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let filter = search_filter(args);
    if query.is_none() && filter.is_none() {
        bail!(
            "Provide a search query or at least one filter \
             (--project-id, --team-id, --assignee-id, --status)."
        );
    }

    let session = ensure_authenticated(ctx).await?;
    let issues = match query {
        Some(term) => {
            session
                .client
                .search_issues(term, args.limit, filter.as_ref())
                .await?
                .search_issues
                .nodes
        }
        None => {
            session
                .client
                .list_issues(args.limit, filter.as_ref())
                .await?
                .issues
                .nodes
        }
    };

    if args.format.json {
        println!("{}", JsonFormatter::new(args.format.pretty).format(&issues)?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("No issues found in workspace \"{}\".", session.workspace);
        return Ok(());
    }

    ctx.output.heading(&format!("🔍 Issues [{}]", session.workspace));
    println!(
        "{}",
        TableFormatter::new(ctx.output.use_color()).format_issues(&issues)
    );
    println!("\n{}", found_line(issues.len(), "issue"));
    Ok(())
}

/// States grouped by type in display order, each group sorted by position
pub fn group_states(states: &[WorkflowState]) -> BTreeMap<WorkflowStateType, Vec<&WorkflowState>> {
    let mut sorted: Vec<&WorkflowState> = states.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut groups: BTreeMap<WorkflowStateType, Vec<&WorkflowState>> = BTreeMap::new();
    for state in sorted {
        groups
            .entry(WorkflowStateType::from(state.kind.as_str()))
            .or_default()
            .push(state);
    }
    groups
}

/// Case-insensitive lookup by state name
pub fn find_state<'a>(states: &'a [WorkflowState], name: &str) -> Option<&'a WorkflowState> {
    states.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub async fn state(
    ctx: &AppContext,
    identifier: &str,
    state_name: Option<&str>,
    list: bool,
) -> Result<()> {
    if !list && state_name.is_none() {
        bail!("State name is required. Use --list to see available states.");
    }

    let session = ensure_authenticated(ctx).await?;
    let client = &session.client;
    let issue = find_issue(client, identifier, "Issue").await?;
    let Some(team) = &issue.team else {
        bail!("Issue {} has no team; cannot look up workflow states.", identifier);
    };

    let states = client
        .get_workflow_states(&team.id)
        .await?
        .team
        .map(|t| t.states.nodes)
        .unwrap_or_default();
    let current = issue.state.as_ref().map(|s| s.name.as_str());

    if list {
        ctx.output.heading(&format!(
            "📋 Available states for team {} ({}) [{}]:",
            team.name, team.key, session.workspace
        ));
        for (kind, group) in group_states(&states) {
            println!("  {}:", kind);
            for s in group {
                let marker = if Some(s.name.as_str()) == current {
                    " ← current"
                } else {
                    ""
                };
                println!("    • {}{}", s.name, marker);
            }
        }
        return Ok(());
    }

    let requested = state_name.unwrap_or_default();
    let Some(target) = find_state(&states, requested) else {
        let mut available: Vec<&WorkflowState> = states.iter().collect();
        available.sort_by(|a, b| a.position.total_cmp(&b.position));
        for s in available {
            eprintln!("    • {}", s.name);
        }
        bail!("State \"{}\" not found. Available states are listed above.", requested);
    };

    ctx.output.status(
        "🔄",
        &format!(
            "Updating {} state to \"{}\" in workspace {}...",
            issue.identifier, target.name, session.workspace
        ),
    );
    let update = IssueUpdateInput {
        state_id: Some(target.id.clone()),
        ..Default::default()
    };
    if !client.update_issue(&issue.id, &update).await?.issue_update.success {
        bail!("Failed to update issue state.");
    }

    ctx.output.success(&format!("{} → {}", issue.identifier, target.name));
    Ok(())
}

pub async fn delete(ctx: &AppContext, identifier: &str) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let issue = find_issue(&session.client, identifier, "Issue").await?;

    ctx.output.status(
        "🗑️",
        &format!(
            "Deleting {} in workspace {}...",
            issue.identifier, session.workspace
        ),
    );
    if !session.client.delete_issue(&issue.id).await?.issue_delete.success {
        bail!("Failed to delete issue.");
    }

    ctx.output.success(&format!("Deleted {}: {}", issue.identifier, issue.title));
    Ok(())
}
