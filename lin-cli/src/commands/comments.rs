// ABOUTME: Comment subcommands: view, add, edit and delete
// ABOUTME: Attachments are uploaded first and linked at the end of the comment body

use anyhow::{Result, bail};
use linear_sdk::Comment;
use std::path::Path;

use super::attachments::{self, append_link};
use super::{ensure_authenticated, find_issue};
use crate::context::AppContext;
use crate::output::format_datetime;

fn author_line(comment: &Comment) -> String {
    match &comment.user {
        Some(user) => match &user.email {
            Some(email) => format!("Author: {} ({})", user.name, email),
            None => format!("Author: {}", user.name),
        },
        None => "Author: Unknown".to_string(),
    }
}

fn was_edited(comment: &Comment) -> bool {
    comment.updated_at.is_some() && comment.updated_at != comment.created_at
}

pub async fn view(ctx: &AppContext, identifier: &str, show_ids: bool) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let issue = find_issue(&session.client, identifier, "Issue").await?;

    let Some(thread) = session.client.get_issue_comments(&issue.id).await?.issue else {
        bail!("Issue {} not found.", identifier);
    };

    println!(
        "\n💬 Comments for {} [{}]:",
        thread.identifier, session.workspace
    );
    let comments = thread.comments.nodes;
    if comments.is_empty() {
        println!("No comments found.");
        return Ok(());
    }

    for (index, comment) in comments.iter().enumerate() {
        println!("\n--- Comment {} ---", index + 1);
        if show_ids {
            println!("ID: {}", comment.id);
        }
        println!("{}", author_line(comment));
        println!("Created: {}", format_datetime(comment.created_at.as_deref()));
        if was_edited(comment) {
            println!("Updated: {}", format_datetime(comment.updated_at.as_deref()));
        }
        println!("\n{}", comment.body);
    }
    Ok(())
}

pub async fn add(
    ctx: &AppContext,
    identifier: &str,
    body: &str,
    attachment: Option<&Path>,
) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let client = &session.client;
    let issue = find_issue(client, identifier, "Issue").await?;

    let mut body = body.to_string();
    if let Some(path) = attachment {
        let file = attachments::upload(client, &ctx.output, path).await?;
        attachments::attach_to_issue(client, &ctx.output, &issue.id, &file).await?;
        body = append_link(Some(&body), &file.markdown_link());
    }

    ctx.output.status(
        "💬",
        &format!(
            "Adding comment to {} in workspace {}...",
            issue.identifier, session.workspace
        ),
    );
    let payload = client.create_comment(&issue.id, &body).await?.comment_create;
    let comment = match (payload.success, payload.comment) {
        (true, Some(comment)) => comment,
        _ => bail!("Failed to add comment."),
    };

    ctx.output.success("Comment added successfully!");
    println!("ID: {}", comment.id);
    println!("{}", author_line(&comment));
    println!("Created: {}", format_datetime(comment.created_at.as_deref()));
    println!("\n{}", comment.body);
    Ok(())
}

pub async fn edit(
    ctx: &AppContext,
    comment_id: &str,
    body: &str,
    attachment: Option<&Path>,
) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let client = &session.client;

    // No issue ID is known here, so the file is only linked inline
    let mut body = body.to_string();
    if let Some(path) = attachment {
        let file = attachments::upload(client, &ctx.output, path).await?;
        body = append_link(Some(&body), &file.markdown_link());
    }

    ctx.output.status(
        "✏️",
        &format!(
            "Updating comment {} in workspace {}...",
            comment_id, session.workspace
        ),
    );
    let payload = client.update_comment(comment_id, &body).await?.comment_update;
    let comment = match (payload.success, payload.comment) {
        (true, Some(comment)) => comment,
        _ => bail!("Failed to update comment."),
    };

    ctx.output.success("Comment updated successfully!");
    println!("ID: {}", comment.id);
    println!("{}", author_line(&comment));
    println!("Updated: {}", format_datetime(comment.updated_at.as_deref()));
    println!("\n{}", comment.body);
    Ok(())
}

pub async fn delete(ctx: &AppContext, comment_id: &str) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;

    ctx.output.status(
        "🗑️",
        &format!(
            "Deleting comment {} in workspace {}...",
            comment_id, session.workspace
        ),
    );
    if !session.client.delete_comment(comment_id).await?.comment_delete.success {
        bail!("Failed to delete comment.");
    }

    ctx.output.success("Comment deleted successfully!");
    Ok(())
}
