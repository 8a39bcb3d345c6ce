// ABOUTME: `workspace` subcommands: list, current, set and unset
// ABOUTME: Only `current` talks to the API; the rest touch local files and the credential store

use anyhow::{Context, Result};
use linear_sdk::storage::account_name;
use owo_colors::OwoColorize;

use crate::context::AppContext;

/// True when the credential store holds a token for the workspace
pub fn has_stored_token(ctx: &AppContext, workspace: &str) -> bool {
    matches!(ctx.store.get(&account_name(workspace)), Ok(Some(_)))
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let workspaces = ctx.workspaces.list_workspaces();
    if workspaces.is_empty() {
        println!("No workspaces configured.");
        return Ok(());
    }

    ctx.output.heading("📂 Configured workspaces:");
    for workspace in workspaces {
        let line = if has_stored_token(ctx, &workspace) {
            format!("✅ {} (authenticated)", workspace)
        } else {
            format!("❌ {} (not authenticated)", workspace)
        };
        println!("  {}", line);
    }
    Ok(())
}

pub async fn current(ctx: &AppContext) -> Result<()> {
    let (workspace, source) = ctx
        .workspaces
        .resolve_with_source(ctx.workspace_flag.as_deref());

    if ctx.output.use_color() {
        println!("\n🏷️  Current workspace: {} ({})", workspace.bold(), source);
    } else {
        println!("\n🏷️  Current workspace: {} ({})", workspace, source);
    }

    if ctx.auth(&workspace).is_authenticated().await {
        println!("✅ Authenticated");
    } else {
        println!("❌ Not authenticated");
        println!("Run: lin login <api-token> --workspace={}", workspace);
    }
    Ok(())
}

pub fn set(ctx: &mut AppContext, name: &str, global: bool, config: bool) -> Result<()> {
    if global {
        ctx.workspaces
            .set_default_workspace(name)
            .context("Failed to save the default workspace")?;
        ctx.output.success(&format!("Set default workspace to: {}", name));
    } else if config {
        ctx.workspaces
            .set_directory_config(name)
            .context("Failed to save the directory workspace")?;
        ctx.output.success(&format!(
            "Set workspace for {} to: {} (config)",
            ctx.workspaces.cwd().display(),
            name
        ));
    } else {
        let marker = ctx
            .workspaces
            .set_directory_workspace(name)
            .context("Failed to write the workspace marker file")?;
        ctx.output
            .success(&format!("Set workspace for current directory to: {}", name));
        println!("Created {}", marker.display());
    }
    Ok(())
}

pub fn unset(ctx: &mut AppContext) -> Result<()> {
    let removed = ctx
        .workspaces
        .remove_directory_config()
        .context("Failed to save the config file")?;

    match removed {
        Some(name) => ctx.output.success(&format!(
            "Removed workspace {} for {}",
            name,
            ctx.workspaces.cwd().display()
        )),
        None => println!(
            "No directory workspace configured for {}",
            ctx.workspaces.cwd().display()
        ),
    }
    Ok(())
}
