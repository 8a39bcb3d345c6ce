// ABOUTME: `projects list` handler
// ABOUTME: Renders projects as a table or raw JSON nodes

use anyhow::Result;

use super::ensure_authenticated;
use crate::cli::OutputArgs;
use crate::context::AppContext;
use crate::output::{JsonFormatter, TableFormatter, found_line};

pub async fn list(
    ctx: &AppContext,
    limit: i32,
    include_archived: bool,
    format: OutputArgs,
) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let projects = session
        .client
        .get_projects(limit, include_archived)
        .await?
        .projects
        .nodes;

    if format.json {
        println!("{}", JsonFormatter::new(format.pretty).format(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("📁 No projects found in workspace \"{}\"", session.workspace);
        return Ok(());
    }

    ctx.output.heading(&format!("📁 Projects [{}]", session.workspace));
    println!(
        "{}",
        TableFormatter::new(ctx.output.use_color()).format_projects(&projects)
    );
    println!("\n{}", found_line(projects.len(), "project"));
    Ok(())
}
