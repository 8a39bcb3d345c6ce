// ABOUTME: `teams list` handler
// ABOUTME: Team IDs shown here feed `issue create --team-id`

use anyhow::Result;

use super::ensure_authenticated;
use crate::cli::OutputArgs;
use crate::context::AppContext;
use crate::output::{JsonFormatter, TableFormatter, found_line};

pub async fn list(ctx: &AppContext, limit: i32, format: OutputArgs) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let teams = session.client.get_teams(limit).await?.teams.nodes;

    if format.json {
        println!("{}", JsonFormatter::new(format.pretty).format(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("👥 No teams found in workspace \"{}\"", session.workspace);
        return Ok(());
    }

    ctx.output.heading(&format!("👥 Teams [{}]", session.workspace));
    println!(
        "{}",
        TableFormatter::new(ctx.output.use_color()).format_teams(&teams)
    );
    println!("\n{}", found_line(teams.len(), "team"));
    Ok(())
}
