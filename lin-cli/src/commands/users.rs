// ABOUTME: `users list` handler
// ABOUTME: Deactivated users are dropped before rendering

use anyhow::Result;
use linear_sdk::User;

use super::ensure_authenticated;
use crate::cli::OutputArgs;
use crate::context::AppContext;
use crate::output::{JsonFormatter, TableFormatter, found_line};

pub fn active_only(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|u| u.active).collect()
}

pub async fn list(ctx: &AppContext, limit: i32, format: OutputArgs) -> Result<()> {
    let session = ensure_authenticated(ctx).await?;
    let users = active_only(session.client.get_users(limit).await?.users.nodes);

    if format.json {
        println!("{}", JsonFormatter::new(format.pretty).format(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("👤 No users found in workspace \"{}\"", session.workspace);
        return Ok(());
    }

    ctx.output.heading(&format!("👤 Users [{}]", session.workspace));
    println!(
        "{}",
        TableFormatter::new(ctx.output.use_color()).format_users(&users)
    );
    println!("\n{}", found_line(users.len(), "user"));
    Ok(())
}
