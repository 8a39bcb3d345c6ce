// ABOUTME: `login` and `logout` handlers
// ABOUTME: Login validates the token against the API before it is stored

use anyhow::{Result, bail};

use crate::context::AppContext;

pub async fn login(ctx: &AppContext, api_token: &str) -> Result<()> {
    let workspace = ctx.resolve_workspace();
    ctx.output.status(
        "🔑",
        &format!("Authenticating with Linear for workspace: {}...", workspace),
    );

    ctx.auth(&workspace).login(api_token).await?;

    ctx.output.success(&format!(
        "Successfully authenticated with Linear for workspace: {}!",
        workspace
    ));
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    let workspace = ctx.resolve_workspace();
    if !ctx.auth(&workspace).logout() {
        bail!("No stored token for workspace \"{}\".", workspace);
    }

    ctx.output.success(&format!("Logged out of workspace: {}", workspace));
    Ok(())
}
