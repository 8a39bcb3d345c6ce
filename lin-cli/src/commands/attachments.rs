// ABOUTME: Shared attachment flow: upload a local file, then record it on an issue
// ABOUTME: Produces the markdown link handlers append to descriptions and comments

use anyhow::{Context, Result};
use linear_sdk::LinearClient;
use linear_sdk::upload::{file_name, markdown_link};
use std::path::Path;

use crate::cli_output::CliOutput;
use crate::constants::attachments;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub asset_url: String,
}

impl UploadedFile {
    pub fn markdown_link(&self) -> String {
        markdown_link(&self.file_name, &self.asset_url)
    }
}

/// `body` followed by a blank line and the link, or just the link
pub fn append_link(body: Option<&str>, link: &str) -> String {
    match body.filter(|b| !b.is_empty()) {
        Some(body) => format!("{}\n\n{}", body, link),
        None => link.to_string(),
    }
}

pub async fn upload(
    client: &LinearClient,
    output: &CliOutput,
    path: &Path,
) -> Result<UploadedFile> {
    output.status("📎", &format!("Uploading attachment: {}", path.display()));
    let asset_url = client
        .upload_file(path)
        .await
        .with_context(|| format!("Failed to upload attachment {}", path.display()))?;
    output.success("File uploaded successfully!");

    Ok(UploadedFile {
        file_name: file_name(path),
        asset_url,
    })
}

/// Create the attachment record on the issue; `Ok(false)` when the API declines it
pub async fn attach_to_issue(
    client: &LinearClient,
    output: &CliOutput,
    issue_id: &str,
    file: &UploadedFile,
) -> Result<bool> {
    output.status("📎", &format!("Creating attachment: {}", file.file_name));
    let payload = client
        .create_attachment(
            issue_id,
            &file.asset_url,
            &file.file_name,
            Some(attachments::SUBTITLE),
        )
        .await?
        .attachment_create;

    if payload.success {
        output.success("Attachment created successfully!");
    } else {
        output.error("Failed to create attachment in Linear");
    }
    Ok(payload.success)
}
