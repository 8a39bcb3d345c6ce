// ABOUTME: Two-step file upload: request a presigned descriptor, then PUT the bytes
// ABOUTME: Returns the asset URL for attachments or inline markdown links

use std::path::Path;

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::constants::upload;
use crate::error::LinearError;
use crate::graphql::GraphQLRequest;
use crate::models::{FileUploadData, UploadFile};
use crate::{LinearClient, Result, queries};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Content type from the file extension, case-insensitive
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => upload::FALLBACK_CONTENT_TYPE,
    }
}

/// Markdown link for an uploaded file; images get the `![...]` form
pub fn markdown_link(file_name: &str, url: &str) -> String {
    let is_image = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if is_image {
        format!("![{}]({})", file_name, url)
    } else {
        format!("[{}]({})", file_name, url)
    }
}

/// File name component of a path, as shown in attachment titles
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Defaults first, API-provided headers override them
fn upload_headers(content_type: &str, descriptor: &UploadFile) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_str(content_type)
            .map_err(|e| LinearError::Upload(format!("invalid content type: {}", e)))?,
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(upload::CACHE_CONTROL));

    for header in &descriptor.headers {
        let name = HeaderName::from_bytes(header.key.as_bytes())
            .map_err(|e| LinearError::Upload(format!("invalid header '{}': {}", header.key, e)))?;
        let value = HeaderValue::from_str(&header.value)
            .map_err(|e| LinearError::Upload(format!("invalid header '{}': {}", header.key, e)))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

impl LinearClient {
    /// Ask the API for a presigned upload descriptor
    pub async fn request_upload(
        &self,
        content_type: &str,
        filename: &str,
        size: u64,
    ) -> Result<FileUploadData> {
        let request = GraphQLRequest::new(queries::FILE_UPLOAD)
            .variable("contentType", content_type)
            .variable("filename", filename)
            .variable("size", size);
        self.execute(&request).await
    }

    /// Upload a local file and return its asset URL
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let name = file_name(path);
        let content_type = content_type_for(path);

        let payload = self
            .request_upload(content_type, &name, bytes.len() as u64)
            .await?
            .file_upload;

        let descriptor = match (payload.success, payload.upload_file) {
            (true, Some(descriptor)) => descriptor,
            _ => {
                return Err(LinearError::Upload(
                    "API did not return an upload URL".to_string(),
                ));
            }
        };

        let headers = upload_headers(content_type, &descriptor)?;
        log::debug!("PUT {} ({} bytes)", name, bytes.len());

        let response = self
            .upload_client
            .put(&descriptor.upload_url)
            .headers(headers)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinearError::Upload(format!(
                "storage returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        Ok(descriptor.asset_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UploadHeader;
    use crate::test_helpers::*;
    use mockito::Matcher;
    use secrecy::SecretString;
    use std::io::Write;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("shot.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("a/b/photo.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            content_type_for(Path::new("binary")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            markdown_link("screen.png", "https://x/a"),
            "![screen.png](https://x/a)"
        );
        assert_eq!(
            markdown_link("Photo.JPG", "https://x/b"),
            "![Photo.JPG](https://x/b)"
        );
        assert_eq!(
            markdown_link("report.pdf", "https://x/c"),
            "[report.pdf](https://x/c)"
        );
        assert_eq!(markdown_link("Makefile", "https://x/d"), "[Makefile](https://x/d)");
    }

    #[test]
    fn test_upload_headers_override_defaults() {
        let descriptor = UploadFile {
            upload_url: "https://storage/put".to_string(),
            asset_url: "https://assets/a".to_string(),
            headers: vec![
                UploadHeader {
                    key: "Cache-Control".to_string(),
                    value: "private".to_string(),
                },
                UploadHeader {
                    key: "x-goog-meta-origin".to_string(),
                    value: "lin".to_string(),
                },
            ],
        };

        let headers = upload_headers("image/png", &descriptor).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "image/png");
        assert_eq!(headers[CACHE_CONTROL], "private");
        assert_eq!(headers["x-goog-meta-origin"], "lin");
    }

    #[tokio::test]
    async fn test_upload_file_two_step_flow() {
        let mut server = mock_linear_server().await;
        let upload_url = format!("{}/storage/upload", server.url());

        let descriptor_mock = server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "variables": {
                    "contentType": "image/png",
                    "filename": "screenshot.png",
                    "size": 4
                }
            })))
            .with_status(200)
            .with_body(mock_file_upload_response(&upload_url).to_string())
            .create_async()
            .await;

        let put_mock = server
            .mock("PUT", "/storage/upload")
            .match_header("content-type", "image/png")
            .match_header("cache-control", "private")
            .match_header("x-goog-meta-origin", "lin")
            .match_header("authorization", Matcher::Missing)
            .match_body(vec![0x89u8, b'P', b'N', b'G'])
            .with_status(200)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screenshot.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0x89, b'P', b'N', b'G'])
            .unwrap();

        let client = LinearClient::builder()
            .auth_token(SecretString::new("lin_api_test".to_string().into_boxed_str()))
            .base_url(Some(server.url()))
            .build()
            .unwrap();

        let asset = client.upload_file(&path).await.unwrap();
        assert_eq!(asset, "https://uploads.linear.app/asset/screenshot.png");

        descriptor_mock.assert_async().await;
        put_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_file_storage_failure() {
        let mut server = mock_linear_server().await;
        let upload_url = format!("{}/storage/upload", server.url());
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(mock_file_upload_response(&upload_url).to_string())
            .create_async()
            .await;
        server
            .mock("PUT", "/storage/upload")
            .with_status(403)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let client = LinearClient::builder()
            .auth_token(SecretString::new("lin_api_test".to_string().into_boxed_str()))
            .base_url(Some(server.url()))
            .build()
            .unwrap();

        match client.upload_file(&path).await {
            Err(LinearError::Upload(msg)) => assert!(msg.contains("403")),
            other => panic!("Expected upload error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upload_missing_file() {
        let client = LinearClient::new("lin_api_test".to_string()).unwrap();
        let result = client.upload_file(Path::new("/nonexistent/file.png")).await;
        assert!(matches!(result, Err(LinearError::Io(_))));
    }
}
