//! File-to-URL adapter.
//!
//! Converts an uploaded file into an embeddable `data:` URL, standing in
//! for a real object-storage upload. Single-shot: the read either resolves
//! with a URL or fails with the underlying I/O error.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use tokio::fs;

use crate::errors::AppResult;

/// Result of an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub file_url: String,
}

/// Adapter turning files into data URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileUrlAdapter;

impl FileUrlAdapter {
    /// Read the file at `path` and encode it as a data URL.
    pub async fn upload(&self, path: impl AsRef<Path>) -> AppResult<UploadedFile> {
        let path = path.as_ref();
        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        Ok(UploadedFile {
            file_url: data_url(&bytes, name),
        })
    }
}

/// Build a `data:<mime>;base64,<payload>` URL from raw bytes and the source
/// file name.
pub fn data_url(bytes: &[u8], file_name: &str) -> String {
    format!(
        "data:{};base64,{}",
        content_type(file_name),
        STANDARD.encode(bytes)
    )
}

fn content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type("license-front.JPG"), "image/jpeg");
        assert_eq!(content_type("scan.png"), "image/png");
        assert_eq!(content_type("passport.pdf"), "application/pdf");
        assert_eq!(content_type("blob"), "application/octet-stream");
    }

    #[test]
    fn data_url_payload_decodes_back() {
        let url = data_url(b"hello", "note.png");
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn upload_reads_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("front.jpg");
        tokio::fs::write(&path, b"\xff\xd8\xff").await.unwrap();

        let uploaded = FileUrlAdapter.upload(&path).await.unwrap();
        assert!(uploaded.file_url.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let result = FileUrlAdapter.upload("/no/such/file.png").await;
        assert!(result.is_err());
    }
}
