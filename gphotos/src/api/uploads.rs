use std::path::Path;

use url::Url;

use super::err::GoogleApiError;
use super::msgs::UploadToken;
use super::transport::{execute_checked, execute_response, HttpRequest, Transport};

pub const BASE_URL: &str = "https://photoslibrary.googleapis.com/v1/uploads";

/// Raw byte uploads. The returned token is consumed by a subsequent
/// media item creation call.
pub struct Uploads
{
    base_url: Url,
}

impl Uploads
{
    pub fn new() -> Self
    {
        Uploads
        {
            base_url: Url::parse(BASE_URL).expect("Can't decode hard-coded URL"),
        }
    }

    pub fn upload_media(&self, client: &impl Transport, file_path: &Path, filename: &str)
        -> Result<UploadToken, GoogleApiError>
    {
        let bytes = std::fs::read(file_path)?;

        let request = HttpRequest::post(self.base_url.clone())
            .with_header("Content-Type", "application/octet-stream")
            .with_header("X-Goog-Upload-File-Name", filename)
            .with_header("X-Goog-Upload-Protocol", "raw")
            .with_body(bytes);

        let data = execute_checked(client, request)?;

        Ok(UploadToken::new(String::from_utf8_lossy(&data).to_string()))
    }

    // Single-chunk resumable flow: start, then upload and finalize
    // against the continuation URL the service hands back.

    pub fn resumable_upload(&self, client: &impl Transport, file_path: &Path, filename: &str)
        -> Result<UploadToken, GoogleApiError>
    {
        let bytes = std::fs::read(file_path)?;

        let content_type = mime_guess::from_path(filename).first_or_octet_stream();

        let start = HttpRequest::post(self.base_url.clone())
            .with_header("X-Goog-Upload-Command", "start")
            .with_header("X-Goog-Upload-Content-Type", content_type.essence_str())
            .with_header("X-Goog-Upload-File-Name", filename)
            .with_header("X-Goog-Upload-Protocol", "resumable")
            .with_header("X-Goog-Upload-Raw-Size", &bytes.len().to_string());

        let response = execute_response(client, start)?;

        let upload_url = response.header("X-Goog-Upload-URL")
            .ok_or_else(|| GoogleApiError::new_unexpected_response(
                "Resumable upload start response is missing the X-Goog-Upload-URL header".to_owned()))?;
        let upload_url = Url::parse(upload_url)?;

        let finalize = HttpRequest::post(upload_url)
            .with_header("X-Goog-Upload-Command", "upload, finalize")
            .with_header("X-Goog-Upload-Offset", "0")
            .with_body(bytes);

        let data = execute_checked(client, finalize)?;

        Ok(UploadToken::new(String::from_utf8_lossy(&data).to_string()))
    }
}
