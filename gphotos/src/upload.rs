use std::path::{Path, PathBuf};

use snafu::Snafu;
use snafu::IntoError;

use crate::api::GoogleApiError;
use crate::api::albums::Albums;
use crate::api::media_items::MediaItems;
use crate::api::msgs::*;
use crate::api::query::ListQuery;
use crate::api::transport::Transport;
use crate::api::uploads::Uploads;

#[derive(Debug, Snafu)]
pub enum UploadError
{
    #[snafu(display("Google Photos Error: {:?}", source))]
    ApiError{ source: GoogleApiError },
    #[snafu(display("I/O error: {:?}", source))]
    IoError{ source: std::io::Error },
    #[snafu(display("Batch create item failed: code={:?}, message={:?}", status.code, status.message))]
    BatchItemFailed{ status: Status },
    #[snafu(display("Batch create result is missing the created media item"))]
    MissingMediaItem,
}

impl From<GoogleApiError> for UploadError
{
    fn from(source: GoogleApiError) -> Self
    {
        ApiSnafu{}.into_error(source)
    }
}

impl From<std::io::Error> for UploadError
{
    fn from(source: std::io::Error) -> Self
    {
        IoSnafu{}.into_error(source)
    }
}

/// Turns local files into media items in one logical operation:
/// upload the bytes, batch-create items referencing the returned
/// tokens, then delete the local files once every item is confirmed.
pub struct Uploader
{
    albums: Albums,
    media_items: MediaItems,
    uploads: Uploads,
}

impl Uploader
{
    pub fn new() -> Self
    {
        Uploader
        {
            albums: Albums::new(),
            media_items: MediaItems::new(),
            uploads: Uploads::new(),
        }
    }

    pub fn upload(&self, client: &impl Transport, file_paths: &[PathBuf]) -> Result<Vec<MediaItem>, UploadError>
    {
        let request = MediaItemsBatchCreateRequest
        {
            new_media_items: self.new_media_items(client, file_paths)?,
            ..Default::default()
        };

        self.create_and_confirm(client, request)
    }

    pub fn upload_to_album(&self, client: &impl Transport, file_paths: &[PathBuf], album: &Album)
        -> Result<Vec<MediaItem>, UploadError>
    {
        let request = MediaItemsBatchCreateRequest
        {
            album_id: album.id.clone(),
            new_media_items: self.new_media_items(client, file_paths)?,
            ..Default::default()
        };

        self.create_and_confirm(client, request)
    }

    /// Resolves the album by title, creating it if no album with that
    /// title exists, then uploads into it.
    pub fn upload_to_album_title(&self, client: &impl Transport, file_paths: &[PathBuf], title: &str)
        -> Result<(Album, Vec<MediaItem>), UploadError>
    {
        let album = self.resolve_album(client, title)?;
        let items = self.upload_to_album(client, file_paths, &album)?;

        Ok((album, items))
    }

    fn resolve_album(&self, client: &impl Transport, title: &str) -> Result<Album, UploadError>
    {
        let mut next_page_token: Option<String> = None;

        loop
        {
            let mut queries = vec![ListQuery::PageSize(1)];
            if let Some(token) = next_page_token
            {
                queries.push(ListQuery::PageToken(token));
            }

            let response = self.albums.list(client, &queries)?;

            for album in response.albums.unwrap_or_default()
            {
                // Exact title comparison - first match wins

                if album.title.as_deref() == Some(title)
                {
                    return Ok(album);
                }
            }

            next_page_token = response.next_page_token;

            match &next_page_token
            {
                Some(token) if !token.is_empty() => (),
                _ => break,
            }
        }

        let request = AlbumsCreateRequest
        {
            album: Album
            {
                title: Some(title.to_owned()),
                ..Default::default()
            },
        };

        Ok(self.albums.create(client, request)?)
    }

    fn new_media_items(&self, client: &impl Transport, file_paths: &[PathBuf])
        -> Result<Vec<NewMediaItem>, UploadError>
    {
        let mut items = Vec::new();

        for file_path in file_paths
        {
            let filename = upload_filename(file_path);
            let token = self.uploads.upload_media(client, file_path, &filename)?;

            items.push(NewMediaItem
            {
                description: Some(file_path.to_string_lossy().to_string()),
                simple_media_item: Some(SimpleMediaItem{ upload_token: token }),
            });
        }

        Ok(items)
    }

    fn create_and_confirm(&self, client: &impl Transport, request: MediaItemsBatchCreateRequest)
        -> Result<Vec<MediaItem>, UploadError>
    {
        let response = self.media_items.batch_create(client, request)?;

        let results = response.new_media_item_results.unwrap_or_default();

        // Check every status before touching any local file

        for result in results.iter()
        {
            let success = result.status.as_ref().map(|s| s.is_success()).unwrap_or(false);

            if !success
            {
                return Err(UploadError::BatchItemFailed
                {
                    status: result.status.clone().unwrap_or_default(),
                });
            }
        }

        let mut items = Vec::new();

        for result in results
        {
            let media_item = result.media_item.ok_or(UploadError::MissingMediaItem)?;

            if let Some(description) = &media_item.description
            {
                std::fs::remove_file(description)?;
            }

            items.push(media_item);
        }

        Ok(items)
    }
}

fn upload_filename(path: &Path) -> String
{
    match path.file_name()
    {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.to_string_lossy().to_string(),
    }
}
