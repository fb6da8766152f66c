use url::Url;

use super::err::GoogleApiError;
use super::msgs::*;
use super::query::{self, ListQuery};
use super::transport::{execute_checked, expect_empty_body, HttpRequest, Transport};

pub const BASE_URL: &str = "https://photoslibrary.googleapis.com/v1/albums";

/// Request methods belonging to the `albums` resource.
pub struct Albums
{
    base_url: Url,
}

impl Albums
{
    pub fn new() -> Self
    {
        Albums
        {
            base_url: Url::parse(BASE_URL).expect("Can't decode hard-coded URL"),
        }
    }

    pub fn add_enrichment(&self, client: &impl Transport, album_id: &str, request: AlbumsAddEnrichmentRequest)
        -> Result<AlbumsAddEnrichmentResponse, GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}:addEnrichment", self.base_url, album_id))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn batch_add_media_items(&self, client: &impl Transport, album_id: &str, request: AlbumsBatchAddMediaItemsRequest)
        -> Result<(), GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}:batchAddMediaItems", self.base_url, album_id))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        expect_empty_body(&data)
    }

    pub fn batch_remove_media_items(&self, client: &impl Transport, album_id: &str, request: AlbumsBatchRemoveMediaItemsRequest)
        -> Result<(), GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}:batchRemoveMediaItems", self.base_url, album_id))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        expect_empty_body(&data)
    }

    pub fn create(&self, client: &impl Transport, request: AlbumsCreateRequest) -> Result<Album, GoogleApiError>
    {
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(self.base_url.clone()).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn get(&self, client: &impl Transport, album_id: &str) -> Result<Album, GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}", self.base_url, album_id))?;

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn list(&self, client: &impl Transport, queries: &[ListQuery]) -> Result<AlbumsListResponse, GoogleApiError>
    {
        let mut url = self.base_url.clone();
        query::apply_queries(&mut url, queries);

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    /// Follows continuation tokens until the final page and returns
    /// the union of all pages in server order.
    pub fn list_all(&self, client: &impl Transport) -> Result<Vec<Album>, GoogleApiError>
    {
        let mut albums = Vec::new();
        let mut next_page_token = None;

        loop
        {
            let mut queries = Vec::new();
            if let Some(token) = next_page_token
            {
                queries.push(ListQuery::PageToken(token));
            }

            let response = self.list(client, &queries)?;

            albums.extend(response.albums.unwrap_or_default());

            next_page_token = response.next_page_token;

            match &next_page_token
            {
                Some(token) if !token.is_empty() => (),
                _ => break,
            }
        }

        Ok(albums)
    }

    pub fn share(&self, client: &impl Transport, album_id: &str, request: AlbumsShareRequest)
        -> Result<AlbumsShareResponse, GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}:share", self.base_url, album_id))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn unshare(&self, client: &impl Transport, album_id: &str) -> Result<(), GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}:unshare", self.base_url, album_id))?;

        let data = execute_checked(client, HttpRequest::post(url))?;

        expect_empty_body(&data)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::api::transport::testing::FakeTransport;
    use crate::api::transport::Method;

    #[test]
    fn test_list_all_unions_pages_and_stops_on_empty_token()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200,
                "{\"albums\":[{\"id\":\"a\"},{\"id\":\"b\"}],\"nextPageToken\":\"abc\"}"),
            FakeTransport::response(200,
                "{\"albums\":[{\"id\":\"c\"}],\"nextPageToken\":\"\"}"),
        ]);

        let albums = Albums::new().list_all(&client).unwrap();

        let ids: Vec<&str> = albums.iter().map(|a| a.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let urls = client.request_urls();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://photoslibrary.googleapis.com/v1/albums");
        assert_eq!(urls[1], "https://photoslibrary.googleapis.com/v1/albums?pageToken=abc");
    }

    #[test]
    fn test_get_builds_item_url()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{\"id\":\"album-1\",\"title\":\"Trip\"}"),
        ]);

        let album = Albums::new().get(&client, "album-1").unwrap();

        assert_eq!(album.title.as_deref(), Some("Trip"));
        assert_eq!(client.request_urls(),
            vec!["https://photoslibrary.googleapis.com/v1/albums/album-1"]);
        assert_eq!(client.requests.borrow()[0].method, Method::Get);
    }

    #[test]
    fn test_share_builds_action_url()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{\"shareInfo\":{\"shareToken\":\"tok\"}}"),
        ]);

        let response = Albums::new().share(&client, "album-1", AlbumsShareRequest::default()).unwrap();

        assert_eq!(response.share_info.unwrap().share_token.as_deref(), Some("tok"));
        assert_eq!(client.request_urls(),
            vec!["https://photoslibrary.googleapis.com/v1/albums/album-1:share"]);
        assert_eq!(client.requests.borrow()[0].method, Method::Post);
    }

    #[test]
    fn test_batch_add_sends_media_item_ids()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{}"),
        ]);

        let request = AlbumsBatchAddMediaItemsRequest
        {
            media_item_ids: vec!["m1".to_owned(), "m2".to_owned()],
        };

        Albums::new().batch_add_media_items(&client, "album-1", request).unwrap();

        let requests = client.requests.borrow();
        assert_eq!(requests[0].url.as_str(),
            "https://photoslibrary.googleapis.com/v1/albums/album-1:batchAddMediaItems");
        assert_eq!(requests[0].body.as_deref(),
            Some("{\"mediaItemIds\":[\"m1\",\"m2\"]}".as_bytes()));
    }

    #[test]
    fn test_create_decodes_album()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{\"id\":\"new-1\",\"title\":\"NewAlbum\",\"isWriteable\":true}"),
        ]);

        let request = AlbumsCreateRequest
        {
            album: Album
            {
                title: Some("NewAlbum".to_owned()),
                ..Default::default()
            },
        };

        let album = Albums::new().create(&client, request).unwrap();

        assert_eq!(album.id.as_deref(), Some("new-1"));

        let requests = client.requests.borrow();
        assert_eq!(requests[0].body.as_deref(),
            Some("{\"album\":{\"title\":\"NewAlbum\"}}".as_bytes()));
    }
}
