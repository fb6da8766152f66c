use url::Url;

use super::err::GoogleApiError;
use super::msgs::*;
use super::query::{self, ListQuery};
use super::transport::{execute_checked, expect_empty_body, HttpRequest, Transport};

pub const BASE_URL: &str = "https://photoslibrary.googleapis.com/v1/sharedAlbums";

/// Request methods belonging to the `sharedAlbums` resource.
pub struct SharedAlbums
{
    base_url: Url,
}

impl SharedAlbums
{
    pub fn new() -> Self
    {
        SharedAlbums
        {
            base_url: Url::parse(BASE_URL).expect("Can't decode hard-coded URL"),
        }
    }

    pub fn get(&self, client: &impl Transport, share_token: &str) -> Result<Album, GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}", self.base_url, share_token))?;

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn join(&self, client: &impl Transport, request: SharedAlbumsJoinRequest)
        -> Result<SharedAlbumsJoinResponse, GoogleApiError>
    {
        let url = Url::parse(&format!("{}:join", self.base_url))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn leave(&self, client: &impl Transport, request: SharedAlbumsLeaveRequest) -> Result<(), GoogleApiError>
    {
        let url = Url::parse(&format!("{}:leave", self.base_url))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        expect_empty_body(&data)
    }

    pub fn list(&self, client: &impl Transport, queries: &[ListQuery]) -> Result<SharedAlbumsListResponse, GoogleApiError>
    {
        let mut url = self.base_url.clone();
        query::apply_queries(&mut url, queries);

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn list_all(&self, client: &impl Transport) -> Result<Vec<Album>, GoogleApiError>
    {
        let mut shared_albums = Vec::new();
        let mut next_page_token = None;

        loop
        {
            let mut queries = Vec::new();
            if let Some(token) = next_page_token
            {
                queries.push(ListQuery::PageToken(token));
            }

            let response = self.list(client, &queries)?;

            shared_albums.extend(response.shared_albums.unwrap_or_default());

            next_page_token = response.next_page_token;

            match &next_page_token
            {
                Some(token) if !token.is_empty() => (),
                _ => break,
            }
        }

        Ok(shared_albums)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::api::transport::testing::FakeTransport;

    #[test]
    fn test_get_uses_share_token_path()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{\"id\":\"album-1\",\"shareInfo\":{\"shareToken\":\"tok\"}}"),
        ]);

        let album = SharedAlbums::new().get(&client, "tok").unwrap();

        assert_eq!(album.id.as_deref(), Some("album-1"));
        assert_eq!(client.request_urls(),
            vec!["https://photoslibrary.googleapis.com/v1/sharedAlbums/tok"]);
    }

    #[test]
    fn test_join_and_leave()
    {
        let client = FakeTransport::new(vec![
            FakeTransport::response(200, "{\"album\":{\"id\":\"album-1\"}}"),
            FakeTransport::response(200, "{}"),
        ]);

        let shared_albums = SharedAlbums::new();

        let join_request = SharedAlbumsJoinRequest{ share_token: Some("tok".to_owned()) };
        let response = shared_albums.join(&client, join_request).unwrap();
        assert_eq!(response.album.unwrap().id.as_deref(), Some("album-1"));

        let leave_request = SharedAlbumsLeaveRequest{ share_token: Some("tok".to_owned()) };
        shared_albums.leave(&client, leave_request).unwrap();

        let urls = client.request_urls();
        assert_eq!(urls[0], "https://photoslibrary.googleapis.com/v1/sharedAlbums:join");
        assert_eq!(urls[1], "https://photoslibrary.googleapis.com/v1/sharedAlbums:leave");

        let requests = client.requests.borrow();
        assert_eq!(requests[1].body.as_deref(), Some("{\"shareToken\":\"tok\"}".as_bytes()));
    }
}
