use url::Url;

use super::err::GoogleApiError;
use super::msgs::*;
use super::query::{self, ListQuery};
use super::transport::{execute_checked, HttpRequest, Transport};

pub const BASE_URL: &str = "https://photoslibrary.googleapis.com/v1/mediaItems";

/// Request methods belonging to the `mediaItems` resource.
pub struct MediaItems
{
    base_url: Url,
}

impl MediaItems
{
    pub fn new() -> Self
    {
        MediaItems
        {
            base_url: Url::parse(BASE_URL).expect("Can't decode hard-coded URL"),
        }
    }

    pub fn batch_create(&self, client: &impl Transport, request: MediaItemsBatchCreateRequest)
        -> Result<MediaItemsBatchCreateResponse, GoogleApiError>
    {
        let url = Url::parse(&format!("{}:batchCreate", self.base_url))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn batch_get(&self, client: &impl Transport, media_item_ids: &[String])
        -> Result<MediaItemsBatchGetResponse, GoogleApiError>
    {
        let mut url = Url::parse(&format!("{}:batchGet", self.base_url))?;

        for media_item_id in media_item_ids
        {
            url.query_pairs_mut().append_pair("mediaItemIds", media_item_id);
        }

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn get(&self, client: &impl Transport, media_item_id: &str) -> Result<MediaItem, GoogleApiError>
    {
        let url = Url::parse(&format!("{}/{}", self.base_url, media_item_id))?;

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn list(&self, client: &impl Transport, queries: &[ListQuery]) -> Result<MediaItemsListResponse, GoogleApiError>
    {
        let mut url = self.base_url.clone();
        query::apply_queries(&mut url, queries);

        let data = execute_checked(client, HttpRequest::get(url))?;

        Ok(serde_json::from_slice(&data)?)
    }

    pub fn list_all(&self, client: &impl Transport) -> Result<Vec<MediaItem>, GoogleApiError>
    {
        let mut media_items = Vec::new();
        let mut next_page_token = None;

        loop
        {
            let mut queries = Vec::new();
            if let Some(token) = next_page_token
            {
                queries.push(ListQuery::PageToken(token));
            }

            let response = self.list(client, &queries)?;

            media_items.extend(response.media_items.unwrap_or_default());

            next_page_token = response.next_page_token;

            match &next_page_token
            {
                Some(token) if !token.is_empty() => (),
                _ => break,
            }
        }

        Ok(media_items)
    }

    /// The request only shapes the search - filtering semantics are
    /// entirely server-side.
    pub fn search(&self, client: &impl Transport, request: MediaItemsSearchRequest)
        -> Result<MediaItemsSearchResponse, GoogleApiError>
    {
        let url = Url::parse(&format!("{}:search", self.base_url))?;
        let body = serde_json::to_vec(&request)?;

        let data = execute_checked(client, HttpRequest::post(url).with_json_body(body))?;

        Ok(serde_json::from_slice(&data)?)
    }
}
