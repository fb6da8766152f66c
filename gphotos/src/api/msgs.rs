use serde::{Deserialize, Serialize};

// Resource: albums

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_writeable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_info: Option<ShareInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_items_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_media_item_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareInfo
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_album_options: Option<SharedAlbumOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareable_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_joined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumOptions
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_commentable: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsCreateRequest
{
    pub album: Album,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsListResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsAddEnrichmentRequest
{
    pub new_enrichment_item: NewEnrichmentItem,
    pub album_position: AlbumPosition,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsAddEnrichmentResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_item: Option<EnrichmentItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsBatchAddMediaItemsRequest
{
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub media_item_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsBatchRemoveMediaItemsRequest
{
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub media_item_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsShareRequest
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_album_options: Option<SharedAlbumOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsShareResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_info: Option<ShareInfo>,
}

// Positions and enrichments - input-only value objects

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionType
{
    PositionTypeUnspecified,
    FirstInAlbum,
    LastInAlbum,
    AfterMediaItem,
    AfterEnrichmentItem,
}

impl Default for PositionType
{
    fn default() -> Self
    {
        PositionType::PositionTypeUnspecified
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPosition
{
    pub position: PositionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_media_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_enrichment_item_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrichmentItem
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_enrichment: Option<TextEnrichment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_enrichment: Option<LocationEnrichment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_enrichment: Option<MapEnrichment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextEnrichment
{
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationEnrichment
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapEnrichment
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latlng: Option<LatLng>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatLng
{
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentItem
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// Resource: mediaItems

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_metadata: Option<MediaMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_info: Option<ContributorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

// The service returns creation_time, width and height as strings

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture_f_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_equivalent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VideoProcessingStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoProcessingStatus
{
    Unspecified,
    Processing,
    Ready,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributorInfo
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsListResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_items: Option<Vec<MediaItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

// Search filters are pure input - the server never returns them

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsSearchRequest
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsSearchResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_items: Option<Vec<MediaItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filters
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_filter: Option<ContentFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type_filter: Option<MediaTypeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_filter: Option<FeatureFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_archived_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_non_app_created_data: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<Date>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<DateRange>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Date
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentFilter
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_content_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_content_categories: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeFilter
{
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub media_types: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFilter
{
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub included_features: Vec<String>,
}

// Batch creation - drafts carry the upload token returned by the
// raw-upload endpoint, valid for one create call

/// Opaque token returned by the raw-upload endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct UploadToken(String);

impl UploadToken
{
    pub fn new<T: Into<String>>(token: T) -> Self
    {
        UploadToken(token.into())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsBatchCreateRequest
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub new_media_items: Vec<NewMediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_position: Option<AlbumPosition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItem
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_media_item: Option<SimpleMediaItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMediaItem
{
    pub upload_token: UploadToken,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsBatchCreateResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_media_item_results: Option<Vec<NewMediaItemResult>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItemResult
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_token: Option<UploadToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_item: Option<MediaItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemsBatchGetResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_item_results: Option<Vec<MediaItemResult>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemResult
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_item: Option<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Status
{
    // An absent or zero code is a success, matching the google.rpc
    // Status convention
    pub fn is_success(&self) -> bool
    {
        self.code.unwrap_or(0) == 0
    }
}

// Resource: sharedAlbums

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumsJoinRequest
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumsJoinResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumsLeaveRequest
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedAlbumsListResponse
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_albums: Option<Vec<Album>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn check_round_trip<T>(json: &str)
        where T: serde::de::DeserializeOwned + Serialize
    {
        let decoded: T = serde_json::from_str(json).unwrap();
        let reencoded = serde_json::to_value(&decoded).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();

        assert_eq!(reencoded, original);
    }

    #[test]
    fn test_album_round_trip()
    {
        // Absent optional fields must stay absent after a
        // decode/encode cycle

        check_round_trip::<Album>("{\"id\":\"album-1\",\"title\":\"Trip\"}");

        check_round_trip::<Album>(concat!(
            "{\"id\":\"album-1\",\"title\":\"Trip\",\"productUrl\":\"https://photos.google.com/a/1\",",
            "\"isWriteable\":true,\"mediaItemsCount\":\"42\",",
            "\"coverPhotoBaseUrl\":\"https://base/1\",\"coverPhotoMediaItemId\":\"m1\",",
            "\"shareInfo\":{\"shareToken\":\"tok\",\"isJoined\":false,",
            "\"sharedAlbumOptions\":{\"isCollaborative\":true}}}"));
    }

    #[test]
    fn test_albums_list_response_round_trip()
    {
        check_round_trip::<AlbumsListResponse>(
            "{\"albums\":[{\"id\":\"a\"},{\"id\":\"b\",\"title\":\"T\"}],\"nextPageToken\":\"abc\"}");

        check_round_trip::<AlbumsListResponse>("{}");
    }

    #[test]
    fn test_media_item_round_trip()
    {
        check_round_trip::<MediaItem>(concat!(
            "{\"id\":\"m1\",\"description\":\"d\",\"productUrl\":\"p\",\"baseUrl\":\"b\",",
            "\"mimeType\":\"image/jpeg\",\"filename\":\"photo.jpg\",",
            "\"mediaMetadata\":{\"creationTime\":\"2020-01-01T00:00:00Z\",\"width\":\"4032\",\"height\":\"3024\",",
            "\"photo\":{\"cameraMake\":\"Canon\",\"focalLength\":4.2,\"apertureFNumber\":1.8,",
            "\"isoEquivalent\":100,\"exposureTime\":\"0.008s\"}},",
            "\"contributorInfo\":{\"displayName\":\"Someone\"}}"));

        check_round_trip::<MediaItem>(concat!(
            "{\"id\":\"m2\",\"mediaMetadata\":{\"video\":{\"fps\":29.97,\"status\":\"READY\"}}}"));
    }

    #[test]
    fn test_batch_create_response_round_trip()
    {
        check_round_trip::<MediaItemsBatchCreateResponse>(concat!(
            "{\"newMediaItemResults\":[",
            "{\"uploadToken\":\"tok-1\",\"status\":{\"message\":\"Success\"},\"mediaItem\":{\"id\":\"m1\"}},",
            "{\"uploadToken\":\"tok-2\",\"status\":{\"code\":3,\"message\":\"Invalid\"}}",
            "]}"));
    }

    #[test]
    fn test_empty_search_request_carries_no_filter_bias()
    {
        let request = MediaItemsSearchRequest::default();

        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");

        // An empty filter set adds nothing either
        let request = MediaItemsSearchRequest
        {
            filters: Some(Filters::default()),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&request).unwrap(), "{\"filters\":{}}");
    }

    #[test]
    fn test_search_request_with_album_and_paging()
    {
        let request = MediaItemsSearchRequest
        {
            album_id: Some("album-1".to_owned()),
            page_size: Some(100),
            page_token: Some("abc".to_owned()),
            filters: None,
        };

        assert_eq!(serde_json::to_string(&request).unwrap(),
            "{\"albumId\":\"album-1\",\"pageSize\":100,\"pageToken\":\"abc\"}");
    }

    #[test]
    fn test_position_type_wire_names()
    {
        assert_eq!(serde_json::to_string(&PositionType::PositionTypeUnspecified).unwrap(),
            "\"POSITION_TYPE_UNSPECIFIED\"");
        assert_eq!(serde_json::to_string(&PositionType::FirstInAlbum).unwrap(),
            "\"FIRST_IN_ALBUM\"");
        assert_eq!(serde_json::to_string(&PositionType::AfterEnrichmentItem).unwrap(),
            "\"AFTER_ENRICHMENT_ITEM\"");
    }

    #[test]
    fn test_upload_token_is_transparent()
    {
        let item = SimpleMediaItem{ upload_token: UploadToken::new("tok-1") };

        assert_eq!(serde_json::to_string(&item).unwrap(), "{\"uploadToken\":\"tok-1\"}");

        let decoded = serde_json::from_str::<SimpleMediaItem>("{\"uploadToken\":\"tok-2\"}").unwrap();
        assert_eq!(decoded.upload_token.as_str(), "tok-2");
    }

    #[test]
    fn test_status_success()
    {
        assert!(Status{ code: None, message: Some("Success".to_owned()) }.is_success());
        assert!(Status{ code: Some(0), message: None }.is_success());
        assert!(!Status{ code: Some(3), message: Some("Invalid".to_owned()) }.is_success());
    }

    #[test]
    fn test_batch_create_request_shape()
    {
        let request = MediaItemsBatchCreateRequest
        {
            album_id: Some("album-1".to_owned()),
            new_media_items: vec![NewMediaItem
            {
                description: Some("/tmp/photo.jpg".to_owned()),
                simple_media_item: Some(SimpleMediaItem{ upload_token: UploadToken::new("tok-1") }),
            }],
            album_position: None,
        };

        assert_eq!(serde_json::to_string(&request).unwrap(), concat!(
            "{\"albumId\":\"album-1\",\"newMediaItems\":[",
            "{\"description\":\"/tmp/photo.jpg\",\"simpleMediaItem\":{\"uploadToken\":\"tok-1\"}}]}"));
    }
}
