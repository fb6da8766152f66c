use serde::{Deserialize, Serialize};
use snafu::Snafu;
use snafu::IntoError;

#[derive(Debug, Snafu)]
pub enum GoogleApiError
{
    #[snafu(display("curl error: {:?}", source))]
    CurlError{ source: curl::Error },
    #[snafu(display("JSON error: {:?}", source))]
    JsonError{ source: serde_json::Error },
    #[snafu(display("I/O error: {:?}", source))]
    IoError{ source: std::io::Error },
    #[snafu(display("URL error: {:?}", source))]
    UrlError{ source: url::ParseError },
    #[snafu(display("Google Photos API error: code={:?}, status={:?}, message={:?}",
        response.error.code, response.error.status, response.error.message))]
    RemoteError{ response: ErrorResponse },
    #[snafu(display("Unexpected response: {}", msg))]
    UnexpectedResponse{ msg: String },
}

impl GoogleApiError
{
    pub fn new_unexpected_response(msg: String) -> Self
    {
        GoogleApiError::UnexpectedResponse{ msg }
    }
}

impl From<curl::Error> for GoogleApiError
{
    fn from(source: curl::Error) -> Self
    {
        CurlSnafu{}.into_error(source)
    }
}

impl From<serde_json::Error> for GoogleApiError
{
    fn from(source: serde_json::Error) -> Self
    {
        JsonSnafu{}.into_error(source)
    }
}

impl From<std::io::Error> for GoogleApiError
{
    fn from(source: std::io::Error) -> Self
    {
        IoSnafu{}.into_error(source)
    }
}

impl From<url::ParseError> for GoogleApiError
{
    fn from(source: url::ParseError) -> Self
    {
        UrlSnafu{}.into_error(source)
    }
}

// The error payload returned by the service whenever a
// call's status is not 2xx.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorResponse
{
    pub error: ErrorBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_error_response_decode()
    {
        let json = "{\"error\":{\"code\":404,\"message\":\"not found\",\"status\":\"NOT_FOUND\"}}";

        let decoded = serde_json::from_str::<ErrorResponse>(json).unwrap();

        assert_eq!(decoded.error.code, Some(404));
        assert_eq!(decoded.error.message.as_deref(), Some("not found"));
        assert_eq!(decoded.error.status.as_deref(), Some("NOT_FOUND"));
    }
}
