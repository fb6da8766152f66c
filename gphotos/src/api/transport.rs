use curl::easy::{Easy, List};
use url::Url;

use crate::auth::AccessToken;
use super::err::{ErrorResponse, GoogleApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method
{
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub struct HttpRequest
{
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest
{
    pub fn get(url: Url) -> Self
    {
        HttpRequest
        {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: Url) -> Self
    {
        HttpRequest
        {
            method: Method::Post,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self
    {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self
    {
        self.body = Some(body);
        self
    }

    pub fn with_json_body(self, body: Vec<u8>) -> Self
    {
        self.with_header("Content-Type", "application/json").with_body(body)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse
{
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse
{
    pub fn is_success(&self) -> bool
    {
        (self.status / 100) == 2
    }

    pub fn header(&self, name: &str) -> Option<&str>
    {
        self.headers.iter()
            .find(|h| h.0.eq_ignore_ascii_case(name))
            .map(|h| h.1.as_str())
    }
}

/// An authenticated HTTP calling capability. Each call issues
/// exactly one outbound request and blocks for the full response.
pub trait Transport
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, GoogleApiError>;
}

pub struct CurlTransport
{
    access_token: AccessToken,
}

impl CurlTransport
{
    pub fn new(access_token: AccessToken) -> Self
    {
        CurlTransport{ access_token }
    }
}

impl Transport for CurlTransport
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, GoogleApiError>
    {
        let mut list = List::new();
        list.append(&format!("Authorization: Bearer {}", urlencoding::encode(&self.access_token.secret())))?;

        for (name, value) in request.headers.iter()
        {
            list.append(&format!("{}: {}", name, value))?;
        }

        let mut handle = Easy::new();
        handle.url(&request.url.to_string())?;
        handle.http_headers(list)?;

        if request.method == Method::Post
        {
            handle.post(true)?;
            handle.post_fields_copy(request.body.as_deref().unwrap_or(&[]))?;
        }

        let mut headers = Vec::new();
        let mut data = Vec::new();
        {
            let mut transfer = handle.transfer();
            transfer.header_function(|header| {
                if let Some((name, value)) = split_header(header)
                {
                    headers.push((name, value));
                }
                true
            })?;
            transfer.write_function(|new_data| {
                data.extend_from_slice(new_data);
                Ok(new_data.len())
            })?;
            transfer.perform()?;
        }

        let status = handle.response_code()?;

        Ok(HttpResponse{ status, headers, body: data })
    }
}

fn split_header(header: &[u8]) -> Option<(String, String)>
{
    let header = String::from_utf8_lossy(header);
    let mut parts = header.splitn(2, ':');

    let name = parts.next()?.trim();
    let value = parts.next()?.trim();

    if name.is_empty()
    {
        return None;
    }

    Some((name.to_owned(), value.to_owned()))
}

// Every API call funnels through here - a non-2xx status is decoded
// as the structured error payload and returned as the call's failure.

pub(crate) fn execute_response(client: &impl Transport, request: HttpRequest) -> Result<HttpResponse, GoogleApiError>
{
    let response = client.execute(&request)?;

    if !response.is_success()
    {
        let decoded = serde_json::from_slice::<ErrorResponse>(&response.body)?;

        return Err(GoogleApiError::RemoteError{ response: decoded });
    }

    Ok(response)
}

pub(crate) fn execute_checked(client: &impl Transport, request: HttpRequest) -> Result<Vec<u8>, GoogleApiError>
{
    Ok(execute_response(client, request)?.body)
}

pub(crate) fn expect_empty_body(data: &[u8]) -> Result<(), GoogleApiError>
{
    if data.is_empty()
    {
        return Ok(());
    }

    // The service acknowledges some calls with an empty JSON object

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data)
    {
        if value.as_object().map(|o| o.is_empty()).unwrap_or(false)
        {
            return Ok(());
        }
    }

    Err(GoogleApiError::new_unexpected_response(String::from_utf8_lossy(data).to_string()))
}
