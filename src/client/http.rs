//! HTTP Client
//!
//! Async transport for the RajaOngkir API: attaches the `key` header, encodes
//! parameters and funnels every response body through the validator.

use crate::client::response::{validate_response, RateResult};
use crate::error::{Result, WoongkirError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use std::collections::BTreeMap;
use tracing::debug;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "key";

/// HTTP client for RajaOngkir requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("woongkir/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WoongkirError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Make a request with any method.
    ///
    /// Parameters become the query string for methods without a body and a
    /// form-url-encoded body otherwise.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        api_key: Option<&str>,
        params: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        debug!(%method, %url, params = params.len(), "RajaOngkir API request");

        let builder = self
            .client
            .request(method.clone(), url)
            .headers(auth_headers(api_key)?);

        let builder = if has_body(&method) {
            builder.form(params)
        } else if params.is_empty() {
            builder
        } else {
            builder.query(params)
        };

        validate_response(send(builder).await)
    }

    /// Make a GET request, `query` appended to the URL
    pub async fn get(
        &self,
        url: &str,
        api_key: Option<&str>,
        query: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.request(Method::GET, url, api_key, query).await
    }

    /// Make a POST request with a form body
    pub async fn post(
        &self,
        url: &str,
        api_key: Option<&str>,
        body: &BTreeMap<String, String>,
    ) -> Result<RateResult> {
        self.request(Method::POST, url, api_key, body).await
    }
}

fn has_body(method: &Method) -> bool {
    ![Method::GET, Method::HEAD, Method::DELETE, Method::OPTIONS].contains(method)
}

fn auth_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(key) = api_key {
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(key)
                .map_err(|e| WoongkirError::Config(format!("Invalid API key format: {}", e)))?,
        );
    }
    Ok(headers)
}

/// Send and read the body; the status code is left to the envelope
async fn send(builder: RequestBuilder) -> Result<String> {
    let response = builder.send().await?;
    debug!(status = %response.status(), "RajaOngkir API response");
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers(Some("secret")).unwrap();
        assert_eq!(headers.get("key").unwrap(), "secret");
        assert!(auth_headers(None).unwrap().is_empty());
        assert!(auth_headers(Some("bad\nkey")).is_err());
    }

    #[tokio::test]
    async fn test_get_appends_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/city")
            .match_header("key", "secret")
            .match_query(Matcher::UrlEncoded("province".into(), "5".into()))
            .with_body(r#"{"rajaongkir":{"status":{"code":200},"results":[]}}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let query = BTreeMap::from([("province".to_string(), "5".to_string())]);
        let result = client
            .get(&format!("{}/city", server.url()), Some("secret"), &query)
            .await
            .unwrap();

        assert_eq!(result, serde_json::json!([]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cost")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("weight".into(), "1000".into()))
            .with_body(r#"{"rajaongkir":{"results":[{"code":"jne"}]}}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let body = BTreeMap::from([("weight".to_string(), "1000".to_string())]);
        let result = client
            .post(&format!("{}/cost", server.url()), None, &body)
            .await
            .unwrap();

        assert_eq!(result[0]["code"], "jne");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_status_is_ignored() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/currency")
            .with_status(400)
            .with_body(r#"{"rajaongkir":{"status":{"code":400,"description":"Bad"}}}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get(&format!("{}/currency", server.url()), None, &BTreeMap::new())
            .await
            .unwrap_err();

        assert_eq!(err.code(), "api_response_error_400");
        assert_eq!(err.message(), "Bad");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = HttpClient::new().unwrap();
        let err = client
            .get("http://127.0.0.1:1/currency", None, &BTreeMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WoongkirError::Transport(_)));
        assert_eq!(err.code(), "http_request_failed");
    }
}
