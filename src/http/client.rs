use anyhow::Result;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::ProbeError;
use crate::models::{HttpMethod, PlaceholderBody, ProbeOutcome};

pub const USER_AGENT: &str = "API-Speculator/1.0 (Powered by Guesses)";
pub const ACCEPT: &str = "application/json";

pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .danger_accept_invalid_certs(false)
            .build()?;

        let base_url = format!("{}/", base_url.trim_end_matches('/'));

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `path` against the base the way a browser resolves a relative link,
    /// so `/users` replaces the base path while `users` is appended to it.
    pub fn join(&self, path: &str) -> Result<Url, ProbeError> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path)?)
    }

    pub async fn request(&self, method: HttpMethod, path: &str) -> ProbeOutcome {
        match self.try_request(method, path).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(%method, path, error = %e, "probe failed");
                ProbeOutcome::failure(e.to_string())
            }
        }
    }

    async fn try_request(
        &self,
        method: HttpMethod,
        path: &str,
    ) -> Result<ProbeOutcome, ProbeError> {
        let url = self.join(path)?;
        debug!(%method, %url, "sending probe");

        let mut request = self
            .client
            .request(Self::to_reqwest_method(method), url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT);

        if method.sends_body() {
            request = request.json(&PlaceholderBody::default());
        }

        self.execute_request(request).await
    }

    async fn execute_request(
        &self,
        request: RequestBuilder,
    ) -> Result<ProbeOutcome, ProbeError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = Self::collect_headers(response.headers());

        let body = response.text().await?;
        debug!(status, bytes = body.len(), "probe answered");

        Ok(ProbeOutcome::success(status, headers, &body))
    }

    /// Repeated headers are folded into one comma-separated value.
    fn collect_headers(map: &HeaderMap) -> HashMap<String, String> {
        map.keys()
            .map(|name| {
                let joined = map
                    .get_all(name)
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect::<Vec<_>>()
                    .join(", ");
                (name.to_string(), joined)
            })
            .collect()
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_relative_path_appends_to_base() {
        let url = client("https://api.example.com/base/").join("users").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/base/users");
    }

    #[test]
    fn test_trailing_slashes_collapsed() {
        let url = client("https://api.example.com/base//").join("users").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/base/users");
    }

    #[test]
    fn test_leading_slash_replaces_base_path() {
        let url = client("https://api.example.com/base").join("/users").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/users");
    }

    #[test]
    fn test_empty_path_is_base() {
        let url = client("https://api.example.com").join("").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_malformed_base_is_a_url_error() {
        let err = client("not a url").join("users").unwrap_err();
        assert!(matches!(err, ProbeError::Url(_)));
    }

    #[test]
    fn test_repeated_headers_are_joined() {
        let mut map = HeaderMap::new();
        map.append("set-cookie", HeaderValue::from_static("a=1"));
        map.append("set-cookie", HeaderValue::from_static("b=2"));
        map.insert("content-type", HeaderValue::from_static("application/json"));

        let headers = HttpClient::collect_headers(&map);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_non_utf8_header_value_survives() {
        let mut map = HeaderMap::new();
        map.insert("x-label", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let headers = HttpClient::collect_headers(&map);
        assert_eq!(headers.get("x-label").map(String::as_str), Some("caf\u{fffd}"));
    }

    #[tokio::test]
    async fn test_malformed_base_becomes_failure_outcome() {
        let outcome = client("").request(HttpMethod::Get, "health").await;
        match outcome {
            ProbeOutcome::Failure { message } => assert!(message.starts_with("invalid URL")),
            ProbeOutcome::Success { .. } => panic!("expected failure"),
        }
    }
}
