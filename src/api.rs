//! HTTP client for the public storefront endpoint.
//!
//! The tenant is selected by the `x-subdomain` header rather than the URL, so
//! one base URL serves every storefront.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::tenant::PublicPayload;

/// Header carrying the tenant label.
pub const SUBDOMAIN_HEADER: &str = "x-subdomain";

/// Client for `GET {base_url}{public_path}`.
#[derive(Debug, Clone)]
pub struct PublicClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PublicClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: build_http_client(Duration::from_secs(config.timeout_secs)),
            endpoint: public_endpoint(&config.base_url, &config.public_path),
        }
    }

    /// Fully-qualified endpoint this client targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode one tenant's public payload.
    pub async fn fetch(&self, subdomain: &str) -> Result<PublicPayload, ApiError> {
        tracing::info!(endpoint = %self.endpoint, subdomain, "fetching public storefront data");
        let response = self
            .http
            .get(&self.endpoint)
            .header(SUBDOMAIN_HEADER, subdomain)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), body));
        }
        let payload: PublicPayload = serde_json::from_str(&body)?;
        tracing::info!(
            tenant = %payload.system.name,
            category = %payload.system.category,
            "public storefront data loaded"
        );
        Ok(payload)
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Join base URL and path with exactly one slash between them.
pub fn public_endpoint(base_url: &str, public_path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = public_path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        assert_eq!(
            public_endpoint("http://api.tarkeeb.online/", "/public/"),
            "http://api.tarkeeb.online/public/"
        );
        assert_eq!(
            public_endpoint("http://localhost:8000", "public/"),
            "http://localhost:8000/public/"
        );
    }

    #[test]
    fn client_uses_configured_endpoint() {
        let config = ApiConfig {
            base_url: "https://api.example.test".into(),
            public_path: "/v2/public/".into(),
            ..ApiConfig::default()
        };
        let client = PublicClient::new(&config);
        assert_eq!(client.endpoint(), "https://api.example.test/v2/public/");
    }
}
