use super::{AuthService, CatalogSource, Credentials, LoginResponse, Profile, Registration};
use crate::config::JuzztConfig;
use crate::error::{JuzztError, Result};
use crate::model::{Record, RecordId};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;

/// Blocking client for the storefront REST API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    records_path: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, records_path: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            records_path: normalize_path(records_path),
        })
    }

    pub fn from_config(config: &JuzztConfig) -> Result<Self> {
        Self::new(
            &config.api_url,
            &config.records_path,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self) -> String {
        format!("{}{}", self.base_url, self.records_path)
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.records_url(), id)
    }

    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, endpoint)
    }
}

impl CatalogSource for ApiClient {
    fn fetch_records(&self) -> Result<Vec<Record>> {
        let url = self.records_url();
        tracing::debug!(%url, "fetching catalog");
        let response = check(self.client.get(&url).send()?)?;
        Ok(response.json()?)
    }

    fn fetch_record(&self, id: RecordId) -> Result<Option<Record>> {
        let url = self.record_url(id);
        tracing::debug!(%url, "fetching record");
        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(response)?.json()?))
    }
}

impl AuthService for ApiClient {
    fn register(&self, registration: &Registration) -> Result<()> {
        let response = self
            .client
            .post(self.auth_url("register"))
            .json(registration)
            .send()?;
        check(response)?;
        Ok(())
    }

    fn login(&self, credentials: &Credentials) -> Result<String> {
        let response = self
            .client
            .post(self.auth_url("login"))
            .json(credentials)
            .send()?;
        let body: LoginResponse = check(response)?.json()?;
        Ok(body.token)
    }

    fn profile(&self, token: &str) -> Result<Profile> {
        let response = self
            .client
            .get(self.auth_url("profile"))
            .bearer_auth(token)
            .send()?;
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(JuzztError::NotLoggedIn);
        }
        Ok(check(response)?.json()?)
    }
}

fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        Err(JuzztError::Api(format!(
            "{} ({}): {}",
            failure_kind(status),
            status,
            body.trim()
        )))
    }
}

fn failure_kind(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server error"
    } else {
        "request rejected"
    }
}

/// `records`, `/records/` and ` /records` all become `/records`.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str, records: &str) -> ApiClient {
        ApiClient::new(base, records, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn builds_catalog_urls() {
        let api = client("http://localhost:8080/", "records");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.records_url(), "http://localhost:8080/records");
        assert_eq!(api.record_url(7), "http://localhost:8080/records/7");

        let api = client("http://shop.test", "/api/records/");
        assert_eq!(api.records_url(), "http://shop.test/api/records");
    }

    #[test]
    fn builds_auth_urls() {
        let api = client("http://localhost:8080", "/records");
        assert_eq!(
            api.auth_url("login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    #[test]
    fn normalizes_record_paths() {
        assert_eq!(normalize_path("records"), "/records");
        assert_eq!(normalize_path(" /api/records/ "), "/api/records");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn from_config_uses_configured_endpoint() {
        let config = JuzztConfig {
            api_url: "http://example.test".into(),
            records_path: "/api/records".into(),
            ..Default::default()
        };
        let api = ApiClient::from_config(&config).unwrap();
        assert_eq!(api.records_url(), "http://example.test/api/records");
    }
}
