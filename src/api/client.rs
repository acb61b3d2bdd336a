use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::csrf::CsrfSession;
use crate::api::error::RequestError;
use crate::config::{Config, Endpoints};
use crate::fetch::PageQuery;
use crate::model::{Category, MessageBody, NewCategory, Order, Page, Product};

/// Client for the storefront REST backend.
///
/// Each call first refreshes the CSRF cookie, then sends the request with
/// the token header. Cookies live as long as the client.
pub struct StoreClient {
    http: Client,
    base_url: String,
    endpoints: Endpoints,
    csrf: CsrfSession,
}

impl StoreClient {
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            RequestError::InvalidInput(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        let csrf = CsrfSession::new(&config.csrf)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.api.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                config.api.connect_timeout_seconds,
            )))
            .cookie_provider(csrf.jar())
            .build()?;

        Ok(Self {
            http,
            base_url,
            endpoints: config.endpoints.clone(),
            csrf,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of the admin product list.
    pub async fn products(&self, query: &PageQuery) -> Result<Page<Product>, RequestError> {
        let pairs = query.to_query_pairs();
        let page: Page<Product> = self
            .execute(Method::GET, &self.endpoints.products, |builder| {
                builder.query(&pairs)
            })
            .await?;
        Ok(page.normalized())
    }

    pub async fn categories(&self) -> Result<Vec<Category>, RequestError> {
        self.execute(Method::GET, &self.endpoints.categories, |builder| builder)
            .await
    }

    /// Creates a category and returns the backend's confirmation message.
    ///
    /// Blank names are rejected before any request is made.
    pub async fn create_category(&self, name: &str) -> Result<Option<String>, RequestError> {
        let name = validate_category_name(name)?;
        let body: MessageBody = self
            .execute(Method::POST, &self.endpoints.create_category, |builder| {
                builder.json(&NewCategory { name })
            })
            .await?;
        Ok(body.message)
    }

    /// Full purchase history of the signed-in customer.
    pub async fn order_history(&self) -> Result<Vec<Order>, RequestError> {
        self.execute(Method::GET, &self.endpoints.order_history, |builder| builder)
            .await
    }

    fn url(&self, path: &str) -> Result<Url, RequestError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw)
            .map_err(|e| RequestError::InvalidInput(format!("Invalid URL '{}': {}", raw, e)))
    }

    async fn execute<T, F>(&self, method: Method, path: &str, build: F) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.refresh_csrf().await?;

        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        match self.csrf.header(&url) {
            Some((name, value)) => builder = builder.header(name, value),
            None => warn!(path, "no CSRF token available, sending request without it"),
        }

        debug!(%method, path, "sending request");
        let response = build(builder).send().await.map_err(|e| {
            warn!(%method, path, error = %e, "request did not complete");
            RequestError::from(e)
        })?;

        read_json(response).await.inspect_err(|e| {
            warn!(%method, path, kind = e.error_type(), error = %e, "request failed");
        })
    }

    async fn refresh_csrf(&self) -> Result<(), RequestError> {
        let url = self.url(&self.endpoints.csrf_cookie)?;
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "CSRF cookie request failed");
        }
        Ok(())
    }
}

/// Rejects empty or whitespace-only names; returns the trimmed name.
pub fn validate_category_name(name: &str) -> Result<&str, RequestError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RequestError::InvalidInput(
            "Category name must not be empty.".to_string(),
        ));
    }
    Ok(trimmed)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<MessageBody>(&body)
            .ok()
            .and_then(|body| body.message);
        return Err(RequestError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&body).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_names_are_rejected() {
        assert!(matches!(
            validate_category_name(""),
            Err(RequestError::InvalidInput(_))
        ));
        assert!(validate_category_name("   ").is_err());
        assert_eq!(validate_category_name("  Rings ").unwrap(), "Rings");
    }

    #[test]
    fn rejects_malformed_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(
            StoreClient::new(&config),
            Err(RequestError::InvalidInput(_))
        ));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let mut config = Config::default();
        config.api.base_url = "http://shop.test/".to_string();
        let client = StoreClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://shop.test");
        assert_eq!(
            client.url("/api/danhmucts").unwrap().as_str(),
            "http://shop.test/api/danhmucts"
        );
    }
}
