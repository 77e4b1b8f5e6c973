//! HTTP client for the property backend
//!
//! Properties travel as GeoJSON Features; portfolios as plain JSON.

use super::traits::{ApiClient, PropertyFilter};
use crate::state::models::{Feature, FeatureCollection, Portfolio, Property};
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Errors from the backend API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for the Django backend's REST endpoints
pub struct HttpApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status,
                body,
            })
        }
    }
}

#[derive(Serialize)]
struct PortfolioPayload<'a> {
    name: &'a str,
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn check_connection(&self) -> bool {
        self.http
            .get(self.url("/api/portfolios/"))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        let mut request = self.http.get(self.url("/api/properties/"));
        if let Some(portfolio) = filter.portfolio {
            request = request.query(&[("portfolio", portfolio.to_string())]);
        }
        if let Some([min_lng, min_lat, max_lng, max_lat]) = filter.bbox {
            request = request.query(&[(
                "in_bbox",
                format!("{min_lng},{min_lat},{max_lng},{max_lat}"),
            )]);
        }

        let response = Self::check_status(request.send().await?).await?;
        let collection: FeatureCollection = response.json().await?;
        tracing::debug!(count = collection.features.len(), "listed properties");
        Ok(collection
            .features
            .into_iter()
            .map(Property::from_feature)
            .collect())
    }

    async fn get_property(&self, id: i64) -> Result<Property> {
        let response = self
            .http
            .get(self.url(&format!("/api/properties/{id}/")))
            .send()
            .await?;
        let feature: Feature = Self::check_status(response).await?.json().await?;
        Ok(Property::from_feature(feature))
    }

    async fn create_property(&self, property: &Property) -> Result<Property> {
        let response = self
            .http
            .post(self.url("/api/properties/"))
            .json(&property.to_feature())
            .send()
            .await?;
        let feature: Feature = Self::check_status(response).await?.json().await?;
        tracing::info!(name = %property.name, "created property");
        Ok(Property::from_feature(feature))
    }

    async fn update_property(&self, property: &Property) -> Result<Property> {
        let id = property
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update a property without an id"))?;
        let response = self
            .http
            .put(self.url(&format!("/api/properties/{id}/")))
            .json(&property.to_feature())
            .send()
            .await?;
        let feature: Feature = Self::check_status(response).await?.json().await?;
        tracing::info!(id, "updated property");
        Ok(Property::from_feature(feature))
    }

    async fn delete_property(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/properties/{id}/")))
            .send()
            .await?;
        Self::check_status(response).await?;
        tracing::info!(id, "deleted property");
        Ok(())
    }

    async fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        let response = self.http.get(self.url("/api/portfolios/")).send().await?;
        let portfolios = Self::check_status(response).await?.json().await?;
        Ok(portfolios)
    }

    async fn create_portfolio(&self, name: &str) -> Result<Portfolio> {
        let response = self
            .http
            .post(self.url("/api/portfolios/"))
            .json(&PortfolioPayload {
                name,
            })
            .send()
            .await?;
        let portfolio = Self::check_status(response).await?.json().await?;
        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpApiClient::new("http://localhost:8000/");
        assert_eq!(
            client.url("/api/properties/"),
            "http://localhost:8000/api/properties/"
        );
    }

    #[test]
    fn test_connection_check_fails_without_backend() {
        // port 1 is never bound; the check must degrade to false, not error
        let client = HttpApiClient::new("http://127.0.0.1:1");
        let reachable = tokio_test::block_on(client.check_connection());
        assert!(!reachable);
    }

    #[test]
    fn test_list_properties_surfaces_transport_error() {
        let client = HttpApiClient::new("http://127.0.0.1:1");
        let result = tokio_test::block_on(client.list_properties(&PropertyFilter::default()));
        assert!(result.is_err());
    }
}
