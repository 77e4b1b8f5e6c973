//! Trait abstraction for the backend API client to enable mocking in tests

use crate::state::models::{Portfolio, Property};
use anyhow::Result;
use async_trait::async_trait;

/// Server-side filters for property listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Restrict to one portfolio
    pub portfolio: Option<i64>,
    /// Bounding box as `[min_lng, min_lat, max_lng, max_lat]`
    pub bbox: Option<[f64; 4]>,
}

/// Trait for backend API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Check if the backend is reachable
    async fn check_connection(&self) -> bool;

    /// List properties, optionally filtered
    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>>;

    /// Fetch a single property
    async fn get_property(&self, id: i64) -> Result<Property>;

    /// Create a new property; returns the stored record with its id
    async fn create_property(&self, property: &Property) -> Result<Property>;

    /// Update an existing property
    async fn update_property(&self, property: &Property) -> Result<Property>;

    /// Delete a property
    async fn delete_property(&self, id: i64) -> Result<()>;

    /// List all portfolios
    async fn list_portfolios(&self) -> Result<Vec<Portfolio>>;

    /// Create a new portfolio
    async fn create_portfolio(&self, name: &str) -> Result<Portfolio>;
}
