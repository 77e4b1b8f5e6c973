//! Backend API module

mod client;
mod traits;

pub use client::{ApiError, HttpApiClient};
pub use traits::{ApiClient, PropertyFilter};

#[cfg(test)]
pub use traits::MockApiClient;
