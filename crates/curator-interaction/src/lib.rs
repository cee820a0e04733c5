//! Remote API clients for Curator.

pub mod http_staging_api;

pub use http_staging_api::HttpStagingApi;
