//! Read-only access to the hosted relational backend.
//!
//! DESIGN
//! ======
//! The backend is a PostgREST service. Everything above this module talks
//! to it through the [`Backend`] trait, which takes a [`Select`] description
//! and returns raw JSON rows. [`rest::RestBackend`] is the production
//! implementation; tests substitute an in-memory mock. Typed decoding
//! happens in [`fetch`] so every service reports row-shape errors the same
//! way.

pub mod query;
pub mod rest;

pub use query::Select;

/// A raw backend row.
pub type Row = serde_json::Value;

/// Errors produced by backend queries.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Response { status: u16, message: String },

    /// The response body was not a JSON array of rows.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A row did not match the expected record shape.
    #[error(transparent)]
    Decode(#[from] catalog::CatalogError),
}

/// Trait seam over the backend so services can be tested without a network.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Run a select and return the matching rows in backend order.
    async fn select(&self, query: &Select) -> Result<Vec<Row>, BackendError>;
}

/// Run `query` and decode every row into `T`.
///
/// # Errors
///
/// Propagates backend failures and returns [`BackendError::Decode`] for the
/// first row that does not match `T`.
pub async fn fetch<T: serde::de::DeserializeOwned>(backend: &dyn Backend, query: &Select) -> Result<Vec<T>, BackendError> {
    let rows = backend.select(query).await?;
    Ok(catalog::decode_rows(query.collection(), rows)?)
}
