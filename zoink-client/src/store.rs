use async_trait::async_trait;

use crate::error::StoreError;
use crate::post::{NewPost, Post};

/// The persistence service boundary. `?Send` so a browser-side
/// implementation backed by `fetch` qualifies.
#[async_trait(?Send)]
pub trait PostStore {
    /// Insert one validated record and return the materialized row.
    async fn create(&self, post: &NewPost) -> Result<Post, StoreError>;

    /// All posts, newest first. An empty collection is `Ok(vec![])`.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;
}

/// Decode an insert-with-representation response. PostgREST answers
/// with a one-element array of the stored rows.
pub fn decode_insert(status: u16, body: &str) -> Result<Post, StoreError> {
    if !(200..300).contains(&status) {
        return Err(StoreError::from_service_payload(status, body));
    }
    let mut rows: Vec<Post> =
        serde_json::from_str(body).map_err(|e| StoreError::Malformed(e.to_string()))?;
    rows.pop()
        .ok_or_else(|| StoreError::Malformed("insert returned no rows".to_string()))
}

/// Decode a collection query response.
pub fn decode_listing(status: u16, body: &str) -> Result<Vec<Post>, StoreError> {
    if !(200..300).contains(&status) {
        return Err(StoreError::from_service_payload(status, body));
    }
    serde_json::from_str(body).map_err(|e| StoreError::Malformed(e.to_string()))
}
