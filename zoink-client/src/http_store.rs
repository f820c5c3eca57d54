use async_trait::async_trait;
use reqwest::Client;

use crate::error::StoreError;
use crate::post::{NewPost, Post};
use crate::store::{PostStore, decode_insert, decode_listing};

/// Supabase/PostgREST implementation of [`PostStore`].
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/v1/posts", self.base_url)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait(?Send)]
impl PostStore for SupabaseStore {
    async fn create(&self, post: &NewPost) -> Result<Post, StoreError> {
        tracing::debug!(title = %post.title, "inserting post");
        let response = self
            .authed(self.client.post(self.collection_url()))
            .header("Prefer", "return=representation")
            .json(post)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        decode_insert(status, &text)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.collection_url());
        let response = self
            .authed(self.client.get(url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        decode_listing(status, &text)
    }
}
