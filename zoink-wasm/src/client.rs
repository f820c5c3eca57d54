use async_trait::async_trait;
use gloo_net::http::Request;
use zoink_client::{NewPost, Post, PostStore, StoreError, decode_insert, decode_listing};

/// Browser-side [`PostStore`] backed by the fetch API.
#[derive(Clone)]
pub struct GlooStore {
    base_url: String,
    api_key: String,
}

impl GlooStore {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/v1/posts", self.base_url)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

#[async_trait(?Send)]
impl PostStore for GlooStore {
    async fn create(&self, post: &NewPost) -> Result<Post, StoreError> {
        let request = Request::post(&self.collection_url())
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Prefer", "return=representation")
            .json(post)
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        decode_insert(status, &text)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.collection_url());
        let response = Request::get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        decode_listing(status, &text)
    }
}
