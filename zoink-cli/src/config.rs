/// Connection settings for the hosted posts collection.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub url: String,
    pub key: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| anyhow::anyhow!("SUPABASE_URL must be set"))?;
        let key = std::env::var("SUPABASE_KEY")
            .map_err(|_| anyhow::anyhow!("SUPABASE_KEY must be set"))?;

        Ok(Self { url, key })
    }
}
