use crate::database::client::DbConfig;
use dotenvy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub likes_collection: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").unwrap_or("mem://".to_string());
        let likes_collection = std::env::var("LIKES_COLLECTION").unwrap_or("likes".to_string());

        Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            likes_collection,
        }
    }

    pub fn db_config(&self) -> DbConfig<'_> {
        DbConfig {
            url: &self.db_url,
            database: &self.db_database,
            namespace: &self.db_namespace,
            username: self.db_username.as_deref(),
            password: self.db_password.as_deref(),
            likes_collection: &self.likes_collection,
        }
    }
}
