use crate::database::doc_collection::SurrealCollection;
use crate::entities::like::Like;
use crate::middleware::error::AppResult;
use std::sync::Arc;
use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub likes_collection: &'a str,
}

#[derive(Debug)]
pub struct Database {
    pub client: Arc<Db>,
    pub likes: SurrealCollection<Like>,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> AppResult<Self> {
        info!(
            "->> connecting DB url={} ns={} db={}",
            config.url, config.namespace, config.database
        );
        let conn = connect(config.url).await?;

        if let (Some(password), Some(username)) = (config.password, config.username) {
            conn.signin(Root { username, password }).await?;
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await?;

        let version = conn.version().await?;
        info!("->> connected DB version: {version}");

        let client = Arc::new(conn);
        let likes = SurrealCollection::new(client.clone(), config.likes_collection.to_string());
        Ok(Self { client, likes })
    }

    pub async fn run_migrations(&self) -> AppResult<()> {
        self.likes.mutate_db().await
    }
}
