use liking::config::AppConfig;
use liking::database::client::Database;
use liking::middleware::error::AppResult;
use liking::services::like_service::LikingService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let db = Database::connect(config.db_config()).await?;
    db.run_migrations().await?;

    let likes = LikingService::new(&db.likes).get_likes().await?;
    info!(
        "->> collection {} ready with {} likes",
        config.likes_collection,
        likes.len()
    );
    Ok(())
}
