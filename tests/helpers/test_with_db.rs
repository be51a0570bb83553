#[macro_export]
macro_rules! test_with_db {
    ($name:ident, |$db:ident, $config:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use futures::FutureExt;
            use liking::config::AppConfig;
            use liking::database::client::Database;
            use std::panic::resume_unwind;

            let $config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                likes_collection: "likes".to_string(),
            };

            let $db = Database::connect($config.db_config())
                .await
                .expect("failed to connect test database");
            $db.run_migrations().await.expect("migrations run");

            let test_result = std::panic::AssertUnwindSafe(async $body)
                .catch_unwind()
                .await;

            $db.client
                .query(format!("REMOVE DATABASE {};", $config.db_database))
                .await
                .expect("failed to remove database");

            if let Err(panic) = test_result {
                resume_unwind(panic);
            }
        }
    };
}
