use crate::config::DatabaseConfig;
use crate::database::DatabasePool;

/// Pool against the store named by TEST_MONGODB_URL (falling back to
/// MONGODB_URL), or None when neither is set or the store is unreachable.
/// Tests that need a live store skip themselves on None.
pub async fn pool() -> Option<DatabasePool> {
    let url = std::env::var("TEST_MONGODB_URL")
        .or_else(|_| std::env::var("MONGODB_URL"))
        .ok()?;

    let config = DatabaseConfig {
        url,
        database: "voting_app_test".to_string(),
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config).await.ok()?;

    match pool.ping().await {
        Ok(()) => Some(pool),
        Err(_) => None,
    }
}

/// Pool pointed at an endpoint nothing listens on, with short timeouts.
/// Client construction succeeds (sockets are lazy); every store operation
/// fails fast. This is the toggled-off store stub for health tests.
pub async fn unreachable_pool() -> DatabasePool {
    let config = DatabaseConfig {
        url: "mongodb://127.0.0.1:9".to_string(),
        server_selection_timeout_ms: 300,
        connect_timeout_ms: 300,
        ..DatabaseConfig::default()
    };

    DatabasePool::connect(&config)
        .await
        .expect("client construction does not contact the server")
}

/// Builds an actix test service wired like production (shared pool,
/// production routing table), or returns early when no test store is
/// configured.
#[macro_export]
macro_rules! service {
    () => {{
        let Some(pool) = $crate::testing::instance::pool().await else {
            eprintln!("skipping: TEST_MONGODB_URL is not set or the store is unreachable");
            return;
        };

        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(pool.clone()))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, pool)
    }};
}
