// src/main.rs

use std::sync::Arc;

use tracing::{info, warn};

use cataloghub::config::Config;
use cataloghub::db::{create_connection_pool, initialize_database};
use cataloghub::http::{router, AppState};
use cataloghub::repositories::*;
use cataloghub::services::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cataloghub=info,tower_http=debug".to_string());
    tracing_subscriber::fmt().with_env_filter(filter.as_str()).init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // 1. INFRASTRUCTURE
    info!("Opening database at {}", config.database_path.display());
    let pool = Arc::new(create_connection_pool(&config.database_path)?);

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    // 2. REPOSITORIES
    // The type `Arc<dyn Trait>` matches the service constructor signatures.
    let catalogue_repo: Arc<dyn CatalogueRepository> =
        Arc::new(SqliteCatalogueRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repo: Arc<dyn SessionRepository> =
        Arc::new(SqliteSessionRepository::new(pool.clone()));
    let stats_repo: Arc<dyn StatsRepository> = Arc::new(SqliteStatsRepository::new(pool.clone()));

    // 3. SERVICES
    let catalogue_service = Arc::new(CatalogueService::new(catalogue_repo));
    let auth_service = Arc::new(AuthService::new(user_repo, session_repo));
    let statistics_service = Arc::new(StatisticsService::new(stats_repo));

    // 4. OPTIONAL ADMIN SEED
    if let Some((username, password)) = &config.admin_seed {
        if auth_service.find_user(username)?.is_none() {
            auth_service.register_user(username, password)?;
            info!("Seeded admin account '{}'", username);
        }
    } else {
        warn!("No admin seed configured; set CATALOGHUB_ADMIN_USER / CATALOGHUB_ADMIN_PASSWORD to create one");
    }

    // 5. APPLICATION STATE + ROUTER
    let state = AppState {
        catalogue_service,
        auth_service,
        statistics_service,
    };
    let app = router(state);

    // 6. SERVE
    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
