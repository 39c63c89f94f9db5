use anyhow::Context;
use dotenvy::dotenv;
use jschs::jschs_config::{
    CorsConfig, DatabaseConfig, LoggingConfig, PasswordConfig, ServerConfig,
};
use jschs::jschs_db::init_db_pool;
use jschs::logging::init_tracing;
use jschs::router::init_router;
use jschs::state::init_app_state;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LoggingConfig::from_env()).context("Failed to initialize tracing")?;

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let password_config = PasswordConfig::from_env();
    let cors_config = CorsConfig::from_env();

    let pool = init_db_pool(&database_config).await?;

    if database_config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations applied");
    }

    let addr = server_config.server_addr.clone();
    let state = init_app_state(pool.clone(), &password_config, cors_config, server_config);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
