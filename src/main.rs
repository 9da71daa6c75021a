//! QnAHub Server — question & answer knowledge exchange service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use qnahub_core::config::AppConfig;
use qnahub_core::error::AppError;
use qnahub_core::traits::{AnswerStore, QuestionStore, UserDirectory};
use qnahub_database::stores::{PgAnswerStore, PgQuestionStore, PgUserDirectory};

#[tokio::main]
async fn main() {
    let env = std::env::var("QNAHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting QnAHub v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations.
    let db_pool = qnahub_database::connection::create_pool(&config.database).await?;
    qnahub_database::migration::run_migrations(&db_pool).await?;

    // Stores.
    let question_store: Arc<dyn QuestionStore> = Arc::new(PgQuestionStore::new(db_pool.clone()));
    let answer_store: Arc<dyn AnswerStore> = Arc::new(PgAnswerStore::new(db_pool.clone()));
    let user_directory: Arc<dyn UserDirectory> = Arc::new(PgUserDirectory::new(db_pool.clone()));

    // Service and token verification.
    let qna_service = Arc::new(qnahub_service::QnaService::new(
        question_store,
        answer_store,
        user_directory,
    ));
    let jwt_decoder = Arc::new(qnahub_auth::JwtDecoder::new(&config.auth));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = qnahub_api::AppState {
        config: Arc::new(config),
        db_pool: db_pool.clone(),
        jwt_decoder,
        qna_service,
    };

    let app = qnahub_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("QnAHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("QnAHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
