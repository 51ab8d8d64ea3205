//! Process bootstrap: configuration, tracing, database pool, wiring.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tandem::adapters::auth::JwtSessionValidator;
use tandem::adapters::http::{api_router, AuthState, CoupleHandlers, SessionHandlers};
use tandem::adapters::postgres::{
    PostgresCoupleRepository, PostgresInterviewRepository, PostgresSessionRepository,
    PostgresUserDirectory,
};
use tandem::application::handlers::couple::{
    AcceptInviteHandler, CreateInviteHandler, GetCoupleHandler, SignAgreementHandler,
};
use tandem::application::handlers::session::{
    GetSessionHandler, GetSessionStatusHandler, ListSessionsHandler, SessionAccess,
    StartSessionHandler, SubmitInterviewHandler, UpdateSessionStatusHandler,
};
use tandem::config::AppConfig;
use tandem::ports::{CoupleRepository, InterviewRepository, SessionRepository, UserDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!().run(&pool).await?;
    }

    // Adapters
    let couples: Arc<dyn CoupleRepository> = Arc::new(PostgresCoupleRepository::new(pool.clone()));
    let sessions: Arc<dyn SessionRepository> =
        Arc::new(PostgresSessionRepository::new(pool.clone()));
    let interviews: Arc<dyn InterviewRepository> =
        Arc::new(PostgresInterviewRepository::new(pool.clone()));
    let directory: Arc<dyn UserDirectory> = Arc::new(PostgresUserDirectory::new(pool));
    let validator: AuthState = Arc::new(JwtSessionValidator::new(config.auth.jwt_secret.clone()));

    // Pairing handlers
    let couple_handlers = CoupleHandlers::new(
        Arc::new(CreateInviteHandler::new(couples.clone(), directory.clone())),
        Arc::new(AcceptInviteHandler::new(couples.clone(), directory.clone())),
        Arc::new(GetCoupleHandler::new(couples.clone(), directory.clone())),
        Arc::new(SignAgreementHandler::new(couples.clone(), directory)),
    );

    // Session handlers
    let access = Arc::new(SessionAccess::new(
        sessions.clone(),
        couples.clone(),
        interviews.clone(),
    ));
    let session_handlers = SessionHandlers::new(
        Arc::new(StartSessionHandler::new(sessions.clone(), couples.clone())),
        Arc::new(GetSessionHandler::new(access.clone())),
        Arc::new(ListSessionsHandler::new(
            sessions.clone(),
            couples,
            interviews.clone(),
        )),
        Arc::new(SubmitInterviewHandler::new(
            access.clone(),
            sessions.clone(),
            interviews,
        )),
        Arc::new(GetSessionStatusHandler::new(access.clone())),
        Arc::new(UpdateSessionStatusHandler::new(access, sessions)),
    );

    let cors = build_cors(&config);

    let app = api_router(couple_handlers, session_handlers, validator)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
