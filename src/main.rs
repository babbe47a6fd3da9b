use biuletyn_core::application::{
    ports::{
        security::{PasswordHasher, SessionTokenCodec},
        storage::FileStore,
        time::Clock,
        util::SlugGenerator,
    },
    queries::AnalyticsRepository,
    services::{ApplicationServices, ServiceDependencies},
};
use biuletyn_core::config::AppConfig;
use biuletyn_core::domain::{
    article::{ArticleReadRepository, ArticleVersionRepository, ArticleWriteRepository},
    menu::MenuRepository,
    session::SessionRepository,
    settings::SettingsRepository,
    user::UserRepository,
};
use biuletyn_core::infrastructure::{
    database,
    repositories::{
        PostgresAnalyticsRepository, PostgresArticleRepository,
        PostgresArticleVersionRepository, PostgresMenuRepository, PostgresSessionRepository,
        PostgresSettingsRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, HmacSessionTokenCodec},
    storage::LocalFileStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use biuletyn_core::presentation::http::{routes::build_router_with_origins, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_repo = PostgresArticleRepository::new(pool.clone());
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> = Arc::new(article_repo.clone());
    let article_read_repo: Arc<dyn ArticleReadRepository> = Arc::new(article_repo);
    let article_version_repo: Arc<dyn ArticleVersionRepository> =
        Arc::new(PostgresArticleVersionRepository::new(pool.clone()));
    let menu_repo: Arc<dyn MenuRepository> = Arc::new(PostgresMenuRepository::new(pool.clone()));
    let settings_repo: Arc<dyn SettingsRepository> =
        Arc::new(PostgresSettingsRepository::new(pool.clone()));
    let session_repo: Arc<dyn SessionRepository> =
        Arc::new(PostgresSessionRepository::new(pool.clone()));
    let analytics_repo: Arc<dyn AnalyticsRepository> =
        Arc::new(PostgresAnalyticsRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_codec: Arc<dyn SessionTokenCodec> = Arc::new(HmacSessionTokenCodec::new(
        config.session_signing_key().as_bytes().to_vec(),
    ));
    let file_store: Arc<dyn FileStore> = Arc::new(LocalFileStore::new(config.upload_dir()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo,
        article_write_repo,
        article_read_repo,
        article_version_repo,
        menu_repo,
        settings_repo,
        session_repo,
        analytics_repo,
        password_hasher,
        token_codec,
        file_store,
        clock,
        slugger,
        session_ttl: chrono::Duration::from_std(config.session_ttl())?,
    }));

    // A fresh database has no accounts; without this nobody could log in.
    services
        .user_commands
        .ensure_bootstrap_admin(config.admin_username(), config.admin_password())
        .await?;

    let state = HttpState {
        services,
        upload_dir: Arc::from(config.upload_dir()),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // ConnectInfo feeds the per-IP rate limiter on the login route.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
