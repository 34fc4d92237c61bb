use std::{process, sync::Arc};

use sakaya::{
    application::{catalog::CatalogService, error::AppError, repos::SakeRepo},
    config,
    infra::{
        cache::CacheClient,
        db::PostgresRepositories,
        error::InfraError,
        http::{self, ApiState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(config::ServeArgs::default()));

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let cache = init_cache(&settings).await?;

    let sake_repo: Arc<dyn SakeRepo> = repositories.clone();
    let state = ApiState {
        catalog: Arc::new(CatalogService::new(sake_repo)),
        db: repositories,
        cache,
    };

    http::serve(&settings, state).await.map_err(AppError::from)
}

async fn init_repositories(
    settings: &config::Settings,
) -> Result<Arc<PostgresRepositories>, AppError> {
    let database_url = settings
        .database
        .url
        .as_ref()
        .ok_or_else(|| InfraError::configuration("database url is not configured"))
        .map_err(AppError::from)?;

    let pool =
        PostgresRepositories::connect(database_url, settings.database.max_connections.get())
            .await
            .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    info!(target: "sakaya::startup", "connected to postgres");
    Ok(Arc::new(PostgresRepositories::new(pool)))
}

async fn init_cache(settings: &config::Settings) -> Result<Option<CacheClient>, AppError> {
    match settings.cache.url.as_deref() {
        Some(url) => {
            let cache = CacheClient::connect(url).await.map_err(AppError::from)?;
            info!(target: "sakaya::startup", "connected to cache");
            Ok(Some(cache))
        }
        None => {
            warn!(
                target: "sakaya::startup",
                "cache url is not configured; health checks will skip the cache",
            );
            Ok(None)
        }
    }
}
