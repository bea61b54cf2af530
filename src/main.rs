mod model;
mod server;

use server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superheroes=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let notifier = startup::setup_notifier(&config)?;

    let app = server::router::router().with_state(AppState::new(db, notifier));

    tracing::info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
