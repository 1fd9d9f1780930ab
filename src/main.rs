use std::net::TcpListener;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use nfl_votes_backend::run;
use nfl_votes_backend::config::settings::get_config;
use nfl_votes_backend::services::OddsClient;
use nfl_votes_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "nfl-votes-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    if config.odds_api.api_key.expose_secret().is_empty() {
        tracing::warn!("No odds API key configured, /api/nfl-matchups will fail");
    }

    let odds_client = match OddsClient::new(config.odds_api.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to create odds client: {}", e);
            std::process::exit(1);
        }
    };

    // Only try to establish connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(
            config.database.connection_string().expose_secret()
        )
        .expect("Failed to create Postgres connection pool");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(
        listener,
        connection_pool,
        odds_client,
        config.session,
        config.application.allowed_origins
    )?.await
}
