use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use nfl_votes_backend::run;
use nfl_votes_backend::SessionClaims;
use nfl_votes_backend::config::session::SessionSettings;
use nfl_votes_backend::config::settings::{get_config, DatabaseSettings};
use nfl_votes_backend::services::OddsClient;
use nfl_votes_backend::telemetry::{get_subscriber, init_subscriber};

use super::odds_mock::{sample_matchups, spawn_odds_mock, OddsMock};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub const TEST_ODDS_API_KEY: &str = "test-odds-key";

pub struct TestApp{
    pub address: String,
    pub db_pool: PgPool,
    pub session_settings: SessionSettings,
    pub odds_mock: OddsMock,
}

impl TestApp {
    pub async fn post_game_result(&self, client: &Client, body: &Value) -> reqwest::Response {
        client
            .post(&format!("{}/api/game-results", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_json(&self, client: &Client, path: &str) -> (reqwest::StatusCode, Value) {
        let response = client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status();
        let body = response.json::<Value>().await.expect("Cannot turn into a json.");
        (status, body)
    }

    /// Issue a session token the way the external session provider would
    pub fn session_token(&self, user_id: Uuid) -> String {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            email: Some(format!("{}@example.com", user_id)),
            role: Some("authenticated".to_string()),
            aud: self.session_settings.audience.clone(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.session_settings.jwt_secret.expose_secret().as_bytes()),
        )
        .expect("Failed to encode session token")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_odds(spawn_odds_mock(200, sample_matchups())).await
}

pub async fn spawn_app_with_odds(odds_mock: OddsMock) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    configuration.odds_api.base_url = odds_mock.base_url.clone();
    configuration.odds_api.api_key = SecretString::new(TEST_ODDS_API_KEY.into());
    let connection_pool = configure_db(&configuration.database)
        .await;
    let odds_client = OddsClient::new(configuration.odds_api.clone())
        .expect("Failed to build odds client");
    let session_settings = configuration.session.clone();
    let server = run(
        listener,
        connection_pool.clone(),
        odds_client,
        session_settings.clone(),
        configuration.application.allowed_origins.clone(),
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    // tokio::spawn returns a handle to the spawned future,
    // but we have no use for it here, hence the non-binding let
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool,
        session_settings,
        odds_mock,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Users are owned by the session provider; tests mirror them directly.
pub async fn create_test_user(pool: &PgPool) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let username = format!("fan{}", &user_id.to_string()[..8]);
    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
        .bind(user_id)
        .bind(&username)
        .execute(pool)
        .await
        .expect("Failed to insert test user");
    (user_id, username)
}

pub async fn count_game_results(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM game_results")
        .fetch_one(pool)
        .await
        .expect("Failed to count game results")
}

pub async fn submit_vote(app: &TestApp, client: &Client, user_id: Uuid, matchup_id: &str, vote: &str) -> reqwest::Response {
    client
        .post(&format!("{}/api/votes", &app.address))
        .bearer_auth(app.session_token(user_id))
        .json(&serde_json::json!({
            "matchup_id": matchup_id,
            "vote": vote
        }))
        .send()
        .await
        .expect("Failed to submit vote.")
}
