#![allow(dead_code)]

use chatlog::configuration::{get_configuration, DatabaseSettings};
use chatlog::db::{ChatLogStore, InMemoryChatLogStore, PgChatLogStore};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub db_pool: Option<PgPool>,
}

impl TestApp {
    pub async fn save_log(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/chat/logs", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn list_logs(&self, session_id: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/api/chat/logs/{}", &self.address, session_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

fn spawn_server(store: Arc<dyn ChatLogStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = chatlog::startup::run(listener, store).expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    format!("http://127.0.0.1:{}", port)
}

// we have to run server in another task
pub async fn spawn_app() -> TestApp {
    let store: Arc<dyn ChatLogStore> = Arc::new(InMemoryChatLogStore::new());

    TestApp {
        address: spawn_server(store),
        db_pool: None,
    }
}

pub async fn spawn_app_with_store(store: Arc<dyn ChatLogStore>) -> TestApp {
    TestApp {
        address: spawn_server(store),
        db_pool: None,
    }
}

/// Runs against a fresh Postgres database; `None` when Postgres is unreachable.
pub async fn spawn_pg_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let store: Arc<dyn ChatLogStore> = Arc::new(PgChatLogStore::new(connection_pool.clone()));

    Some(TestApp {
        address: spawn_server(store),
        db_pool: Some(connection_pool),
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}
