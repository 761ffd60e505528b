use chatlog::configuration::{get_configuration, load_env};
use chatlog::db::{ChatLogStore, PgChatLogStore};
use chatlog::startup::run;
use chatlog::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // before the subscriber, so RUST_LOG from .env is honoured
    load_env();

    let subscriber = get_subscriber("chatlog".into(), "info".into());
    init_subscriber(subscriber).map_err(io::Error::other)?;

    let settings = get_configuration().map_err(io::Error::other)?;

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to PostgreSQL"
    );

    // Lazy: the server comes up even if the database does not
    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_lazy_with(settings.database.connect_options());
    let store: Arc<dyn ChatLogStore> = Arc::new(PgChatLogStore::new(pg_pool));

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Server is running on {}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, store)?.await
}
