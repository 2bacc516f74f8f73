use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let file_cfg = config::Config::try_load_from_file(&args.config)?.unwrap_or_default();

    let db_url = args
        .db_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .or(file_cfg.db_url)
        .unwrap_or_else(|| config::DEFAULT_DB_URL.to_string());
    let db_pool_size = args
        .db_pool_size
        .or(file_cfg.db_pool_size)
        .unwrap_or(config::DEFAULT_DB_POOL_SIZE);
    let enable_cors = args.enable_cors || file_cfg.enable_cors.unwrap_or(false);

    log::info!("Opening database {db_url} (pool size: {db_pool_size})");
    let connections = fixmap_db_sqlite::Connections::init(&db_url, db_pool_size)?;
    fixmap_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    fixmap_webserver::run(connections, enable_cors, VERSION).await;
    Ok(())
}
