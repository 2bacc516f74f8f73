use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "fixmap", about = "Civic issue reporting backend", version)]
pub struct Args {
    /// SQLite database file (overrides DATABASE_URL and the config file)
    #[arg(long)]
    pub db_url: Option<String>,

    /// Size of the database connection pool
    #[arg(long)]
    pub db_pool_size: Option<u32>,

    /// Allow cross-origin requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    /// Configuration file
    #[arg(long, default_value = "fixmap.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::parse_from(["fixmap", "--db-url", ":memory:", "--enable-cors"]);
        assert_eq!(Some(":memory:".to_string()), args.db_url);
        assert!(args.enable_cors);
        assert_eq!(None, args.db_pool_size);
    }
}
