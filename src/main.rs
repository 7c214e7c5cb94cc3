use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recordings_server::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_DUMP_LIMIT, DEFAULT_READ_POOL_SIZE,
};
use recordings_server::{
    run_server, AlbumStore, RequestsLoggingLevel, ServerConfig, SqliteAlbumStore,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite album database file. Created if missing.
    #[clap(long, value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// Path to a TOML config file. Values in it override the flags.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Directory with the stylesheets served under /styles.
    #[clap(long)]
    pub styles_dir: Option<String>,

    /// Maximum number of albums returned by /dump.
    #[clap(long, default_value_t = DEFAULT_DUMP_LIMIT)]
    pub dump_limit: usize,

    /// Number of read-only database connections.
    #[clap(long, default_value_t = DEFAULT_READ_POOL_SIZE)]
    pub read_pool_size: usize,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            db_path: args.db_path.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            styles_dir: args.styles_dir.clone(),
            dump_limit: args.dump_limit,
            read_pool_size: args.read_pool_size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    info!("Opening album database at {:?}...", app_config.db_path);
    let album_store: Arc<dyn AlbumStore> = Arc::new(
        SqliteAlbumStore::new(&app_config.db_path, app_config.read_pool_size)
            .context("Failed to open album store")?,
    );

    if let Some(styles_dir) = &app_config.styles_dir {
        info!("Serving styles from {}", styles_dir);
    }

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        styles_dir: app_config.styles_dir,
        dump_limit: app_config.dump_limit,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(server_config, album_store).await
}
