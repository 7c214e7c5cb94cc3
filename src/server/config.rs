use super::RequestsLoggingLevel;
use crate::config::DEFAULT_DUMP_LIMIT;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Directory served under `/styles`, nothing is mounted when unset.
    pub styles_dir: Option<String>,
    pub dump_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 8080,
            styles_dir: None,
            dump_limit: DEFAULT_DUMP_LIMIT,
        }
    }
}
