use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        base_url: get_env_or_default("DOCS_BASE_URL", DEFAULT_BASE_URL),
        search_path: get_env_or_default("DOCS_SEARCH_PATH", DEFAULT_SEARCH_PATH),
        user_agent: get_env_or_default("DOCS_USER_AGENT", DEFAULT_USER_AGENT),
        listen_addr: get_env_or_default("DOCS_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
    }
});

pub const DEFAULT_BASE_URL: &str = "https://docs.flightsimulator.com";
pub const DEFAULT_SEARCH_PATH: &str = "/html/Introduction/Introduction.htm";
pub const DEFAULT_USER_AGENT: &str = "MSFS-SDK-MCP-Server/1.0";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Documentation host, without a trailing slash.
    pub base_url: String,
    /// Root-relative path of the page that serves search results.
    pub search_path: String,
    pub user_agent: String,
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.search_path)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
