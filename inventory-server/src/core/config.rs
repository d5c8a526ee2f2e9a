/// Server configuration loaded from the environment
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | required | `postgres://`, `postgresql://`, `sqlite:` or `file:` URL |
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 5000 | bind port |
/// | DB_MAX_CONNECTIONS | 5 | pool size (in-memory SQLite always uses 1) |
/// | SEED_ON_START | true | seed demo rows when the product table is empty |
/// | OPENAI_API_KEY | unset | chat provider key, chat answers 503 without it |
/// | OPENAI_BASE_URL | https://api.openai.com/v1 | chat provider base URL |
/// | CHAT_MODEL | gpt-4o-mini | completion model |
/// | CHAT_TIMEOUT_MS | 30000 | upstream request timeout |
/// | LOG_LEVEL | info | level or full filter directives |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | unset | daily rolling log files when the directory exists |
/// | ENVIRONMENT | development | development, staging or production |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    pub db_max_connections: u32,
    pub seed_on_start: bool,
    pub chat: ChatConfig,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub environment: String,
}

/// Chat provider settings (OpenAI compatible `/chat/completions`)
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            timeout_ms: 30_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let defaults = ChatConfig::default();

        Ok(Self {
            database_url,
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: parse_env("HTTP_PORT", 5000),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 5),
            seed_on_start: parse_flag("SEED_ON_START", true),
            chat: ChatConfig {
                api_key: std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|s| !s.is_empty()),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults.base_url),
                model: std::env::var("CHAT_MODEL")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults.model),
                timeout_ms: parse_env("CHAT_TIMEOUT_MS", defaults.timeout_ms),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: parse_flag("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// Configuration for tests and embedding: the given database, no seeding, no chat key
    pub fn with_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            db_max_connections: 1,
            seed_on_start: false,
            chat: ChatConfig::default(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }

    /// `host:port` bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| parse_bool(&v, default))
        .unwrap_or(default)
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
