/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Override via
/// environment variables (or a `.env` file) in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Database URL (default: `sqlite://todo.db`).
    pub database_url: String,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    /// Directory served under `/resources` (default: `resources`).
    pub resources_dir: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether the `/edit` route is mounted (default: `true`).
    pub enable_edit: bool,
    /// Whether the `/export` and `/import` routes are mounted
    /// (default: `true`).
    pub enable_transfer: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `HOST`                 | `0.0.0.0`          |
    /// | `PORT`                 | `8080`             |
    /// | `DATABASE_URL`         | `sqlite://todo.db` |
    /// | `STATIC_DIR`           | `static`           |
    /// | `RESOURCES_DIR`        | `resources`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`               |
    /// | `ENABLE_EDIT`          | `true`             |
    /// | `ENABLE_TRANSFER`      | `true`             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todo.db".into());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let resources_dir = std::env::var("RESOURCES_DIR").unwrap_or_else(|_| "resources".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let enable_edit = env_flag("ENABLE_EDIT", true);
        let enable_transfer = env_flag("ENABLE_TRANSFER", true);

        Self {
            host,
            port,
            database_url,
            static_dir,
            resources_dir,
            request_timeout_secs,
            enable_edit,
            enable_transfer,
        }
    }
}

/// Read a boolean env var. Unset means `default`; anything other than a
/// truthy spelling means false.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.trim(), "1" | "true" | "TRUE" | "True"),
        Err(_) => default,
    }
}
