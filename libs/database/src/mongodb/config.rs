use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default, env_required};

/// Database used when none is configured
pub const DEFAULT_DATABASE: &str = "cooking_recipe";

/// Bound on the initial connect and its verification round-trip
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// MongoDB database configuration
///
/// This struct holds MongoDB connection settings.
/// It can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// // Manual construction
/// let config = MongoConfig::new("mongodb://localhost:27017");
///
/// // With database name
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "cooking_recipe");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URI (required)
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub uri: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Connection timeout in seconds, also bounds server selection
    pub connect_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a new MongoConfig with just a URI and the default database
    pub fn new(uri: impl Into<String>) -> Self {
        Self::with_database(uri, DEFAULT_DATABASE)
    }

    /// Create a MongoConfig with a specific database name
    pub fn with_database(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            app_name: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Get a reference to the MongoDB URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// The URI with any `user:password@` section masked, safe for logs
    pub fn redacted_uri(&self) -> String {
        let Some((scheme, rest)) = self.uri.split_once("://") else {
            return self.uri.clone();
        };
        // userinfo ends at the last '@' before the host list
        let authority_end = rest.find('/').unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{}://***@{}", scheme, &rest[at + 1..]),
            None => self.uri.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URI` (required) - MongoDB connection string
/// - `MONGODB_DATABASE` (optional, default: `cooking_recipe`) - Database name
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let uri = env_required("MONGODB_URI")?;
        if uri.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("MONGODB_URI".to_string()));
        }

        let database = env_or_default("MONGODB_DATABASE", DEFAULT_DATABASE);
        let app_name = std::env::var("MONGODB_APP_NAME").ok();
        let connect_timeout_secs =
            env_parse_or_default("MONGODB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;

        Ok(Self {
            uri,
            database,
            app_name,
            connect_timeout_secs,
        })
    }
}
