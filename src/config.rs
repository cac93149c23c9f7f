use anyhow::{Context, Result};

/// Environment variable holding the MongoDB connection string
pub const ENV_MONGO_URI: &str = "MONGO_URI";

/// Default number of recommendations returned
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration for a recommendation run
///
/// Resolved once at startup and injected into the store constructor.
/// Nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (from MONGO_URI)
    pub uri: String,
    /// Logical database holding the catalog
    pub database: String,
    /// Collection holding video documents
    pub collection: String,
    /// Maximum number of recommendations to return
    pub top_k: usize,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// The connection string is required; database, collection and top_k
    /// fall back to the catalog defaults and can be overridden per-run
    /// via CLI flags (see `with_overrides`).
    pub fn from_env() -> Result<Self> {
        let uri = std::env::var(ENV_MONGO_URI)
            .with_context(|| format!("{ENV_MONGO_URI} is not set"))?;

        Ok(Self {
            uri,
            database: "test".to_string(),
            collection: "videos".to_string(),
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Apply per-run overrides from CLI flags
    pub fn with_overrides(
        mut self,
        database: Option<String>,
        collection: Option<String>,
        limit: Option<usize>,
    ) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(collection) = collection {
            self.collection = collection;
        }
        if let Some(limit) = limit {
            self.top_k = limit;
        }
        self
    }
}
