//! Deployment configuration for the durable ledger store.
//!
//! The snapshot location and lock wait are provided by deployment
//! configuration, not by the core. Configuration is loaded from
//! environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::StoreError;

/// Environment variable naming the snapshot file location.
pub const LEDGER_PATH_VAR: &str = "ROSHAMBO_LEDGER_PATH";

/// Environment variable overriding the bounded lock wait, in
/// milliseconds.
pub const LOCK_TIMEOUT_VAR: &str = "ROSHAMBO_LOCK_TIMEOUT_MS";

/// Default bounded wait applied to every lock acquisition.
const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Complete store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Location of the durable ledger snapshot.
    pub path: PathBuf,
    /// Bounded wait applied to every lock acquisition; exhausting it
    /// surfaces [`StoreError::Timeout`].
    pub lock_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration for the given snapshot path with the
    /// default lock wait.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Override the bounded lock wait.
    #[must_use]
    pub const fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `ROSHAMBO_LEDGER_PATH` -- snapshot file location
    ///
    /// Optional variables:
    /// - `ROSHAMBO_LOCK_TIMEOUT_MS` -- bounded lock wait in
    ///   milliseconds (default 5000)
    pub fn from_env() -> Result<Self, StoreError> {
        let path = std::env::var(LEDGER_PATH_VAR)
            .map_err(|e| StoreError::Config(format!("{LEDGER_PATH_VAR}: {e}")))?;

        let mut config = Self::new(path);

        if let Ok(raw) = std::env::var(LOCK_TIMEOUT_VAR) {
            let millis: u64 = raw
                .parse()
                .map_err(|e| StoreError::Config(format!("invalid {LOCK_TIMEOUT_VAR}: {e}")))?;
            config.lock_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
