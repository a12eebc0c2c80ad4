//! Instance table configuration.
//!
//! Settings only shape allocation and diagnostics. Nothing here enables
//! eviction: an issued handle must stay canonical for the life of the process.

/// Environment variable overriding [`StoreConfig::initial_capacity`].
pub const CAPACITY_ENV: &str = "SCALARVO_TABLE_CAPACITY";

/// Environment variable setting [`StoreConfig::warn_after`].
pub const WARN_AFTER_ENV: &str = "SCALARVO_TABLE_WARN_AFTER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slots reserved up front in the instance table.
    pub initial_capacity: usize,

    /// Emit one warning once the table holds more instances than this.
    pub warn_after: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            warn_after: None,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `SCALARVO_TABLE_CAPACITY` / `SCALARVO_TABLE_WARN_AFTER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_ENV) {
            match raw.trim().parse() {
                Ok(capacity) => config.initial_capacity = capacity,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "{CAPACITY_ENV} is not a valid count; using default {}",
                    config.initial_capacity
                ),
            }
        }

        if let Some(raw) = lookup(WARN_AFTER_ENV) {
            match raw.trim().parse() {
                Ok(limit) => config.warn_after = Some(limit),
                Err(_) => tracing::warn!(value = %raw, "{WARN_AFTER_ENV} is not a valid count; ignoring"),
            }
        }

        config
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_warn_after(mut self, limit: usize) -> Self {
        self.warn_after = Some(limit);
        self
    }
}
