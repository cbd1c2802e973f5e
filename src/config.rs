use std::str::FromStr;

use crate::domain::queue::QueuePolicy;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Defaults match the production deployment. Every value can be overridden
// through a DONUT_QUEUE_* environment variable.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Range of customer ids accepted on intake (inclusive)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntakeLimits {
    pub min_customer_id: u32,
    pub max_customer_id: u32,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            min_customer_id: 1,
            max_customer_id: 20000,
        }
    }
}

impl IntakeLimits {
    pub fn accepts(&self, customer_id: u32) -> bool {
        (self.min_customer_id..=self.max_customer_id).contains(&customer_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub queue: QueuePolicy,
    pub intake: IntakeLimits,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            server: ServerConfig {
                host: lookup("DONUT_QUEUE_HOST").unwrap_or(defaults.server.host),
                port: parse(&lookup, "DONUT_QUEUE_PORT", defaults.server.port)?,
            },
            queue: QueuePolicy {
                premium_threshold: parse(
                    &lookup,
                    "DONUT_QUEUE_PREMIUM_THRESHOLD",
                    defaults.queue.premium_threshold,
                )?,
                batch_capacity: parse(&lookup, "DONUT_QUEUE_BATCH_CAPACITY", defaults.queue.batch_capacity)?,
                delivery_time_unit: parse(
                    &lookup,
                    "DONUT_QUEUE_DELIVERY_TIME_UNIT",
                    defaults.queue.delivery_time_unit,
                )?,
            },
            intake: IntakeLimits {
                min_customer_id: parse(&lookup, "DONUT_QUEUE_MIN_CUSTOMER_ID", defaults.intake.min_customer_id)?,
                max_customer_id: parse(&lookup, "DONUT_QUEUE_MAX_CUSTOMER_ID", defaults.intake.max_customer_id)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.batch_capacity == 0 {
            return Err(ConfigError::Invalid("batch capacity must be positive".to_string()));
        }
        if self.queue.delivery_time_unit == 0 {
            return Err(ConfigError::Invalid("delivery time unit must be positive".to_string()));
        }
        if self.intake.min_customer_id > self.intake.max_customer_id {
            return Err(ConfigError::Invalid(format!(
                "customer id range {}..={} is empty",
                self.intake.min_customer_id, self.intake.max_customer_id
            )));
        }

        // One order per customer, so no order lands past batch max_customer_id + 1
        let worst_wait = u64::from(self.queue.delivery_time_unit) * (u64::from(self.intake.max_customer_id) + 1);
        if worst_wait > u64::from(u32::MAX) {
            return Err(ConfigError::Invalid(format!(
                "delivery time unit {} overflows wait times for customer ids up to {}",
                self.queue.delivery_time_unit, self.intake.max_customer_id
            )));
        }
        Ok(())
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
