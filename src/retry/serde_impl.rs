//! Serde support for retry policies (feature-gated)
//!
//! A [`RetryConfig`] is pure data, so it round-trips through any serde
//! format; this lets deployments ship retry policies as configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use steadfast::RetryConfig;
//! use std::time::Duration;
//!
//! let config = RetryConfig::fixed(Duration::from_millis(200), 10);
//! let json = serde_json::to_string(&config).unwrap();
//! let back: RetryConfig = serde_json::from_str(&json).unwrap();
//! assert_eq!(config, back);
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use super::config::RetryConfig;

const FIELDS: &[&str] = &[
    "wait_between_retries",
    "max_retries",
    "retry_forever",
    "total_timeout",
];

impl Serialize for RetryConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RetryConfig", 4)?;
        state.serialize_field("wait_between_retries", &self.wait_between_retries())?;
        state.serialize_field("max_retries", &self.max_retries())?;
        state.serialize_field("retry_forever", &self.retry_forever())?;
        state.serialize_field("total_timeout", &self.total_timeout())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RetryConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = RetryConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a RetryConfig map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut wait: Option<Duration> = None;
                let mut max_retries: Option<u32> = None;
                let mut retry_forever: Option<bool> = None;
                let mut total_timeout: Option<Option<Duration>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "wait_between_retries" => {
                            if wait.is_some() {
                                return Err(de::Error::duplicate_field("wait_between_retries"));
                            }
                            wait = Some(map.next_value()?);
                        }
                        "max_retries" => {
                            if max_retries.is_some() {
                                return Err(de::Error::duplicate_field("max_retries"));
                            }
                            max_retries = Some(map.next_value()?);
                        }
                        "retry_forever" => {
                            if retry_forever.is_some() {
                                return Err(de::Error::duplicate_field("retry_forever"));
                            }
                            retry_forever = Some(map.next_value()?);
                        }
                        "total_timeout" => {
                            if total_timeout.is_some() {
                                return Err(de::Error::duplicate_field("total_timeout"));
                            }
                            total_timeout = Some(map.next_value()?);
                        }
                        other => {
                            return Err(de::Error::unknown_field(other, FIELDS));
                        }
                    }
                }

                // Absent fields fall back to the structural defaults
                let defaults = RetryConfig::default();
                Ok(RetryConfig::from_parts(
                    wait.unwrap_or_else(|| defaults.wait_between_retries()),
                    max_retries.unwrap_or_else(|| defaults.max_retries()),
                    retry_forever.unwrap_or_else(|| defaults.retry_forever()),
                    total_timeout.unwrap_or_else(|| defaults.total_timeout()),
                ))
            }
        }

        deserializer.deserialize_struct("RetryConfig", FIELDS, ConfigVisitor)
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let config = RetryConfig::fixed(Duration::from_millis(200), 10)
            .retry_until_successful()
            .timeout_after(Duration::from_secs(5));

        let json = serde_json::to_string(&config).unwrap();
        let back: RetryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let back: RetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(back, RetryConfig::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<RetryConfig, _> =
            serde_json::from_str(r#"{"jitter_factor": 0.5}"#);
        assert!(result.is_err());
    }
}
