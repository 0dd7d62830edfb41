//! Startup configuration
//!
//! The contact-center instance is identified by a single ARN of the form
//! `arn:aws:connect:{region}:{account}:instance/{instance-id}`. It is parsed
//! once into an [`InstanceArn`] so that region, endpoint and instance id are
//! never re-derived from the raw string elsewhere.

use crate::errors::{Error, Result};
use config::{Config, Environment};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Environment key holding the instance ARN
pub const INSTANCE_ARN_KEY: &str = "AMAZON_CONNECT_INSTANCE_ARN";
/// Environment key holding the agent lookup function reference
pub const LOOKUP_FUNCTION_KEY: &str = "GET_AGENT_BY_EXTENSION_LAMBDA_ARN";
/// Environment key toggling contact-flow logging (defaults to enabled)
pub const LOGGING_ENABLED_KEY: &str = "VMCONNECT_LOGGING_ENABLED";

/// Parsed contact-center instance ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceArn {
    pub region: String,
    pub account_id: String,
    pub instance_id: String,
    raw: String,
}

impl InstanceArn {
    pub fn parse(arn: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidArn {
            arn: arn.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = arn.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" {
            return Err(invalid("expected arn:<partition>:<service>:<region>:<account>:<resource>"));
        }

        let region = parts[3];
        if region.is_empty() {
            return Err(invalid("region is empty"));
        }

        let instance_id = match parts[5].split_once('/') {
            Some(("instance", id)) if !id.is_empty() && !id.contains('/') => id,
            _ => return Err(invalid("resource must be instance/<instance-id>")),
        };

        Ok(Self {
            region: region.to_string(),
            account_id: parts[4].to_string(),
            instance_id: instance_id.to_string(),
            raw: arn.to_string(),
        })
    }

    /// Service endpoint for the instance's region
    pub fn endpoint(&self) -> String {
        format!("https://connect.{}.amazonaws.com", self.region)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for InstanceArn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for InstanceArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validated startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    pub instance_arn: InstanceArn,
    /// Function invoked from the greeting flow to resolve an agent by extension
    pub agent_lookup_function_arn: String,
    pub logging_enabled: bool,
}

impl ConnectConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        // A missing .env file is not an error; real environment variables still apply.
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .add_source(Environment::default())
            .build()?;

        Self::from_config(&config)
    }

    /// Load configuration from explicit key/value pairs (same keys as the environment)
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let mut builder = Config::builder();
        for (key, value) in values {
            builder = builder.set_override(key.to_lowercase(), value.as_str())?;
        }
        Self::from_config(&builder.build()?)
    }

    fn from_config(config: &Config) -> Result<Self> {
        let instance_arn = InstanceArn::parse(&required(config, INSTANCE_ARN_KEY)?)?;
        let agent_lookup_function_arn = required(config, LOOKUP_FUNCTION_KEY)?;

        let logging_enabled = match config.get_bool(&LOGGING_ENABLED_KEY.to_lowercase()) {
            Ok(enabled) => enabled,
            Err(config::ConfigError::NotFound(_)) => true,
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            region = %instance_arn.region,
            instance_id = %instance_arn.instance_id,
            logging_enabled,
            "Loaded connect configuration"
        );

        Ok(Self {
            instance_arn,
            agent_lookup_function_arn,
            logging_enabled,
        })
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_arn.instance_id
    }
}

// The environment source lowercases keys.
fn required(config: &Config, key: &str) -> Result<String> {
    match config.get_string(&key.to_lowercase()) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) | Err(config::ConfigError::NotFound(_)) => Err(Error::MissingSetting(key.to_string())),
        Err(e) => Err(e.into()),
    }
}
