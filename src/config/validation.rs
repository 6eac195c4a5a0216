//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, address well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServerConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("bind_address {0:?} is not a valid host:port address")]
    InvalidBindAddress(String),
    #[error("header_read_timeout_secs must be greater than zero")]
    ZeroHeaderReadTimeout,
    #[error("shutdown_grace_secs must be greater than zero")]
    ZeroShutdownGrace,
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Hostname resolution is deferred to bind time; only check the
    // host:port shape here.
    let well_formed = match config.bind_address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    };
    if !well_formed {
        errors.push(ValidationError::InvalidBindAddress(
            config.bind_address.clone(),
        ));
    }
    if config.header_read_timeout_secs == 0 {
        errors.push(ValidationError::ZeroHeaderReadTimeout);
    }
    if config.shutdown_grace_secs == 0 {
        errors.push(ValidationError::ZeroShutdownGrace);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let config = ServerConfig {
            bind_address: "nonsense".to_string(),
            header_read_timeout_secs: 0,
            shutdown_grace_secs: 0,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
