use crate::utils::error::{GatewayError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GatewayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_bind_address(field_name: &str, addr: &str) -> Result<()> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Allowed CORS origins are either the wildcard "*" or absolute http(s) URLs.
pub fn validate_allowed_origins(field_name: &str, origins: &[String]) -> Result<()> {
    if origins.is_empty() {
        return Err(GatewayError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for origin in origins {
        if origin == "*" {
            continue;
        }
        validate_url(field_name, origin)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("upstream_url", "https://example.com").is_ok());
        assert!(validate_url("upstream_url", "http://localhost:3000/xrpc").is_ok());
        assert!(validate_url("upstream_url", "").is_err());
        assert!(validate_url("upstream_url", "invalid-url").is_err());
        assert!(validate_url("upstream_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("bind_address", "0.0.0.0:8000").is_ok());
        assert!(validate_bind_address("bind_address", "127.0.0.1:0").is_ok());
        assert!(validate_bind_address("bind_address", "localhost:8000").is_err());
        assert!(validate_bind_address("bind_address", "8000").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("upstream_timeout_secs", 30, 1).is_ok());
        assert!(validate_positive_number("upstream_timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_allowed_origins() {
        let wildcard = vec!["*".to_string()];
        assert!(validate_allowed_origins("allowed_origins", &wildcard).is_ok());

        let explicit = vec!["http://localhost:5173".to_string()];
        assert!(validate_allowed_origins("allowed_origins", &explicit).is_ok());

        let bad = vec!["not-a-url".to_string()];
        assert!(validate_allowed_origins("allowed_origins", &bad).is_err());

        assert!(validate_allowed_origins("allowed_origins", &[]).is_err());
    }
}
