use crate::utils::error::Result;
use crate::utils::validation::{
    validate_allowed_origins, validate_bind_address, validate_non_empty_string,
    validate_positive_number, validate_url, Validate,
};
use clap::Parser;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:3000/xrpc/com.atproto.server.createAccount";

#[derive(Debug, Clone, Parser)]
#[command(name = "inmax-gateway")]
#[command(about = "HTTP gateway that forwards signups to an ATProto account service")]
pub struct GatewayConfig {
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// ATProto createAccount endpoint to forward signups to
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Allowed CORS origins; "*" permits any origin (development only)
    #[arg(long, value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    /// Timeout for the outbound upstream call, in seconds
    #[arg(long, default_value = "30")]
    pub upstream_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_address("bind_address", &self.bind_address)?;
        validate_url("upstream_url", &self.upstream_url)?;
        validate_allowed_origins("allowed_origins", &self.allowed_origins)?;
        validate_positive_number("upstream_timeout_secs", self.upstream_timeout_secs, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "concat-files")]
#[command(about = "Concatenates important project files into a single text file")]
pub struct ConcatConfig {
    /// Directory to scan
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Output file name, created inside the scanned directory
    #[arg(long, default_value = "concatenated_code.txt")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ConcatConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("root", &self.root)?;
        validate_non_empty_string("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_defaults_validate() {
        let config = GatewayConfig::parse_from(["inmax-gateway"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_gateway_config_rejects_bad_upstream_url() {
        let config = GatewayConfig::parse_from([
            "inmax-gateway",
            "--upstream-url",
            "not-a-url",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gateway_config_parses_origin_list() {
        let config = GatewayConfig::parse_from([
            "inmax-gateway",
            "--allowed-origins",
            "http://localhost:5173,https://app.example.com",
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_concat_config_defaults() {
        let config = ConcatConfig::parse_from(["concat-files"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.root, ".");
        assert_eq!(config.output, "concatenated_code.txt");
    }
}
