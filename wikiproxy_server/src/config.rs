//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikiproxy_lib::{ClientConfig, PipelineOptions, DEFAULT_API_URL};

/// Every flag can also be set through the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "wikiproxy")]
#[command(about = "Proxy for the Japanese Wikipedia API with HTML to Markdown conversion")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "WIKIPROXY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "WIKIPROXY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// MediaWiki api.php endpoint
    #[arg(long, env = "WIKIPROXY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each upstream request, in seconds
    #[arg(
        long,
        env = "WIKIPROXY_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// User-Agent sent upstream (defaults to a descriptive wikiproxy agent)
    #[arg(long, env = "WIKIPROXY_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Keep <style> elements when converting to Markdown
    #[arg(long, env = "WIKIPROXY_KEEP_STYLES")]
    pub keep_styles: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            strip_styles: !self.keep_styles,
        }
    }
}

/// Log directives used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "wikiproxy=info,wikipedia_api=info";

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_LOG_FILTER`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::try_parse_from(["wikiproxy"]).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
        assert_eq!(cfg.client_config().api_url, DEFAULT_API_URL);
        assert_eq!(cfg.client_config().timeout, Duration::from_secs(10));
        assert!(cfg.pipeline_options().strip_styles);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = ServerConfig::try_parse_from([
            "wikiproxy",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--api-url",
            "https://en.wikipedia.org/w/api.php",
            "--timeout-secs",
            "3",
            "--keep-styles",
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.client_config().api_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(cfg.client_config().timeout, Duration::from_secs(3));
        assert!(!cfg.pipeline_options().strip_styles);
    }

    #[test]
    fn zero_timeout_rejected() {
        assert!(ServerConfig::try_parse_from(["wikiproxy", "--timeout-secs", "0"]).is_err());
    }

    #[test]
    fn log_filter_defaults_when_unset() {
        let filter = log_filter(None).to_string().to_lowercase();
        assert!(filter.contains("wikiproxy=info"));
        assert!(filter.contains("wikipedia_api=info"));
        assert_eq!(log_filter(Some("  ")).to_string().to_lowercase(), filter);
    }

    #[test]
    fn rust_log_replaces_default() {
        let filter = log_filter(Some("wikiproxy=debug")).to_string().to_lowercase();
        assert!(filter.contains("wikiproxy=debug"));
        assert!(!filter.contains("wikiproxy=info"));
    }
}
