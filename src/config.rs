//! Application configuration loaded from environment variables.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use serde::Deserialize;
use strum::{Display, EnumString};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Host name or IP address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve Swagger UI and the OpenAPI document.
    #[serde(default = "default_true")]
    pub enable_swagger: bool,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_true")]
    pub cors_permissive: bool,

    // === Observability ===
    /// Port for the Prometheus exporter; disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_swagger: true,
            cors_permissive: true,
            metrics_port: None,
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        match self.metrics_port {
            Some(0) => return Err("METRICS_PORT must be non-zero".to_string()),
            Some(port) if port == self.port => {
                return Err("METRICS_PORT must differ from PORT".to_string());
            }
            _ => {}
        }

        if let Err(e) = self.http_addr() {
            return Err(format!("HOST {} does not resolve: {}", self.host, e));
        }

        Ok(())
    }

    /// Socket address for the HTTP server, resolving `host` if needed.
    pub fn http_addr(&self) -> io::Result<SocketAddr> {
        resolve(&self.host, self.port)
    }

    /// Socket address for the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> io::Result<Option<SocketAddr>> {
        self.metrics_port
            .map(|port| resolve(&self.host, port))
            .transpose()
    }
}

/// First socket address `host:port` resolves to.
fn resolve(host: &str, port: u16) -> io::Result<SocketAddr> {
    (host, port).to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no addresses found for {}", host),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.http_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.enable_swagger);
        assert!(config.metrics_addr().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_metrics_port_clash() {
        let config = Config {
            metrics_port: Some(8080),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn metrics_addr_uses_host() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            metrics_port: Some(9100),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(
            config.metrics_addr().unwrap().map(|a| a.to_string()),
            Some("127.0.0.1:9100".to_string())
        );
    }

    #[test]
    fn host_accepts_a_hostname() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
        let addr = config.http_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn validate_rejects_blank_host() {
        let config = Config {
            host: "  ".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn log_format_parses_lowercase() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
