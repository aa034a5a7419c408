//! E-Store backend status service entry point.

use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use estore_backend::api::docs::{openapi_json, OPENAPI_PATH, SWAGGER_UI_PATH};
use estore_backend::api::{create_router_with, AppState, RouterOptions};
use estore_backend::config::{Config, LogFormat};
use estore_backend::directory::{self, EndpointGroup, API_INFO_PATH, HEALTH_PATH};
use estore_backend::utils::shutdown_signal;
use estore_backend::{metrics, ServiceError, APPLICATION_NAME, APPLICATION_VERSION};

/// E-Store Management System backend.
#[derive(Parser, Debug)]
#[command(name = "estore-backend")]
#[command(about = "Status and service-directory endpoints for the E-Store backend")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Host name or IP address to bind (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the endpoint-group directory.
    Routes,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::Routes) => cmd_routes(),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::CheckConfig) => cmd_check_config(&load_config(&args)?),
        Some(Command::Serve) | None => cmd_serve(load_config(&args)?).await,
    }
}

/// Load configuration, apply CLI overrides and initialize logging.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(ServiceError::from)?;
    apply_overrides(&mut config, args);
    init_logging(&config);
    Ok(config)
}

/// Apply CLI flags on top of the environment configuration.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose |= args.verbose;
}

/// Initialize logging.
fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("estore_backend=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("E-STORE BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(ServiceError::InvalidConfig(e).into());
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  HTTP Address: {}:{}", config.host, config.port);
    match config.metrics_port {
        Some(port) => println!("  Metrics Exporter: {}:{}", config.host, port),
        None => println!("  Metrics Exporter: Disabled"),
    }
    println!(
        "  Swagger UI: {}",
        if config.enable_swagger { "Enabled" } else { "Disabled" }
    );
    println!(
        "  CORS: {}",
        if config.cors_permissive { "Permissive" } else { "Same-origin" }
    );
    println!("  Log Level: {} ({})", config.rust_log, config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the endpoint-group directory.
fn cmd_routes() -> anyhow::Result<()> {
    println!("{} v{}", APPLICATION_NAME, APPLICATION_VERSION);
    println!("----------------------------------------------------------------------");
    println!("  GET {:<12} welcome", "/");
    println!("  GET {:<12} liveness probe", HEALTH_PATH);
    println!("  GET {:<12} endpoint directory", API_INFO_PATH);
    println!("----------------------------------------------------------------------");
    for group in EndpointGroup::iter() {
        let marker = if group.on_welcome() { ' ' } else { '*' };
        println!("{} {:<14} {}", marker, group.prefix(), group.summary());
    }
    println!("----------------------------------------------------------------------");
    println!("* listed by {} only", API_INFO_PATH);

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    let json = openapi_json().map_err(ServiceError::from)?;
    println!("{}", json);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }

    // Descriptions only reach a recorder that is already installed
    if let Some(addr) = config.metrics_addr().map_err(ServiceError::from)? {
        metrics::install_exporter(addr)?;
        metrics::init_metrics();
        info!("Prometheus exporter listening on {}", addr);
    }

    directory::warm_up();

    let options = RouterOptions::from(&config);
    let router = create_router_with(AppState::new(), options);

    let addr = config.http_addr().map_err(ServiceError::from)?;
    let listener = TcpListener::bind(addr).await.map_err(ServiceError::from)?;
    info!("{} v{} listening on {}", APPLICATION_NAME, APPLICATION_VERSION, addr);
    if options.swagger {
        info!("Swagger UI at {} (document {})", SWAGGER_UI_PATH, OPENAPI_PATH);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_flag_accepts_hostnames() {
        let args = Args::try_parse_from(["estore-backend", "--host", "myhost", "routes"]).unwrap();

        assert_eq!(args.host.as_deref(), Some("myhost"));
        assert!(matches!(args.command, Some(Command::Routes)));
    }

    #[test]
    fn flags_override_environment_config() {
        let args = Args::try_parse_from(["estore-backend", "-v", "--port", "9000", "serve"]).unwrap();
        let mut config = Config::default();

        apply_overrides(&mut config, &args);

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.verbose);
    }

    #[test]
    fn missing_flags_keep_environment_config() {
        let args = Args::try_parse_from(["estore-backend", "check-config"]).unwrap();
        let mut config = Config {
            host: "localhost".to_string(),
            port: 8181,
            ..Config::default()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8181);
        assert!(!config.verbose);
    }
}
