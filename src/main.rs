//! recipe-proxy: HTTP proxy in front of the Gemini generateContent API
//!
//! Accepts `{"cuisine": "..."}`, asks Gemini for a recipe using a server-held
//! API key, and relays the answer back to the caller.

use axum::http::Method;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use recipe_proxy::{
    config::{AppConfig, LogFormat},
    GeminiClient, RecipeHandler,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "recipe-proxy")]
#[command(version = "0.1.0")]
#[command(about = "HTTP proxy that asks Gemini for recipes")]
#[command(long_about = "
recipe-proxy accepts POST {\"cuisine\": \"...\"} and forwards a fixed recipe
prompt to the Gemini generateContent API. The API key is read from the
environment (GEMINI_API_KEY by default) and never returned to clients.

Example usage:
  GEMINI_API_KEY=... recipe-proxy run --port 3000
  recipe-proxy check-config --config config.yaml
")]
struct Cli {
    /// Path to config file (defaults are used if omitted and none is found)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log output format, overrides logging.format
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the proxy server
    Run {
        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override upstream base URL (e.g., "http://localhost:9090")
        #[arg(long)]
        upstream_url: Option<String>,
    },

    /// Validate configuration file
    CheckConfig,

    /// Send one recipe request upstream and print the result
    TestUpstream {
        /// Cuisine to ask for
        #[arg(long, default_value = "Thai")]
        cuisine: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_exit(cli.config.as_deref());
    if let Some(format) = cli.log_format {
        config.logging.format = format.into();
    }
    init_logging(cli.log_level, config.logging.format);

    match cli.command {
        Commands::Run { port, upstream_url } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(url) = upstream_url {
                config.upstream.url = url;
            }
            validate_or_exit(&config);
            recipe_proxy::run_server(config).await?;
        }
        Commands::CheckConfig => {
            check_config(&config);
        }
        Commands::TestUpstream { cuisine } => {
            validate_or_exit(&config);
            test_upstream(&config, &cuisine).await?;
        }
    }

    Ok(())
}

fn init_logging(level: Option<LogLevel>, format: LogFormat) {
    let level_filter = if let Some(level) = level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            .to_string()
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter));

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().flatten_event(true).init(),
    }
}

/// Validate configuration and print the effective settings
fn check_config(config: &AppConfig) {
    match config.validate() {
        Ok(()) => {
            println!("✓ Configuration is valid\n");
            println!("Server:");
            println!("  Listen: {}:{}", config.server.host, config.server.port);
            println!("\nUpstream:");
            println!("  Endpoint: {}", config.upstream.endpoint());
            println!("  Timeout: {}s", config.upstream.timeout_seconds);
            let key_state = if config.upstream.resolve_api_key().is_some() {
                "set"
            } else {
                "NOT SET"
            };
            println!("  API key: ${} ({})", config.upstream.api_key_env, key_state);
            println!("\nLogging:");
            println!("  Format: {:?}", config.logging.format);
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run one request through the real handler against the configured upstream
async fn test_upstream(config: &AppConfig, cuisine: &str) -> anyhow::Result<()> {
    let client = GeminiClient::from_config(&config.upstream)?;
    println!("Testing upstream: {}", client.endpoint());

    let handler = RecipeHandler::new(config.upstream.resolve_api_key(), Arc::new(client));
    if !handler.has_credential() {
        println!("✗ ${} is not set", config.upstream.api_key_env);
        std::process::exit(1);
    }

    let body = serde_json::to_vec(&serde_json::json!({ "cuisine": cuisine }))?;
    let response = handler.handle(&Method::POST, &body).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    if status.is_success() {
        println!("✓ Upstream answered");
        println!("  Status: {}", status);
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;
        if let Some(text) = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|t| t.as_str())
        {
            println!("\n{}", text);
        }
    } else {
        println!("✗ Request failed with status {}", status);
        println!("  Response: {}", String::from_utf8_lossy(&bytes));
        std::process::exit(1);
    }

    Ok(())
}

fn validate_or_exit(config: &AppConfig) {
    if let Err(e) = config.validate() {
        eprintln!("✗ Configuration error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration or exit with error
fn load_config_or_exit(config_path: Option<&std::path::Path>) -> AppConfig {
    match AppConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            eprintln!("\nYou can copy config.yaml.default and modify it:");
            eprintln!("  cp config.yaml.default config.yaml");
            std::process::exit(1);
        }
    }
}
