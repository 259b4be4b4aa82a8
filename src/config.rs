use clap::{Parser, ValueEnum};

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Uses a generic Chrome-like string without a specific version number to avoid
/// becoming outdated. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Scheme prefixed onto bare hosts received on the event channel.
pub const DEFAULT_SCHEME: &str = "http://";

/// Base URL of the IP geolocation lookup service.
///
/// The service is expected to answer `GET <base>/<ip>/json` with a JSON body
/// carrying `org`, `asn`, and `country` keys (ipinfo.io wire format).
pub const DEFAULT_GEO_API_BASE: &str = "https://ipinfo.io";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational output (default)
    Info,
    /// Verbose diagnostic output
    Debug,
    /// Extremely verbose output
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors
    Plain,
    /// Structured JSON format
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line flags.
///
/// # Examples
///
/// ```bash
/// # Basic usage (listens on 127.0.0.1:8080)
/// site_inspector
///
/// # Custom port and tighter outbound timeout
/// site_inspector --port 3000 --timeout-seconds 5
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_inspector",
    about = "Serves website analysis (network identity, subdomains, external resources) over HTTP and WebSocket."
)]
pub struct Config {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds for every outbound call
    ///
    /// Applies to the target page fetch and the geolocation lookup. A slow
    /// upstream can otherwise stall request handling indefinitely.
    #[arg(long, default_value_t = 10)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Base URL of the IP geolocation lookup service
    #[arg(long, default_value = DEFAULT_GEO_API_BASE)]
    pub geo_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        // Same defaults the CLI advertises
        Config::parse_from(std::iter::empty::<&str>())
    }
}
