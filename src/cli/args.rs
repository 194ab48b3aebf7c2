use crate::server::ServerConfig;
use clap::{Parser, ValueEnum};

/// Serve the wallet ledger REST API
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Serve the wallet ledger REST API", long_about = None)]
pub struct CliArgs {
    /// Address to bind the HTTP server to
    #[arg(
        long = "host",
        env = "WALLET_HOST",
        value_name = "HOST",
        default_value = "127.0.0.1",
        help = "Address to bind the HTTP server to"
    )]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(
        long = "port",
        env = "WALLET_PORT",
        value_name = "PORT",
        default_value_t = 5000,
        help = "Port to bind the HTTP server to"
    )]
    pub port: u16,

    /// Number of HTTP worker threads
    #[arg(
        long = "workers",
        env = "WALLET_WORKERS",
        value_name = "COUNT",
        help = "Number of HTTP worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Start without the demo cards, contacts and transactions
    #[arg(
        long = "no-seed",
        env = "WALLET_NO_SEED",
        help = "Start with only the implicit user and no demo data"
    )]
    pub no_seed: bool,

    /// Log output format
    #[arg(
        long = "log-format",
        env = "WALLET_LOG_FORMAT",
        value_name = "FORMAT",
        default_value = "text",
        help = "Log output format: 'text' for humans or 'json' for collectors"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// A zero worker count falls back to the default with a warning.
    ///
    /// # Returns
    ///
    /// A `ServerConfig` with values from CLI arguments or defaults.
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(
            self.host.clone(),
            self.port,
            self.workers.unwrap_or(default.workers),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Bind address tests
    #[rstest]
    #[case::defaults(&["program"], "127.0.0.1", 5000)]
    #[case::custom_host(&["program", "--host", "0.0.0.0"], "0.0.0.0", 5000)]
    #[case::custom_port(&["program", "--port", "8080"], "127.0.0.1", 8080)]
    fn test_bind_address_parsing(
        #[case] args: &[&str],
        #[case] expected_host: &str,
        #[case] expected_port: u16,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_server_config();

        assert_eq!(config.host, expected_host);
        assert_eq!(config.port, expected_port);
    }

    // Worker count tests, zero falls back to the default
    #[rstest]
    #[case::default_workers(&["program"], num_cpus::get())]
    #[case::custom_workers(&["program", "--workers", "3"], 3)]
    #[case::zero_workers(&["program", "--workers", "0"], num_cpus::get())]
    fn test_worker_config(#[case] args: &[&str], #[case] expected_workers: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_server_config().workers, expected_workers);
    }

    #[rstest]
    #[case::default_format(&["program"], LogFormat::Text, false)]
    #[case::json_format(&["program", "--log-format", "json"], LogFormat::Json, false)]
    #[case::no_seed(&["program", "--no-seed"], LogFormat::Text, true)]
    fn test_flags(#[case] args: &[&str], #[case] format: LogFormat, #[case] no_seed: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_format, format);
        assert_eq!(parsed.no_seed, no_seed);
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_port(&["program", "--port", "http"])]
    #[case::port_out_of_range(&["program", "--port", "70000"])]
    #[case::invalid_format(&["program", "--log-format", "xml"])]
    #[case::unexpected_positional(&["program", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
