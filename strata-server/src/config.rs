//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments, with environment fallbacks
#[derive(Parser, Debug, Clone)]
#[command(name = "strata-server")]
#[command(about = "Strata string analysis service")]
#[command(version)]
pub struct Args {
    /// HTTP server port
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// HTTP server address (overrides port)
    #[arg(short, long)]
    pub address: Option<String>,

    /// SQLite database file; strings are kept in memory when omitted
    #[arg(short, long, env = "STRATA_DATABASE")]
    pub database: Option<PathBuf>,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Resolve the socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        match &self.address {
            Some(address) => address
                .parse()
                .map_err(|e| format!("failed to parse address '{}': {}", address, e)),
            None => format!("0.0.0.0:{}", self.port)
                .parse()
                .map_err(|e| format!("failed to parse port {}: {}", self.port, e)),
        }
    }
}
