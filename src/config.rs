//! Command line and environment configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// The ledger API address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// The web front-end for the ledger API.
///
/// Every option can also be set through the environment variable named in its help text.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The base URL of the ledger API, e.g. "http://localhost:5000".
    #[arg(long, env = "LEDGER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// The port to serve the front-end from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// The IP address to bind the server to.
    #[arg(long, env = "BIND_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub address: IpAddr,

    /// The directory holding the stylesheet and scripts served under /static.
    #[arg(long, env = "STATIC_DIR", default_value = "static/")]
    pub static_dir: PathBuf,
}

impl Config {
    /// The address the server should listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
