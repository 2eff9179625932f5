//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "Examples:
  linkboard -c ./myconfig.yaml -p 3000
  linkboard --config /etc/linkboard/config.yaml --bind-addr 127.0.0.1 --port 9090";

/// Serve an HTML dashboard of links defined in a YAML file.
#[derive(Debug, Parser)]
#[command(name = "linkboard", version)]
#[command(about = "A hot-reloading HTML link dashboard", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Path to the YAML config file listing the links to serve
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Address to bind the HTTP listener to
    #[arg(short = 'a', long, default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}
