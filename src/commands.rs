use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::constants::*;
use crate::error::Result;
use crate::ops;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"), author = env!("CARGO_PKG_AUTHORS"), version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "The mnemonic is read from ETH_MNEMONIC, never from the command line.")]
pub struct Cli {
    #[arg(long, value_name = "PATH", help = "Load variables from this file instead of ./.env")]
    pub env_file: Option<PathBuf>,
    #[arg(long, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL, help = "Log filter used when RUST_LOG is unset")]
    pub log_level: String,
}

pub fn execute(cli: &Cli) -> Result<()> {
    let config = Config::from_env(cli.env_file.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ops::run(&config, &mut out)
}
