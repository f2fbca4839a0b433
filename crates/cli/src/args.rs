use clap::{command, Parser};
use hmy_probe_lib::log::LoggingFormat;

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "hmy-probe")]
pub struct GlobalArgs {
    /// Node JSON-RPC endpoint URL (overrides the config file)
    #[arg(long, env = "NET_URL", global = true)]
    pub net_url: Option<String>,

    /// Path to probe configuration file (TOML format)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "standard", global = true)]
    pub logging_format: LoggingFormat,
}
