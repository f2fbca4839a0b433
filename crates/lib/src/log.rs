use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone, ValueEnum)]
pub enum LoggingFormat {
    Standard,
    Json,
}

pub const DEFAULT_LOG_FILTER: &str = "info,jsonrpsee_server=warn,hyper=warn,reqwest=warn";
