use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "trace-lookup")]
#[command(about = "Phone number tracing and vehicle registration lookup")]
pub struct Cli {
    #[arg(long, global = true, default_value = "trace-lookup.toml")]
    pub config: PathBuf,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print reports as JSON")]
    pub json: bool,

    /// 限流用的使用者識別
    #[arg(long, global = true, default_value = "local")]
    pub user_id: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Trace a phone number
    Trace { number: String },
    /// Look up a vehicle registration
    Vehicle { registration: String },
    /// Tell whether text looks like a phone number or a registration
    Detect { text: String },
    /// Interactive session reading commands from stdin
    Chat,
}
