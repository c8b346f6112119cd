use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH"));

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version = VERSION)]
#[command(about = "In-memory contact directory bot", long_about = None)]
pub struct Cli {
    /// Execute a single command line and exit instead of starting the REPL
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Override the input prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
