use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge list to read instead of stdin, one `from,to,distance` per line
    pub path: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more to stderr (repeatable)")]
    pub verbose: u8,

    #[arg(short = 'w', long, help = "Also print the route distance to stderr")]
    pub show_weight: bool,
}

impl Cli {
    pub fn get() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
