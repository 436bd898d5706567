use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mdtodo", about = concat!("[x] mdtodo v", env!("CARGO_PKG_VERSION"), " - edit a markdown checklist"), version)]
pub struct Cli {
    /// Markdown checklist to open (created on first save if missing)
    pub file: PathBuf,

    /// Config file to use instead of the default
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write the log here (overrides config)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
