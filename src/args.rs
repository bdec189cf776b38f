use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "punyscan",
    about = "List registered domains spoofable with look-alike characters in an IDN homograph attack",
    long_about = "Scans a list of registered domains and reports those whose second-level label \
                  is made only of characters that have an identical-looking counterpart in \
                  another script, so a punycode domain can pass for them in the address bar.\n\n\
                  FILE holds one record per line in the form [ <index>, '<hostname>' ].",
    version
)]
pub struct Args {
    /// Domain list to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print scan counters after the domain list
    #[arg(long)]
    pub stats: bool,
}
