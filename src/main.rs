use anyhow::Result;
use clap::Parser;
use tracing::error;

use punyscan::{report, scanner, utils, Args};

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match scanner::scan_file(&args.file, args.workers) {
        Ok(result) => {
            report::print_scan_results(&result, args.stats);
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
