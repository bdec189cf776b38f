pub mod alphabet;
pub mod args;
pub mod domain;
pub mod records;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod utils;

pub use alphabet::{is_vulnerable, ALPHABET};
pub use args::Args;
pub use domain::{split_domain, split_domain_with, PublicSuffixList, SplitResult, SuffixLookup};
pub use scanner::{scan_file, scan_lines, scan_reader};
pub use stats::{ScanReport, ScanStats};
