#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: u64,
    pub malformed_skipped: u64,
    pub hostnames_checked: u64,
    pub vulnerable: u64,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    /// Vulnerable hostnames in input order.
    pub vulnerable: Vec<String>,
    pub stats: ScanStats,
}
