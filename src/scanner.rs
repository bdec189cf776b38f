use anyhow::{Context, Result};
use rayon::prelude::*;
use rayon::ThreadPool;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::alphabet::is_vulnerable;
use crate::domain::split_domain;
use crate::records::parse_record;
use crate::stats::{ScanReport, ScanStats};

pub fn scan_file(path: &Path, workers: Option<usize>) -> Result<ScanReport> {
    info!(action = "open", component = "input_file", file_path = ?path, "Opening domain list");
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {:?}", path))?;
    scan_reader(BufReader::new(file), workers)
}

pub fn scan_reader<R: BufRead>(reader: R, workers: Option<usize>) -> Result<ScanReport> {
    scan_in_chunks(reader, workers, CHUNK_SIZE)
}

/// Hostnames buffered between filter passes.
const CHUNK_SIZE: usize = 65_536;

fn scan_in_chunks<R: BufRead>(
    reader: R,
    workers: Option<usize>,
    chunk_size: usize,
) -> Result<ScanReport> {
    let start_time = Instant::now();
    info!(action = "start", component = "domain_scan", "Starting domain scan");

    let pool = build_pool(workers)?;
    let mut stats = ScanStats::default();
    let mut vulnerable = Vec::new();
    let mut chunk = Vec::with_capacity(chunk_size.min(CHUNK_SIZE));

    read_records(reader, &mut stats, |host| {
        chunk.push(host);
        if chunk.len() >= chunk_size {
            vulnerable.extend(filter_chunk(&chunk, pool.as_ref()));
            chunk.clear();
        }
    });
    vulnerable.extend(filter_chunk(&chunk, pool.as_ref()));
    stats.vulnerable = vulnerable.len() as u64;

    let total_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "domain_scan",
        lines_read = stats.lines_read,
        malformed_skipped = stats.malformed_skipped,
        hostnames_checked = stats.hostnames_checked,
        vulnerable = stats.vulnerable,
        duration_ms = total_time.as_millis(),
        "Domain scan completed"
    );

    Ok(ScanReport { vulnerable, stats })
}

/// Feed the hostname of every well-formed record to `on_host`, stopping at the first read error.
fn read_records<R, F>(mut reader: R, stats: &mut ScanStats, mut on_host: F)
where
    R: BufRead,
    F: FnMut(String),
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(
                    action = "read",
                    component = "input_file",
                    line_number = stats.lines_read + 1,
                    error = %e,
                    "Failed to read line"
                );
                break;
            }
        }
        stats.lines_read += 1;

        let line = String::from_utf8_lossy(&buf);
        match parse_record(&line) {
            Some(host) => {
                stats.hostnames_checked += 1;
                on_host(host.to_string());
            }
            None => {
                stats.malformed_skipped += 1;
                debug!(
                    action = "skip",
                    component = "record_parser",
                    line_number = stats.lines_read,
                    "Skipping malformed record"
                );
            }
        }
    }
}

pub fn is_vulnerable_host(host: &str) -> bool {
    let split = split_domain(host);
    if !is_vulnerable(&split.domain) {
        return false;
    }
    debug!(
        action = "match",
        component = "domain_filter",
        host = host,
        registrable = %split.registrable(),
        "Spoofable domain"
    );
    true
}

/// `None` for `Some(1)`, otherwise a pool of `workers` threads (default `min(cpus, 8)`).
fn build_pool(workers: Option<usize>) -> Result<Option<ThreadPool>> {
    if workers == Some(1) {
        return Ok(None);
    }

    let max_workers = workers.unwrap_or_else(|| {
        let cpu_count = num_cpus::get();
        std::cmp::min(cpu_count, 8)
    });

    info!(action = "configure", component = "domain_scan", worker_count = max_workers, "Using workers for processing");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers)
        .build()
        .context("Failed to build worker pool")?;
    Ok(Some(pool))
}

fn filter_chunk(hosts: &[String], pool: Option<&ThreadPool>) -> Vec<String> {
    match pool {
        None => hosts
            .iter()
            .filter(|host| is_vulnerable_host(host))
            .cloned()
            .collect(),
        // collect() into a Vec keeps input order
        Some(pool) => pool.install(|| {
            hosts
                .par_iter()
                .filter(|host| is_vulnerable_host(host))
                .cloned()
                .collect()
        }),
    }
}

/// Vulnerable hostnames of `hosts`, in order. `Some(1)` runs on the calling thread.
pub fn scan_lines(hosts: &[String], workers: Option<usize>) -> Result<Vec<String>> {
    let pool = build_pool(workers)?;
    Ok(filter_chunk(hosts, pool.as_ref()))
}
