// src/lib.rs

pub mod config;
pub mod scan;

pub use config::Config;
pub use scan::{run, scan_file, scan_reader, ScanSummary};
