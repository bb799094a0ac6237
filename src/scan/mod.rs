// src/scan/mod.rs

pub mod input;
pub mod record;
pub mod rules;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Terminator};
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};
use tracing::{debug, info};

use crate::config::Config;
use input::NewlineTerminated;
use record::{Finding, Record};
use rules::{open_value_missing, EXPECTED_FIELDS};

/// Counts gathered over one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Rows seen, blank lines included.
    pub records: u64,
    /// Rows with the expected width, i.e. the ones the "open" check ran on.
    pub checked: u64,
    /// Rows of any other width. A blank line is a row with no fields.
    pub skipped: u64,
    /// Diagnostics written.
    pub flagged: u64,
}

impl ScanSummary {
    fn add_blank_rows(&mut self, n: u64) {
        self.records += n;
        self.skipped += n;
    }
}

/// Stream comma-delimited rows from `input`, writing one diagnostic line to `out`
/// for each 7-field row whose "open" value is blank or `null`.
///
/// Every row gets the next line number, blank lines included, so numbers line up
/// with the file as long as no quoted field spans several lines. There is no header
/// handling: the first row is checked like any other.
pub fn scan_reader<R: Read, W: Write>(input: R, out: &mut W) -> Result<ScanSummary> {
    // `\n` only: `\r` then stays in the last field and a `\r\n` line is not skipped
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(NewlineTerminated::new(input));

    let mut summary = ScanSummary::default();
    let mut record = StringRecord::new();
    // csv's newline count; starts at 1
    let mut line = rdr.position().line();

    loop {
        let more = rdr
            .read_record(&mut record)
            .with_context(|| format!("parsing record {}", summary.records + 1))?;
        let consumed = rdr.position().line().saturating_sub(line);
        line = rdr.position().line();

        if !more {
            // trailing blank lines
            summary.add_blank_rows(consumed);
            break;
        }

        // whatever the record itself does not account for was skipped blank lines
        summary.add_blank_rows(consumed.saturating_sub(lines_spanned(&record)));
        summary.records += 1;

        // counters only; the width gate itself lives in `open_value_missing`
        if record.len() == EXPECTED_FIELDS {
            summary.checked += 1;
        } else {
            summary.skipped += 1;
        }

        if open_value_missing(&record) {
            summary.flagged += 1;
            let finding = Finding(Record::from_csv(summary.records, &record));
            writeln!(out, "{}", finding).context("writing diagnostic")?;
        }
    }

    Ok(summary)
}

/// Physical lines a record occupies: its terminator plus any newlines inside quoted fields.
fn lines_spanned(record: &StringRecord) -> u64 {
    1 + record
        .iter()
        .map(|field| field.bytes().filter(|&b| b == b'\n').count() as u64)
        .sum::<u64>()
}

/// Open `path` and scan it. The handle is dropped on every exit path.
pub fn scan_file<W: Write>(path: &Path, out: &mut W) -> Result<ScanSummary> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    debug!(path = %path.display(), "opened");
    scan_reader(file, out).with_context(|| format!("scanning {}", path.display()))
}

/// Scan the configured file, printing diagnostics to stdout.
pub fn run(config: &Config) -> Result<ScanSummary> {
    info!(path = %config.csv_path.display(), "scanning for missing open values");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scan_file(&config.csv_path, &mut out)?;
    out.flush().context("flushing stdout")?;

    info!(
        records = summary.records,
        checked = summary.checked,
        skipped = summary.skipped,
        flagged = summary.flagged,
        "scan complete"
    );
    Ok(summary)
}
