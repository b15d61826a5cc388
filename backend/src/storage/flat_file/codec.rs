//! Line and field codec shared by the task and wish repositories.
//!
//! Records are `|`-separated with no quoting and no header. String fields
//! are escaped so they never contain the delimiter or a line break:
//!
//! | raw        | stored |
//! |------------|--------|
//! | `\`        | `\\`   |
//! | newline    | `\n`   |
//! | `\|`       | `\p`   |

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, warn};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b'|';

pub fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('|', "\\p")
}

/// Reverse of [`escape`] in one left-to-right pass, so `\\p` stays `\p`.
/// Unknown sequences are kept as written.
pub fn unescape(stored: &str) -> String {
    let mut out = String::with_capacity(stored.len());
    let mut chars = stored.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('p') => out.push('|'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// `true` in any case is true, everything else is false
pub fn parse_flag(field: &str) -> bool {
    field.trim().eq_ignore_ascii_case("true")
}

pub fn format_flag(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// Read every non-blank line of `path` as a record. A missing file reads as
/// empty. Lines that are not valid UTF-8 are skipped.
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    if !path.exists() {
        debug!("{:?} does not exist yet, starting empty", path);
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let raw = result.with_context(|| format!("Failed to read {:?}", path))?;
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        match StringRecord::from_byte_record(raw) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Line {} of {:?} is not valid UTF-8 ({}). Skipping.", line, path, e);
            }
        }
    }

    debug!("Read {} lines from {:?}", records.len(), path);
    Ok(records)
}

/// Rewrite `path` with `records`, going through `<path>.tmp` and a rename
pub fn write_records<I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let temp_path = temp_path_for(path);

    {
        let temp_file = File::create(&temp_path)
            .with_context(|| format!("Failed to create {:?}", temp_path))?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(BufWriter::new(temp_file));

        for record in records {
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {:?}", path))?;
    debug!("Rewrote {:?}", path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
