//! Trace and page-list reading.
//!
//! Both inputs share one record format: one page id per line, surrounding
//! whitespace ignored, blank lines skipped. Anything else that is not a
//! non-negative decimal integer is a `MalformedTrace` error naming the file and
//! 1-based line. The file handle lives only inside the reading call and is
//! closed on every return path, including parse failures.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::{PageId, PageRef, Result, SimError};

/// Reads a page-reference trace into an indexed sequence.
///
/// # Errors
///
/// `SimError::TraceNotFound` if `path` cannot be opened or read, and
/// `SimError::MalformedTrace` for the first record that is not a page id.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<PageRef>> {
    let pages = read_pages(path)?;
    Ok(PageRef::sequence(&pages))
}

/// Reads a pre-load page list (the initial working set) in file order.
///
/// # Errors
///
/// Same as [`read_trace`].
pub fn read_page_list(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    read_pages(path)
}

fn read_pages(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::TraceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let pages = parse_records(BufReader::new(file), path)?;
    debug!(path = %path.display(), records = pages.len(), "read page records");
    Ok(pages)
}

/// Parses page records from any buffered source.
///
/// `origin` is only used to label errors.
///
/// # Errors
///
/// `SimError::TraceNotFound` on a read failure, `SimError::MalformedTrace` on
/// the first unparsable record.
pub fn parse_records<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<PageId>> {
    let mut pages = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SimError::TraceNotFound {
            path: origin.to_path_buf(),
            source,
        })?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let page = record
            .parse::<PageId>()
            .map_err(|_| SimError::MalformedTrace {
                path: origin.to_path_buf(),
                line: idx + 1,
                record: record.to_owned(),
            })?;
        pages.push(page);
    }
    Ok(pages)
}
