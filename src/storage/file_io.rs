//! Line-oriented file I/O
//!
//! Reading, appending and rewriting plain text files one record per line.
//! Full rewrites go through a temp file and a rename so a failed write never
//! leaves a half-written ledger behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::warn;

use crate::error::LedgerError;

/// Read all non-blank lines from a file, returning nothing if it doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut lines = Vec::new();
    for (line_num, chunk) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = chunk.map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to read {} line {}: {}",
                path.display(),
                line_num + 1,
                e
            ))
        })?;

        // Files written by other tools may not be UTF-8; keep the record and
        // replace only the bytes that cannot be decoded
        let mut line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!(
                    "{} line {} is not valid UTF-8; undecodable bytes replaced",
                    path.display(),
                    line_num + 1
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        if line.ends_with('\r') {
            line.pop();
        }

        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Append a single line to a file, creating it if needed, and flush
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    // A last record without its newline would otherwise be merged with this one
    if !ends_with_newline(&mut file)
        .map_err(|e| LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e)))?
    {
        writeln!(file).map_err(|e| {
            LedgerError::Storage(format!("Failed to append to {}: {}", path.display(), e))
        })?;
    }

    writeln!(file, "{}", line)
        .map_err(|e| LedgerError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace a file's contents with the given lines (write to temp, then rename)
pub fn write_lines_atomic<P, S>(path: P, lines: &[S]) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// True for an empty file or one whose last byte is `\n`
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
