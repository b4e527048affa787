//! Collision-free wordlist file names

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Candidate name for attempt `n`: `base.ext`, then `base1.ext`, `base2.ext`, ...
pub fn candidate_name(base_name: &str, extension: &str, attempt: u64) -> String {
    if attempt == 0 {
        format!("{base_name}{extension}")
    } else {
        format!("{base_name}{attempt}{extension}")
    }
}

/// Create the first candidate in `dir` that does not exist yet
///
/// Files are opened with create-new semantics, so a name taken between
/// the check and the open is skipped rather than overwritten.
pub fn create_unique(dir: &Path, base_name: &str, extension: &str) -> io::Result<(PathBuf, File)> {
    let mut attempt = 0u64;
    loop {
        let path = dir.join(candidate_name(base_name, extension, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("{} exists, trying next name", path.display());
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
