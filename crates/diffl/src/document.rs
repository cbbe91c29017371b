use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

/// Largest document accepted, in bytes
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Check if a path argument names standard input
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Load a UTF-8 document from a file, or from standard input for `-`
pub fn load_document(path: &Path) -> Result<String> {
    let bytes = if is_stdin(path) {
        read_limited(io::stdin().lock(), "standard input")?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        if len > MAX_DOCUMENT_BYTES {
            bail!(
                "{} is too large ({} bytes, limit is {} bytes)",
                path.display(),
                len,
                MAX_DOCUMENT_BYTES
            );
        }
        read_limited(file, &path.display().to_string())?
    };

    debug!("loaded {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn read_limited(reader: impl Read, name: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_DOCUMENT_BYTES + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", name))?;

    if bytes.len() as u64 > MAX_DOCUMENT_BYTES {
        bail!("{} exceeds the limit of {} bytes", name, MAX_DOCUMENT_BYTES);
    }
    Ok(bytes)
}
