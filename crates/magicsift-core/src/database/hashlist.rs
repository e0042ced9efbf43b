//! Parser for the digest hash list.
//!
//! The hash list is line-oriented UTF-8 text. Each record has the form
//!
//! ```text
//! <hex digest><two spaces><file name>
//! ```
//!
//! and becomes one [`SignatureDef`] whose pattern is the decoded digest.
//!
//! Any malformed record rejects the whole list. The one exception is
//! whitespace at the very end of the input: a final newline (or several blank
//! trailing lines) produces no record. Blank lines anywhere else are malformed.

use crate::error::{Error, Result};
use crate::signature::SignatureDef;
use std::path::Path;
use tracing::{debug, trace};

/// Separator between the digest and the file name
pub const SEPARATOR: &str = "  ";

/// Suffix appended to the file name to form a digest signature label
pub const DIGEST_LABEL_SUFFIX: &str = " (ripemd160 + sha256 digest)";

/// Parse hash list content into digest signatures, in line order
pub fn parse(content: &str) -> Result<Vec<SignatureDef>> {
    content
        .trim_end()
        .lines()
        .enumerate()
        .map(|(index, line)| parse_record(index + 1, line))
        .collect()
}

/// Read and parse a hash list file
pub fn load(path: impl AsRef<Path>) -> Result<Vec<SignatureDef>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::hash_list_read(path, e))?;
    let content = String::from_utf8(bytes).map_err(|_| Error::invalid_encoding(path))?;

    let signatures = parse(&content)?;
    debug!(
        "Loaded {} digest signatures from {}",
        signatures.len(),
        path.display()
    );
    Ok(signatures)
}

fn parse_record(line_number: usize, line: &str) -> Result<SignatureDef> {
    let line = line.trim();
    let parts: Vec<&str> = line.split(SEPARATOR).collect();

    let [digest_hex, filename] = parts[..] else {
        return Err(Error::malformed_record(line_number, line, parts.len()));
    };

    let digest = hex::decode(digest_hex.trim())
        .map_err(|e| Error::invalid_digest(line_number, e))?;
    let filename = filename.trim();

    trace!("Line {}: {} ({} digest bytes)", line_number, filename, digest.len());

    SignatureDef::new(format!("{}{}", filename, DIGEST_LABEL_SUFFIX), digest)
}
