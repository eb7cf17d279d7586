//! OpenSSH public key parsing
//!
//! Validates `authorized_keys` lines before they are uploaded.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// A parsed `authorized_keys` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedKey {
    /// Key algorithm, e.g. `ssh-ed25519`
    pub algorithm: String,
    /// Decoded key blob in SSH wire format
    pub blob: Vec<u8>,
    /// Trailing comment, usually `user@host`
    pub comment: Option<String>,
    /// The validated line, trimmed
    pub line: String,
}

/// Parse the first key of an `authorized_keys` formatted text
///
/// Blank lines and `#` comments are skipped. Leading key options
/// (`command="..."` and friends) are not supported. The base64 blob must
/// decode and start with the same algorithm name as the first field.
pub fn parse_authorized_key(input: &str) -> Result<AuthorizedKey> {
    let line = input
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .ok_or_else(|| Error::invalid_public_key("no key found"))?;

    let mut fields = line.split_whitespace();
    let algorithm = fields
        .next()
        .ok_or_else(|| Error::invalid_public_key("no key found"))?;
    let encoded = fields
        .next()
        .ok_or_else(|| Error::invalid_public_key("missing key data"))?;

    let comment = fields.collect::<Vec<_>>().join(" ");
    let comment = (!comment.is_empty()).then_some(comment);

    let blob = STANDARD
        .decode(encoded)
        .map_err(|e| Error::invalid_public_key(format!("key data is not base64: {e}")))?;

    let embedded = read_string(&blob)
        .ok_or_else(|| Error::invalid_public_key("key data is truncated"))?;
    if embedded != algorithm.as_bytes() {
        return Err(Error::invalid_public_key(format!(
            "key data does not match algorithm '{algorithm}'"
        )));
    }

    Ok(AuthorizedKey {
        algorithm: algorithm.to_string(),
        blob,
        comment,
        line: line.to_string(),
    })
}

/// Read the leading length-prefixed string of an SSH wire blob
fn read_string(data: &[u8]) -> Option<&[u8]> {
    let len_bytes: [u8; 4] = data.get(..4)?.try_into().ok()?;
    let len = u32::from_be_bytes(len_bytes) as usize;
    data.get(4..4 + len)
}
