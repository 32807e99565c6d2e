//! Line-oriented parser for the restricted share-document shape.
//!
//! Accepted documents are a strict subset of JSON, one field per line:
//!
//! ```text
//! {
//!   "keys": {
//!     "n": 4,
//!     "k": 3
//!   },
//!   "1": {
//!     "base": "10",
//!     "value": "4"
//!   }
//! }
//! ```
//!
//! Each root entry must carry its `base` line directly followed by its
//! `value` line; unknown fields and stray braces are ignored.

use std::str::FromStr;

use num_bigint::BigInt;
use tracing::{debug, warn};

use crate::error::Error;
use crate::radix;

/// One decoded share: a point (x, y) on the hidden polynomial, together
/// with the encoding it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// The share index (x-coordinate), taken from the root entry's key.
    pub x: i64,
    /// Numeric base the value is written in.
    pub base: u32,
    /// The digit string exactly as it appeared in the document.
    pub raw: String,
    /// The decoded y-coordinate.
    pub y: BigInt,
}

/// Declared share count and threshold from the document's `keys` block.
/// Hints only: the caller re-checks against the shares actually decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A parsed share document, shares in root-entry order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub keys: Keys,
    pub shares: Vec<Share>,
}

impl Document {
    /// The first k decoded shares, the subset reconstruction runs on.
    pub fn select(&self) -> Result<&[Share], Error> {
        if self.shares.len() < self.keys.k {
            return Err(Error::InsufficientShares {
                required: self.keys.k,
                actual: self.shares.len(),
            });
        }
        Ok(&self.shares[..self.keys.k])
    }
}

/// Parser position within the document.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Scanning for the keys block or the next root entry.
    Top,
    /// Inside the `keys` block.
    InKeys,
    /// Inside a root entry, base not yet seen.
    InRoot { index: i64 },
    /// Base consumed; the very next line must carry the value.
    AwaitValue { index: i64, base: u32 },
}

/// Parse a share document.
///
/// Shares whose value fails to decode are dropped with a warning and
/// parsing continues; a recognized numeric field that does not parse as
/// an integer aborts the whole parse.
pub fn parse_document(text: &str) -> Result<Document, Error> {
    let mut doc = Document::default();
    let mut state = State::Top;

    for line in text.lines() {
        let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() {
            continue;
        }
        if line.contains("\"keys\":{") {
            state = State::InKeys;
            continue;
        }

        state = match state {
            State::InKeys => {
                if line == "}," || line == "}" {
                    State::Top
                } else {
                    let bare = strip_quotes(&line);
                    if let Some(token) = bare.strip_prefix("n:") {
                        doc.keys.n = parse_number("n", token)?;
                    } else if let Some(token) = bare.strip_prefix("k:") {
                        doc.keys.k = parse_number("k", token)?;
                    }
                    State::InKeys
                }
            }
            State::Top | State::InRoot { .. } => {
                if let Some(index) = root_start(&line)? {
                    debug!(index, "entering root entry");
                    State::InRoot { index }
                } else if let State::InRoot { index } = state {
                    let bare = strip_quotes(&line);
                    if let Some(token) = bare.strip_prefix("base:") {
                        let base = parse_number("base", token)?;
                        State::AwaitValue { index, base }
                    } else {
                        State::InRoot { index }
                    }
                } else {
                    State::Top
                }
            }
            State::AwaitValue { index, base } => {
                // Fixed adjacency: whatever this line holds, the entry is
                // over after it.
                let bare = strip_quotes(&line);
                if let Some(raw) = bare.strip_prefix("value:") {
                    let raw = raw.strip_suffix(',').unwrap_or(raw);
                    match radix::decode(raw, base) {
                        Ok(y) => doc.shares.push(Share {
                            x: index,
                            base,
                            raw: raw.to_string(),
                            y,
                        }),
                        Err(err) => warn!(index, base, %err, "dropping share"),
                    }
                } else {
                    warn!(index, "no value on the line after base, dropping share");
                }
                State::Top
            }
        };
    }
    Ok(doc)
}

fn strip_quotes(line: &str) -> String {
    line.chars().filter(|&c| c != '"').collect()
}

/// A root entry opens with a quoted integer key: `"2":{`.
fn root_start(line: &str) -> Result<Option<i64>, Error> {
    let Some(rest) = line.strip_prefix('"') else {
        return Ok(None);
    };
    let Some((key, tail)) = rest.split_once('"') else {
        return Ok(None);
    };
    if tail != ":{" {
        return Ok(None);
    }
    parse_number("share index", key).map(Some)
}

/// Integer field parsing with trailing-comma tolerance.
fn parse_number<T: FromStr>(field: &'static str, token: &str) -> Result<T, Error> {
    let token = token.strip_suffix(',').unwrap_or(token);
    token.parse().map_err(|_| Error::MalformedNumber {
        field,
        token: token.to_string(),
    })
}
