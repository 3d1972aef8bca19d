//! Versioned binary encoding of an index.
//!
//! Layout, all integers varint unless noted:
//!
//! ```text
//! magic "XIDX" (4 bytes) | format version (u8) | kind tag (u8)
//! doc count | term count
//! per term (sorted by token bytes):
//!   token length | token bytes
//!   boolean:    id count    | delta-encoded doc ids
//!   positional: entry count | per entry: doc-id delta
//!                           |   position count | delta-encoded positions
//! crc32 of everything above (u32, little-endian)
//! ```
//!
//! Terms are written in sorted token order so encoding is deterministic.
//! Delta encoding exploits the strictly-increasing invariants of posting
//! and position lists. The trailing checksum, magic and version byte let a
//! load distinguish "corrupt or foreign file" from "older format".

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, XiphosError};
use crate::index::posting::DocId;
use crate::index::{Index, InvertedIndex, PositionalInvertedIndex};
use crate::util::varint::{decode_u64, encode_u64};

const MAGIC: &[u8; 4] = b"XIDX";
const FORMAT_VERSION: u8 = 1;

const KIND_BOOLEAN: u8 = 0;
const KIND_POSITIONAL: u8 = 1;

/// Encode an index to its binary form, checksum included.
pub fn encode_index(index: &Index) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(MAGIC);
    buf.push(FORMAT_VERSION);

    match index {
        Index::Boolean(inner) => {
            buf.push(KIND_BOOLEAN);
            encode_u64(index.doc_count(), &mut buf);
            encode_u64(inner.term_count() as u64, &mut buf);

            for (token, list) in sorted_terms(inner.iter()) {
                encode_token(token, &mut buf);
                encode_doc_ids(list.doc_ids(), &mut buf);
            }
        }
        Index::Positional(inner) => {
            buf.push(KIND_POSITIONAL);
            encode_u64(index.doc_count(), &mut buf);
            encode_u64(inner.term_count() as u64, &mut buf);

            for (token, list) in sorted_terms(inner.iter()) {
                encode_token(token, &mut buf);
                encode_u64(list.len() as u64, &mut buf);
                let mut previous = 0u32;
                for entry in list.entries() {
                    encode_u64((entry.doc_id - previous) as u64, &mut buf);
                    previous = entry.doc_id;
                    encode_positions(&entry.positions, &mut buf);
                }
            }
        }
    }

    let checksum = crc32fast::hash(&buf);
    let mut trailer = [0u8; 4];
    LittleEndian::write_u32(&mut trailer, checksum);
    buf.extend_from_slice(&trailer);
    buf
}

/// Decode an index from its binary form, verifying checksum, magic and
/// format version.
pub fn decode_index(bytes: &[u8]) -> Result<Index> {
    if bytes.len() < MAGIC.len() + 2 + 4 {
        return Err(XiphosError::storage("index file truncated"));
    }

    let (body, trailer) = bytes.split_at(bytes.len() - 4);
    let stored = LittleEndian::read_u32(trailer);
    let computed = crc32fast::hash(body);
    if stored != computed {
        return Err(XiphosError::storage(format!(
            "index file checksum mismatch (stored {stored:#010x}, computed {computed:#010x})"
        )));
    }

    if &body[..4] != MAGIC {
        return Err(XiphosError::storage("not an index file (bad magic)"));
    }
    let version = body[4];
    if version != FORMAT_VERSION {
        return Err(XiphosError::storage(format!(
            "unsupported index format version {version} (expected {FORMAT_VERSION})"
        )));
    }
    let kind = body[5];

    let mut cursor = Cursor {
        bytes: body,
        offset: 6,
    };
    let doc_count = cursor.read_u64()?;
    let term_count = cursor.read_count()?;

    match kind {
        KIND_BOOLEAN => {
            let mut index = InvertedIndex::new();
            for _ in 0..term_count {
                let token = cursor.read_string()?;
                let ids = cursor.read_doc_ids()?;
                for id in ids {
                    index.record(&token, id);
                }
            }
            index.set_doc_count(doc_count);
            Ok(Index::Boolean(index))
        }
        KIND_POSITIONAL => {
            let mut index = PositionalInvertedIndex::new();
            for _ in 0..term_count {
                let token = cursor.read_string()?;
                let entry_count = cursor.read_count()?;
                let mut previous = 0u32;
                for _ in 0..entry_count {
                    let doc_id = undelta(previous, cursor.read_u64()?)?;
                    previous = doc_id;
                    for position in cursor.read_positions()? {
                        index.record(&token, doc_id, position);
                    }
                }
            }
            index.set_doc_count(doc_count);
            Ok(Index::Positional(index))
        }
        other => Err(XiphosError::storage(format!(
            "unknown index kind tag {other}"
        ))),
    }
}

fn sorted_terms<'a, T>(iter: impl Iterator<Item = (&'a str, &'a T)>) -> Vec<(&'a str, &'a T)> {
    let mut terms: Vec<_> = iter.collect();
    terms.sort_by_key(|(token, _)| *token);
    terms
}

fn encode_token(token: &str, buf: &mut Vec<u8>) {
    encode_u64(token.len() as u64, buf);
    buf.extend_from_slice(token.as_bytes());
}

fn encode_doc_ids(ids: &[DocId], buf: &mut Vec<u8>) {
    encode_u64(ids.len() as u64, buf);
    let mut previous = 0u32;
    for &id in ids {
        encode_u64((id - previous) as u64, buf);
        previous = id;
    }
}

fn encode_positions(positions: &[u32], buf: &mut Vec<u8>) {
    encode_u64(positions.len() as u64, buf);
    let mut previous = 0u32;
    for &position in positions {
        encode_u64((position - previous) as u64, buf);
        previous = position;
    }
}

/// Reconstruct an absolute value from a delta, rejecting deltas that do
/// not fit or would overflow the accumulator.
fn undelta(previous: u32, delta: u64) -> Result<u32> {
    u32::try_from(delta)
        .ok()
        .and_then(|delta| previous.checked_add(delta))
        .ok_or_else(|| XiphosError::storage("delta value out of range"))
}

struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Cursor<'_> {
    fn read_u64(&mut self) -> Result<u64> {
        let (value, read) = decode_u64(&self.bytes[self.offset..])?;
        self.offset += read;
        Ok(value)
    }

    /// Read an element count, bounding it by the remaining input.
    ///
    /// Every encoded element takes at least one byte, so a declared count
    /// larger than the bytes left is corrupt regardless of what follows.
    /// Checking here keeps downstream allocations proportional to the
    /// actual file size.
    fn read_count(&mut self) -> Result<usize> {
        let count = self.read_u64()?;
        let remaining = (self.bytes.len() - self.offset) as u64;
        if count > remaining {
            return Err(XiphosError::storage(format!(
                "declared count {count} exceeds remaining input ({remaining} bytes)"
            )));
        }
        Ok(count as usize)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_count()?;
        let raw = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        String::from_utf8(raw.to_vec())
            .map_err(|_| XiphosError::storage("invalid UTF-8 in token"))
    }

    fn read_deltas(&mut self) -> Result<Vec<u32>> {
        let count = self.read_count()?;
        let mut values = Vec::with_capacity(count);
        let mut previous = 0u32;
        for _ in 0..count {
            let value = undelta(previous, self.read_u64()?)?;
            previous = value;
            values.push(value);
        }
        Ok(values)
    }

    fn read_doc_ids(&mut self) -> Result<Vec<DocId>> {
        self.read_deltas()
    }

    fn read_positions(&mut self) -> Result<Vec<u32>> {
        self.read_deltas()
    }
}
