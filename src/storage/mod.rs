//! Index persistence.
//!
//! One index maps to one file holding the [`codec`] encoding. A missing
//! file on load is an expected condition (it triggers a rebuild upstream),
//! so [`load_index`] reports it as `Ok(None)` rather than an error; a file
//! that exists but fails validation is a storage error.

pub mod codec;

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::index::Index;

pub use self::codec::{decode_index, encode_index};

/// Write the index to `path`, replacing any previous file.
pub fn save_index<P: AsRef<Path>>(path: P, index: &Index) -> Result<()> {
    let bytes = encode_index(index);
    fs::write(path.as_ref(), &bytes)?;
    info!(
        "index saved to {} ({} bytes, {} documents, {} terms)",
        path.as_ref().display(),
        bytes.len(),
        index.doc_count(),
        index.term_count()
    );
    Ok(())
}

/// Read an index from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<Option<Index>> {
    let bytes = match fs::read(path.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no index file at {}", path.as_ref().display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let index = decode_index(&bytes)?;
    info!(
        "index loaded from {} ({} documents, {} terms)",
        path.as_ref().display(),
        index.doc_count(),
        index.term_count()
    );
    Ok(Some(index))
}
