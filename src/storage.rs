use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::inventory::Inventory;

/// Default storage file, created next to wherever the program runs.
pub static DEFAULT_STORAGE_FILE: &str = "CDInventory.dat";

/// How a load attempt was satisfied. Absent and blank files are normal
/// states of a fresh collection, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and decoded into an inventory.
    Loaded,
    /// The file did not exist; an empty one was created at the path.
    Created,
    /// The file existed but was blank or cut off mid-stream.
    Empty,
}

impl LoadStatus {
    /// Informational line to show the user, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Loaded => None,
            Self::Created => Some("Creating file."),
            Self::Empty => Some("File is blank. Please add CD's"),
        }
    }
}

/// Reads the whole inventory from `path`.
///
/// The on-disk format is bincode's fixed-width little-endian encoding of
/// the record sequence: a u64 record count, then per record an i64 id and
/// two u64-length-prefixed UTF-8 strings (title, artist).
///
/// A missing file is created empty (append-mode open, nothing written) so
/// later saves and reloads hit an existing path. A blank or truncated
/// file yields an empty inventory. Any other I/O or decode failure
/// propagates.
pub fn load(path: &Path) -> Result<(Inventory, LoadStatus)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "storage file absent, creating it");
            OpenOptions::new().append(true).create(true).open(path)?;
            return Ok((Inventory::new(), LoadStatus::Created));
        }
        Err(err) => return Err(err.into()),
    };

    if file.metadata()?.len() == 0 {
        debug!(path = %path.display(), "storage file is blank");
        return Ok((Inventory::new(), LoadStatus::Empty));
    }

    match bincode::deserialize_from::<_, Inventory>(BufReader::new(file)) {
        Ok(inventory) => {
            debug!(path = %path.display(), records = inventory.len(), "inventory loaded");
            Ok((inventory, LoadStatus::Loaded))
        }
        Err(err) if is_truncated(&err) => {
            debug!(path = %path.display(), "storage file truncated, treating as blank");
            Ok((Inventory::new(), LoadStatus::Empty))
        }
        Err(err) => Err(err.into()),
    }
}

/// Serializes the whole inventory to `path`, replacing any previous
/// content. The handle is scope-bound and flushed before release.
pub fn save(path: &Path, inventory: &Inventory) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, inventory)?;
    writer.flush()?;
    debug!(path = %path.display(), records = inventory.len(), "inventory saved");
    Ok(())
}

fn is_truncated(err: &bincode::Error) -> bool {
    matches!(&**err, bincode::ErrorKind::Io(io) if io.kind() == ErrorKind::UnexpectedEof)
}
