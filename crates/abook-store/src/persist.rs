use crate::error::{Result, StoreError};
use crate::paths;
use crate::ContactBook;
use abook_core::RecordDto;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of the whole book: a version tag plus one entry per
/// contact, in book order.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<RecordDto>,
}

/// Writes a snapshot of the whole book to `path`. The payload goes to a
/// sibling temp file first and is renamed into place, so an interrupted
/// save leaves the previous snapshot untouched.
pub fn save(book: &ContactBook, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let file = BookFile {
        version: SNAPSHOT_VERSION,
        contacts: book.iter().map(RecordDto::from).collect(),
    };
    let payload = serde_json::to_vec_pretty(&file)?;

    let tmp = temp_path(path);
    fs::write(&tmp, payload)?;
    restrict_file_permissions(&tmp)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a snapshot back into a [`ContactBook`]. Every field is pushed
/// through the validating constructors again, so a hand-edited or
/// corrupt file fails with `Corrupt` instead of producing an invalid
/// record.
pub fn load(path: &Path) -> Result<ContactBook> {
    let payload = fs::read(path)?;
    let file: BookFile = serde_json::from_slice(&payload)?;
    if file.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: file.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let mut book = ContactBook::new();
    for entry in file.contacts {
        book.add(entry.into_record()?);
    }
    Ok(book)
}

/// Like [`load`], but a missing file yields an empty book.
pub fn load_or_default(path: &Path) -> Result<ContactBook> {
    if !path.exists() {
        return Ok(ContactBook::new());
    }
    load(path)
}

fn temp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
