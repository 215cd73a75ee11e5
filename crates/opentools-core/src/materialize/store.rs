use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::MaterializeError;
use super::Collection;

/// File-based entity store.
///
/// One JSON file per entity:
/// ```text
/// data_root/
///   licenses/mit.json
///   organizations/acme-corp.json
///   languages/rust.json
///   software/ripgrep.json
/// ```
/// Files are only ever created, never rewritten.
pub struct EntityStore {
    root: PathBuf,
}

impl EntityStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory of a collection.
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.key())
    }

    /// Returns the path of an entity file.
    pub fn entity_path(&self, collection: Collection, slug: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", slug))
    }

    /// Writes `entity` unless a file already exists at its path.
    ///
    /// Returns the path when a new file was created, `None` when it was
    /// already there.
    pub fn create_new<E: Serialize>(
        &self,
        collection: Collection,
        slug: &str,
        entity: &E,
    ) -> Result<Option<PathBuf>, MaterializeError> {
        let path = self.entity_path(collection, slug);
        if path.exists() {
            return Ok(None);
        }

        let dir = self.collection_dir(collection);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| MaterializeError::io(&dir, e))?;
        }

        let json = to_indented_json(entity)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(None),
            Err(e) => return Err(MaterializeError::io(&path, e)),
        };
        file.write_all(&json).map_err(|e| MaterializeError::io(&path, e))?;

        Ok(Some(path))
    }
}

/// Serializes with four-space indentation.
fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}
