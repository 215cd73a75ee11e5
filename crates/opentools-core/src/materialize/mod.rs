//! Turns a downloaded payload into entity files.
//!
//! The payload is a JSON object with optional `licenses`, `organizations`,
//! `languages` and `software` arrays. Every record must carry a
//! `unique_name`, which becomes the file stem and is not persisted. Records
//! whose file already exists are skipped; nothing is ever overwritten.
//!
//! A failing record aborts the run. Files written for earlier records stay
//! on disk.

mod error;
mod store;

pub use error::MaterializeError;
pub use store::EntityStore;

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::extract::{extract_bracketed_identifier, slugify_unique_name};
use crate::schema::{
    unique_name, Entity, License, Organization, ProgrammingLanguage, SoftwareTool,
    ValidationError,
};

/// A top-level collection of the payload and of the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Licenses,
    Organizations,
    Languages,
    Software,
}

impl Collection {
    /// Collections in processing order.
    pub const ALL: [Collection; 4] = [
        Collection::Licenses,
        Collection::Organizations,
        Collection::Languages,
        Collection::Software,
    ];

    /// Payload key and directory name.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Licenses => "licenses",
            Collection::Organizations => "organizations",
            Collection::Languages => "languages",
            Collection::Software => "software",
        }
    }

    /// Reference fields whose labels are reduced to identifiers before
    /// validation.
    pub fn reference_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Licenses | Collection::Organizations => &[],
            Collection::Languages => &["licenses"],
            Collection::Software => &["licenses", "languages", "organizations", "categories"],
        }
    }

    fn entity_kind(&self) -> &'static str {
        match self {
            Collection::Licenses => License::KIND,
            Collection::Organizations => Organization::KIND,
            Collection::Languages => ProgrammingLanguage::KIND,
            Collection::Software => SoftwareTool::KIND,
        }
    }
}

/// Materializes every recognized collection of `payload` under `data_root`.
///
/// Returns the newly created files in collection order. An empty result
/// means there was nothing new to add.
pub fn materialize(payload: &Value, data_root: &Path) -> Result<Vec<PathBuf>, MaterializeError> {
    let payload = payload.as_object().ok_or(MaterializeError::PayloadNotObject)?;
    let store = EntityStore::new(data_root);
    let mut created = Vec::new();

    for collection in Collection::ALL {
        let records = match payload.get(collection.key()) {
            None | Some(Value::Null) => continue,
            Some(Value::Array(records)) => records,
            Some(_) => return Err(MaterializeError::NotAList(collection.key())),
        };

        for (index, raw) in records.iter().enumerate() {
            match materialize_record(&store, collection, index, raw)? {
                Some(path) => {
                    debug!(path = %path.display(), "Created entity file");
                    created.push(path);
                }
                None => debug!(collection = collection.key(), index, "Entity file exists, skipping"),
            }
        }
    }

    info!(count = created.len(), "Materialized new entities");
    Ok(created)
}

/// Validates and writes a single record. `None` means its file already existed.
fn materialize_record(
    store: &EntityStore,
    collection: Collection,
    index: usize,
    raw: &Value,
) -> Result<Option<PathBuf>, MaterializeError> {
    let invalid = |source: ValidationError| MaterializeError::Validation {
        collection: collection.key(),
        index,
        source,
    };

    let slug = slugify_unique_name(unique_name(collection.entity_kind(), raw).map_err(invalid)?);
    let raw = normalize_references(raw, collection.reference_fields());

    match collection {
        Collection::Licenses => {
            let entity = License::from_raw(&raw).map_err(invalid)?;
            store.create_new(collection, &slug, &entity)
        }
        Collection::Organizations => {
            let entity = Organization::from_raw(&raw).map_err(invalid)?;
            store.create_new(collection, &slug, &entity)
        }
        Collection::Languages => {
            let entity = ProgrammingLanguage::from_raw(&raw).map_err(invalid)?;
            store.create_new(collection, &slug, &entity)
        }
        Collection::Software => {
            let entity = SoftwareTool::from_raw(&raw).map_err(invalid)?;
            store.create_new(collection, &slug, &entity)
        }
    }
}

/// Copy of `raw` with bracketed labels in `fields` reduced to identifiers.
///
/// Non-string elements are left alone for validation to reject.
fn normalize_references(raw: &Value, fields: &[&str]) -> Value {
    let mut raw = raw.clone();

    for field in fields {
        if let Some(Value::Array(items)) = raw.get_mut(*field) {
            for item in items.iter_mut() {
                if let Value::String(label) = item {
                    *label = extract_bracketed_identifier(label);
                }
            }
        }
    }

    raw
}
