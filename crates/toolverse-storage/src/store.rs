//! Store snapshot: load, save, import and export.
//!
//! The whole application state persists as one JSON document with a
//! version string and created/modified metadata. Loading runs every
//! workflow through the legacy migration; saving always writes the
//! canonical shape.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use toolverse_core::{Catalog, StorageError, Tool, Workflow};

use crate::migration::{migrate_workflow, StoredWorkflow};

/// Store file format version.
pub const STORE_VERSION: &str = "1.0";

/// Store file metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
        }
    }
}

/// On-disk shape: workflows still in their stored (possibly legacy)
/// form.
#[derive(Debug, Clone, Deserialize)]
struct RawStore {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    metadata: Option<StoreMetadata>,
    #[serde(default)]
    tools: Vec<Tool>,
    #[serde(default)]
    workflows: Vec<StoredWorkflow>,
}

/// Import payloads: a full store document, or the bare tool array the
/// earliest export format produced.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportPayload {
    Tools(Vec<Tool>),
    Bundle(RawStore),
}

/// The in-memory application store: catalog tools plus workflow
/// graphs, always in the canonical record shape.
#[derive(Debug, Clone, Serialize)]
pub struct Store {
    pub version: String,
    pub metadata: StoreMetadata,
    pub tools: Vec<Tool>,
    pub workflows: Vec<Workflow>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION.to_string(),
            metadata: StoreMetadata::default(),
            tools: Vec::new(),
            workflows: Vec::new(),
        }
    }

    fn from_raw(raw: RawStore) -> Self {
        Self {
            version: raw.version.unwrap_or_else(|| STORE_VERSION.to_string()),
            metadata: raw.metadata.unwrap_or_default(),
            tools: raw.tools,
            workflows: raw.workflows.into_iter().map(migrate_workflow).collect(),
        }
    }

    /// Parses a store snapshot, migrating legacy workflow records. An
    /// unparsable snapshot is a hard load failure for the caller.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let raw: RawStore = serde_json::from_str(json)?;
        if let Some(version) = &raw.version {
            if version.split('.').next() != Some("1") {
                return Err(StorageError::UnsupportedVersion {
                    version: version.clone(),
                });
            }
        }
        Ok(Self::from_raw(raw))
    }

    /// Loads the store from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            tools = store.tools.len(),
            workflows = store.workflows.len(),
            "store loaded"
        );
        Ok(store)
    }

    /// Loads the store, treating a missing file as the empty initial
    /// state. Any other failure still propagates.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no store file, starting empty");
            return Ok(Self::new());
        }
        Self::load_from_file(path)
    }

    /// Saves the store to a file, refreshing the modified timestamp.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        self.metadata.modified = Utc::now();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| StorageError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }

    /// Replaces the workflow with the same id, or appends it. This is
    /// the write path for canvas snapshots.
    pub fn put_workflow(&mut self, workflow: Workflow) {
        match self.workflows.iter_mut().find(|w| w.id == workflow.id) {
            Some(existing) => *existing = workflow,
            None => self.workflows.push(workflow),
        }
    }

    pub fn remove_workflow(&mut self, id: &str) -> bool {
        let before = self.workflows.len();
        self.workflows.retain(|w| w.id != id);
        self.workflows.len() != before
    }

    /// Builds the read-only catalog view of the stored tools.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.tools.clone())
    }

    /// Exports the whole store as a pretty JSON string.
    pub fn export_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Imports a previously exported payload. Accepts the full store
    /// document or a bare tool array (the earliest export format);
    /// workflow records go through the same migration as a file load.
    pub fn import_json(json: &str) -> Result<Self, StorageError> {
        match serde_json::from_str::<ImportPayload>(json)? {
            ImportPayload::Tools(tools) => {
                let mut store = Self::new();
                store.tools = tools;
                Ok(store)
            }
            ImportPayload::Bundle(raw) => Ok(Self::from_raw(raw)),
        }
    }
}
