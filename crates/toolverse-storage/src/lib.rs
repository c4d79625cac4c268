//! # Toolverse Storage
//!
//! The persistence bridge: loads and saves the whole application
//! store (tool catalog + workflow graphs) as a JSON snapshot, and
//! migrates legacy workflow records to the current shape on the way
//! in.
//!
//! From the canvas's point of view this layer is synchronous and
//! fire-and-forget: the owning application invokes
//! [`Store::save_to_file`] after every committed canvas mutation, and
//! the in-memory state never waits on it.

pub mod migration;
pub mod store;

pub use migration::{migrate_step, migrate_workflow, StoredStep, StoredWorkflow};
pub use store::{Store, StoreMetadata, STORE_VERSION};

pub use toolverse_core::StorageError;
