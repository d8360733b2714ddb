//! Import, export, and persistence for settings/employee snapshots.
//!
//! The allocation core never performs I/O; everything in this module is
//! a collaborator feeding data in or carrying results out.

mod csv;
mod snapshot;
mod store;

pub use csv::import_csv;
pub use snapshot::{Snapshot, export_json, import_json};
pub use store::SnapshotStore;
