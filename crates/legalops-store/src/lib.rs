//! File-backed record store: JSON documents under a data directory plus CSV
//! input readers.

mod error;
pub use error::StoreError;

pub mod ingest;
pub mod json;
pub mod layout;

mod store;
pub use layout::DataDir;
pub use store::{FileStore, Inbox, ResetSummary};
