pub mod entry_service;
pub mod series;

pub use entry_service::{EntryError, EntryService};
