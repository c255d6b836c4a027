//! Core traits for archive data sources.

mod source;

pub use source::ArchiveSource;
