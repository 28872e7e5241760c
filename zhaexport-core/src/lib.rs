//! # zhaexport-core
//!
//! Data shaping for ZHA device exports.
//!
//! This crate provides the pure, I/O-free pieces:
//! - Export record building
//! - Hex rendering of quirk signatures
//! - Slugs for export file names
//! - Per-run slug deduplication
//! - Integration constants

pub mod constants;
pub mod dedup;
pub mod error;
pub mod hex;
pub mod record;
pub mod slug;

pub use dedup::ProcessedSlugs;
pub use error::{Error, Result};
pub use record::{ExportRecord, RecordBuilder};
pub use slug::{manufacturer_model_slug, slugify};
