//! Flat-text interchange codec.
//!
//! Exports a [`lumina_model::Document`] to a section-delimited plain-text
//! document (`.md`-equivalent) and heuristically parses such a document
//! back. The format models document content only; display settings are
//! lossy by design and never travel through it.
//!
//! Bullets and descriptions are written as raw markup text (markers
//! preserved), so formatting survives an export/import round trip.
//!
//! # Example
//!
//! ```
//! use lumina_flat::{export, import};
//! use lumina_model::Document;
//!
//! let mut doc = Document::default();
//! doc.personal_info.full_name = "Alex Johnson".into();
//! let text = export(&doc);
//! let back = import(&text).unwrap();
//! assert_eq!(back.personal_info.full_name, "Alex Johnson");
//! ```

mod export;
mod import;

pub use export::export;
pub use import::{ImportError, import};
