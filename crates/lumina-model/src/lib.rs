//! Résumé document data model.
//!
//! This crate defines the structured résumé record ([`Document`]) and the
//! presentation settings that accompany it ([`DisplaySettings`]). It carries
//! no behavior beyond construction and entry management; the codec crates
//! (`lumina-flat`, `lumina-share`, `lumina-tex`) consume these types by
//! reference and never retain them across calls.
//!
//! # Serialization
//!
//! All types serialize with serde using camelCase field names
//! (`personalInfo`, `fullName`, `techStack`, ...) so JSON dumps and share
//! tokens remain compatible with previously persisted data. A structured
//! JSON export is just `serde_json::to_string_pretty` over a [`Document`].
//!
//! # Example
//!
//! ```
//! use lumina_model::Document;
//!
//! let mut doc = Document::default();
//! doc.personal_info.full_name = "Alex Johnson".into();
//! let entry = doc.push_experience();
//! entry.job_title = "Senior Software Engineer".into();
//! ```

mod document;
mod id;
mod settings;

pub use document::{
    Document, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Skills,
};
pub use id::EntryId;
pub use settings::{DisplaySettings, SectionKind};
