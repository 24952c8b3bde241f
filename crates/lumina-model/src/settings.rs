//! Presentation settings carried alongside the document.
//!
//! Settings travel through the share-token codec but are deliberately
//! absent from the flat-text format.

use serde::{Deserialize, Serialize};

/// Résumé sections, in the order consumers iterate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    /// Fixed default ordering used by every renderer.
    pub const DEFAULT_ORDER: [Self; 4] = [
        Self::Experience,
        Self::Education,
        Self::Skills,
        Self::Projects,
    ];

    /// Human-readable section heading.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
        }
    }
}

/// Visual presentation settings. Logically separate from [`crate::Document`]
/// content; lost when exporting to flat text, preserved in share tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Template identifier (e.g. "modern", "classic", "minimal", "swe").
    pub template: String,
    /// Accent color as a hex string.
    pub accent_color: String,
    /// Font identifier (e.g. "lato", "calibri").
    pub font: String,
    /// Page background color as a hex string.
    pub bg_color: String,
    /// Section display order.
    pub section_order: Vec<SectionKind>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            template: "modern".to_owned(),
            accent_color: "#2563eb".to_owned(),
            font: "lato".to_owned(),
            bg_color: "#ffffff".to_owned(),
            section_order: SectionKind::DEFAULT_ORDER.to_vec(),
        }
    }
}
