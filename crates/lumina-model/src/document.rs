//! The structured résumé record.

use serde::{Deserialize, Serialize};

use crate::id::EntryId;

/// Name substituted when `full_name` is empty at render time.
pub(crate) const DEFAULT_NAME: &str = "Your Name";

/// Contact and identity fields. All free text; empty means absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

impl PersonalInfo {
    /// The name to render, substituting a default when empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            DEFAULT_NAME
        } else {
            &self.full_name
        }
    }

    /// Non-empty contact fields in canonical order (email, phone, linkedin,
    /// github).
    #[must_use]
    pub fn contact_fields(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.linkedin, &self.github]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect()
    }
}

/// One position in the experience section.
///
/// `bullets` hold raw `MarkupText` (inline bold/italic/underline markers);
/// `expanded` is a display-only flag carried through serialization but
/// without semantic meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
    pub tech_stack: String,
    pub expanded: bool,
}

/// One entry in the education section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

/// Skills are single comma-separated free-text fields, not modeled as
/// lists; consumers split on comma for display only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub languages: String,
    pub frameworks: String,
    pub tools: String,
}

impl Skills {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.frameworks.is_empty() && self.tools.is_empty()
    }
}

/// One entry in the projects section. `description` and `bullets` are raw
/// `MarkupText`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub link: String,
    pub live_link: String,
    pub description: String,
    #[serde(rename = "tech", alias = "technologies")]
    pub technologies: String,
    pub bullets: Vec<String>,
}

/// Root aggregate: the full résumé record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
}

impl Document {
    /// Append a blank experience entry with a freshly minted id and return
    /// a mutable reference to it.
    pub fn push_experience(&mut self) -> &mut ExperienceEntry {
        self.experience.push(ExperienceEntry {
            id: EntryId::generate(),
            ..ExperienceEntry::default()
        });
        self.experience.last_mut().unwrap()
    }

    /// Append a blank education entry with a freshly minted id.
    pub fn push_education(&mut self) -> &mut EducationEntry {
        self.education.push(EducationEntry {
            id: EntryId::generate(),
            ..EducationEntry::default()
        });
        self.education.last_mut().unwrap()
    }

    /// Append a blank project entry with a freshly minted id.
    pub fn push_project(&mut self) -> &mut ProjectEntry {
        self.projects.push(ProjectEntry {
            id: EntryId::generate(),
            ..ProjectEntry::default()
        });
        self.projects.last_mut().unwrap()
    }

    /// Remove the experience entry with the given id. No-op when absent.
    pub fn remove_experience(&mut self, id: &EntryId) {
        self.experience.retain(|e| &e.id != id);
    }

    /// Remove the education entry with the given id. No-op when absent.
    pub fn remove_education(&mut self, id: &EntryId) {
        self.education.retain(|e| &e.id != id);
    }

    /// Remove the project entry with the given id. No-op when absent.
    pub fn remove_project(&mut self, id: &EntryId) {
        self.projects.retain(|e| &e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Document {
        let mut doc = Document::default();
        doc.personal_info = PersonalInfo {
            full_name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            phone: "(555) 987-6543".into(),
            linkedin: "linkedin.com/in/alexjohnson".into(),
            github: "github.com/alexjohnson".into(),
        };
        let exp = doc.push_experience();
        exp.job_title = "Senior Software Engineer".into();
        exp.company = "Tech Corp".into();
        exp.bullets = vec!["Led development of **React**-based dashboard".into()];
        doc
    }

    #[test]
    fn test_display_name_defaults_when_empty() {
        let info = PersonalInfo::default();
        assert_eq!(info.display_name(), "Your Name");
    }

    #[test]
    fn test_contact_fields_skip_empty() {
        let info = PersonalInfo {
            email: "a@b.c".into(),
            github: "github.com/a".into(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.contact_fields(), vec!["a@b.c", "github.com/a"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut doc = sample();
        let id = doc.experience[0].id.clone();
        doc.remove_experience(&id);
        assert!(doc.experience.is_empty());
        // removing again is a no-op
        doc.remove_experience(&id);
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let doc = sample();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"techStack\""));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_deserializes_legacy_payload_with_missing_fields() {
        let json = r#"{
            "personalInfo": { "fullName": "Alex Johnson" },
            "projects": [{ "id": "id_1", "name": "LuminaCV", "tech": "JS" }]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal_info.full_name, "Alex Johnson");
        assert_eq!(doc.projects[0].technologies, "JS");
        assert!(doc.experience.is_empty());
    }
}
