//! Heuristic flat-text import.
//!
//! Single-pass, line-oriented finite-state machine: the state is the
//! current section plus whether a `###` entry is open in it. Keyword
//! matching is case-insensitive and never backtracks; lines that match no
//! rule are skipped (or, inside a project, captured as the description).

use std::sync::LazyLock;

use lumina_model::Document;
use regex::Regex;

/// Phone-shaped token: optional leading `+`, then at least seven digits,
/// spaces, dots, dashes, or parens.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s().-]{7,}$").unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Flat-text import failure.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The input contained no recognizable résumé content.
    #[error("no résumé content found in input")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Experience,
    Education,
    Skills,
    Projects,
}

struct Importer {
    doc: Document,
    section: Section,
    /// Whether a `###` entry is open in the current section.
    item_open: bool,
    seen_section: bool,
}

/// Parse a flat-text document into a [`Document`].
///
/// Returns [`ImportError::Empty`] when no name, contact, or section was
/// recognized; the caller's in-memory document is never touched on
/// failure.
pub fn import(text: &str) -> Result<Document, ImportError> {
    let mut importer = Importer {
        doc: Document::default(),
        section: Section::None,
        item_open: false,
        seen_section: false,
    };
    for line in text.lines() {
        importer.feed(line.trim());
    }
    if importer.doc.personal_info == lumina_model::PersonalInfo::default()
        && !importer.seen_section
    {
        return Err(ImportError::Empty);
    }
    Ok(importer.doc)
}

impl Importer {
    fn feed(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if let Some(title) = line.strip_prefix("# ") {
            if !self.seen_section {
                self.doc.personal_info.full_name = title.trim().to_owned();
            }
            return;
        }
        if let Some(heading) = line.strip_prefix("## ") {
            self.switch_section(heading);
            return;
        }
        if let Some(title) = line.strip_prefix("### ") {
            self.open_item(title.trim());
            return;
        }
        match self.section {
            Section::None => self.feed_preamble(line),
            Section::Experience => self.feed_experience(line),
            Section::Education => self.feed_education(line),
            Section::Skills => self.feed_skills(line),
            Section::Projects => self.feed_project(line),
        }
    }

    fn switch_section(&mut self, heading: &str) {
        let lower = heading.to_lowercase();
        self.section = if lower.contains("experience") || lower.contains("work") {
            Section::Experience
        } else if lower.contains("education") {
            Section::Education
        } else if lower.contains("skill") {
            Section::Skills
        } else if lower.contains("project") {
            Section::Projects
        } else {
            tracing::debug!(heading, "unrecognized section heading");
            Section::None
        };
        self.seen_section = true;
        self.item_open = false;
    }

    fn open_item(&mut self, title: &str) {
        match self.section {
            Section::Experience => {
                let entry = self.doc.push_experience();
                // "X at Y" title template; whole title as fallback.
                if let Some((job, company)) = title.split_once(" at ") {
                    entry.job_title = job.trim().to_owned();
                    entry.company = company.trim().to_owned();
                } else {
                    entry.job_title = title.to_owned();
                }
                self.item_open = true;
            }
            Section::Education => {
                let entry = self.doc.push_education();
                if let Some((degree, school)) = title.split_once(" - ") {
                    entry.degree = degree.trim().to_owned();
                    entry.school = school.trim().to_owned();
                } else {
                    entry.degree = title.to_owned();
                }
                self.item_open = true;
            }
            Section::Projects => {
                let entry = self.doc.push_project();
                // "X (Y)" title template.
                if let Some(open) = title.rfind(" (") {
                    if let Some(tech) = title[open + 2..].strip_suffix(')') {
                        entry.name = title[..open].trim().to_owned();
                        entry.technologies = tech.to_owned();
                    } else {
                        entry.name = title.to_owned();
                    }
                } else {
                    entry.name = title.to_owned();
                }
                self.item_open = true;
            }
            Section::None | Section::Skills => {
                tracing::debug!(title, "entry heading outside an entry section");
            }
        }
    }

    /// Before any section: the contact line.
    fn feed_preamble(&mut self, line: &str) {
        let lower = line.to_lowercase();
        if !(line.contains('|')
            || line.contains('@')
            || lower.contains("linkedin")
            || lower.contains("github"))
        {
            tracing::debug!(line, "skipping unrecognized preamble line");
            return;
        }
        for token in line.split('|').map(str::trim).filter(|t| !t.is_empty()) {
            let info = &mut self.doc.personal_info;
            let token_lower = token.to_lowercase();
            if token.contains('@') {
                info.email = token.to_owned();
            } else if token_lower.contains("linkedin") {
                info.linkedin = token.to_owned();
            } else if token_lower.contains("github") {
                info.github = token.to_owned();
            } else if PHONE_RE.is_match(token) && token.chars().any(|c| c.is_ascii_digit()) {
                info.phone = token.to_owned();
            }
        }
    }

    fn feed_experience(&mut self, line: &str) {
        let Some(entry) = self.doc.experience.last_mut().filter(|_| self.item_open) else {
            return;
        };
        if let Some(bullet) = line.strip_prefix("- ") {
            entry.bullets.push(bullet.to_owned());
        } else if line.to_lowercase().starts_with("**tech") {
            entry.tech_stack = after_colon(line);
        } else if let Some(location) = wrapped_location(line, &entry.location) {
            entry.location = location;
        } else if entry.start_date.is_empty() {
            if let Some((start, end)) = date_range(line) {
                entry.start_date = start;
                entry.end_date = end;
            }
        }
    }

    fn feed_education(&mut self, line: &str) {
        let Some(entry) = self.doc.education.last_mut().filter(|_| self.item_open) else {
            return;
        };
        if line.to_lowercase().contains("gpa") {
            entry.gpa = after_colon(line);
        } else if let Some(location) = wrapped_location(line, &entry.location) {
            entry.location = location;
        } else if entry.start_date.is_empty() {
            if let Some((start, end)) = date_range(line) {
                entry.start_date = start;
                entry.end_date = end;
            }
        }
    }

    fn feed_skills(&mut self, line: &str) {
        let lower = line.to_lowercase();
        let skills = &mut self.doc.skills;
        if lower.starts_with("**languages") || lower.starts_with("languages") {
            skills.languages = after_colon(line);
        } else if lower.starts_with("**frameworks") || lower.starts_with("frameworks") {
            skills.frameworks = after_colon(line);
        } else if lower.starts_with("**tools") || lower.starts_with("tools") {
            skills.tools = after_colon(line);
        }
    }

    fn feed_project(&mut self, line: &str) {
        let Some(entry) = self.doc.projects.last_mut().filter(|_| self.item_open) else {
            return;
        };
        if let Some(bullet) = line.strip_prefix("- ") {
            entry.bullets.push(bullet.to_owned());
        } else if line.to_lowercase().starts_with("**tech") {
            entry.technologies = after_colon(line);
        } else if line.starts_with('[') {
            for caps in LINK_RE.captures_iter(line) {
                let text = caps[1].to_lowercase();
                let url = caps[2].to_owned();
                if text.contains("live") {
                    entry.live_link = url;
                } else if entry.link.is_empty() {
                    entry.link = url;
                } else if entry.live_link.is_empty() {
                    entry.live_link = url;
                }
            }
        } else if entry.description.is_empty() {
            entry.description = line.to_owned();
        }
    }
}

/// Trailing-substring-after-colon extraction for `**Key:** value` lines.
fn after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim_start_matches('*').trim().to_owned())
        .unwrap_or_default()
}

/// A line wrapped in single `*...*` markers, captured as the location
/// while it is still empty (first match wins).
fn wrapped_location(line: &str, current: &str) -> Option<String> {
    if !current.is_empty() || line.len() < 3 || line.starts_with("**") {
        return None;
    }
    let inner = line.strip_prefix('*')?.strip_suffix('*')?;
    if inner.is_empty() || inner.contains('*') {
        return None;
    }
    Some(inner.to_owned())
}

/// `<text> - <text>` containing a 4-digit year: split on the spaced dash
/// when present, then the trailing dash of a start-only range, then the
/// first bare `-`. Without the trailing-dash rule a start-only line like
/// `2022-01 -` would split inside the date itself.
fn date_range(line: &str) -> Option<(String, String)> {
    if !line.contains('-') || !YEAR_RE.is_match(line) {
        return None;
    }
    if let Some((start, end)) = line.split_once(" - ") {
        return Some((start.trim().to_owned(), end.trim().to_owned()));
    }
    if let Some(start) = line.strip_suffix(" -") {
        return Some((start.trim().to_owned(), String::new()));
    }
    let (start, end) = line.split_once('-')?;
    Some((start.trim().to_owned(), end.trim().to_owned()))
}
