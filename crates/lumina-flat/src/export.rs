//! Deterministic flat-text export.

use std::fmt::Write;

use lumina_model::{Document, EducationEntry, ExperienceEntry, ProjectEntry, Skills};

/// Export a document to the flat section-delimited text format.
///
/// Ordering is fixed: name heading, contact line, then experience,
/// education, skills, projects. Empty sections (and empty per-entry lines)
/// are omitted. Bullets keep their inline markers untouched.
#[must_use]
pub fn export(doc: &Document) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "# {}", doc.personal_info.display_name());
    let contact = doc.personal_info.contact_fields();
    if !contact.is_empty() {
        let _ = writeln!(out, "{}", contact.join(" | "));
    }

    if !doc.experience.is_empty() {
        out.push_str("\n## Experience\n");
        for entry in &doc.experience {
            write_experience(&mut out, entry);
        }
    }

    if !doc.education.is_empty() {
        out.push_str("\n## Education\n");
        for entry in &doc.education {
            write_education(&mut out, entry);
        }
    }

    if !doc.skills.is_empty() {
        out.push_str("\n## Skills\n\n");
        write_skills(&mut out, &doc.skills);
    }

    if !doc.projects.is_empty() {
        out.push_str("\n## Projects\n");
        for entry in &doc.projects {
            write_project(&mut out, entry);
        }
    }

    out
}

/// `"X at Y"` when both parts are present, otherwise whichever is.
fn joined_title(left: &str, sep: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left}{sep}{right}"),
        (true, false) => right.to_owned(),
        _ => left.to_owned(),
    }
}

/// `start - end`; a missing end keeps the trailing dash so the import
/// side can tell the line apart from a plain date. An end date without a
/// start is not representable (a leading dash would read back as a
/// bullet), so the line is dropped.
fn write_date_range(out: &mut String, start: &str, end: &str) {
    if start.is_empty() {
        return;
    }
    if end.is_empty() {
        let _ = writeln!(out, "{start} -");
    } else {
        let _ = writeln!(out, "{start} - {end}");
    }
}

fn write_location(out: &mut String, location: &str) {
    if !location.is_empty() {
        let _ = writeln!(out, "*{location}*");
    }
}

fn write_experience(out: &mut String, entry: &ExperienceEntry) {
    let _ = writeln!(
        out,
        "\n### {}",
        joined_title(&entry.job_title, " at ", &entry.company)
    );
    write_location(out, &entry.location);
    write_date_range(out, &entry.start_date, &entry.end_date);
    for bullet in &entry.bullets {
        let _ = writeln!(out, "- {bullet}");
    }
    if !entry.tech_stack.is_empty() {
        let _ = writeln!(out, "**Tech:** {}", entry.tech_stack);
    }
}

fn write_education(out: &mut String, entry: &EducationEntry) {
    let _ = writeln!(
        out,
        "\n### {}",
        joined_title(&entry.degree, " - ", &entry.school)
    );
    write_location(out, &entry.location);
    write_date_range(out, &entry.start_date, &entry.end_date);
    if !entry.gpa.is_empty() {
        let _ = writeln!(out, "**GPA:** {}", entry.gpa);
    }
}

fn write_skills(out: &mut String, skills: &Skills) {
    if !skills.languages.is_empty() {
        let _ = writeln!(out, "**Languages:** {}", skills.languages);
    }
    if !skills.frameworks.is_empty() {
        let _ = writeln!(out, "**Frameworks:** {}", skills.frameworks);
    }
    if !skills.tools.is_empty() {
        let _ = writeln!(out, "**Tools:** {}", skills.tools);
    }
}

fn write_project(out: &mut String, entry: &ProjectEntry) {
    let title = if entry.technologies.is_empty() {
        entry.name.clone()
    } else {
        format!("{} ({})", entry.name, entry.technologies)
    };
    let _ = writeln!(out, "\n### {title}");
    let mut links = Vec::new();
    if !entry.link.is_empty() {
        links.push(format!("[Repo]({})", entry.link));
    }
    if !entry.live_link.is_empty() {
        links.push(format!("[Live]({})", entry.live_link));
    }
    if !links.is_empty() {
        let _ = writeln!(out, "{}", links.join(" | "));
    }
    if !entry.description.is_empty() {
        let _ = writeln!(out, "{}", entry.description);
    }
    for bullet in &entry.bullets {
        let _ = writeln!(out, "- {bullet}");
    }
}
