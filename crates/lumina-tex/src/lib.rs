//! LaTeX renderer for résumé documents.
//!
//! One-way: produces a complete `.tex` document string with a fixed
//! preamble, a header block, and one section per non-empty document
//! section. Every interpolated field is escaped (via
//! [`lumina_markup::escape_tex`]) or rendered through the markup
//! renderer's typeset target before it reaches the template — raw user
//! text never enters the output, so reserved characters cannot inject
//! typesetting commands.
//!
//! Page layout and pagination of the result are the typesetter's concern,
//! not this crate's.

use std::fmt::Write;

use lumina_markup::{Target, escape_tex, render as render_markup};
use lumina_model::{Document, EducationEntry, ExperienceEntry, ProjectEntry, Skills};

const PREAMBLE: &str = r"\documentclass[11pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage{parskip}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\pagestyle{empty}
";

/// Render a complete LaTeX document.
#[must_use]
pub fn render(doc: &Document) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(PREAMBLE);
    out.push_str("\n\\begin{document}\n\n");

    write_header(&mut out, doc);

    if !doc.experience.is_empty() {
        out.push_str("\\section*{Experience}\n\n");
        for entry in &doc.experience {
            write_experience(&mut out, entry);
        }
    }
    if !doc.education.is_empty() {
        out.push_str("\\section*{Education}\n\n");
        for entry in &doc.education {
            write_education(&mut out, entry);
        }
    }
    if !doc.skills.is_empty() {
        out.push_str("\\section*{Skills}\n\n");
        write_skills(&mut out, &doc.skills);
        out.push('\n');
    }
    if !doc.projects.is_empty() {
        out.push_str("\\section*{Projects}\n\n");
        for entry in &doc.projects {
            write_project(&mut out, entry);
        }
    }

    out.push_str("\\end{document}\n");
    out
}

fn write_header(out: &mut String, doc: &Document) {
    let _ = writeln!(
        out,
        "{{\\Huge \\textbf{{{}}}}}\n",
        escape_tex(doc.personal_info.display_name())
    );
    let contact: Vec<String> = doc
        .personal_info
        .contact_fields()
        .into_iter()
        .map(|field| escape_tex(field).into_owned())
        .collect();
    if !contact.is_empty() {
        let _ = writeln!(out, "{}\n", contact.join(" \\;|\\; "));
    }
}

/// `start -- end` with an en dash, or whichever half is present.
fn date_range(start: &str, end: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(escape_tex(start).into_owned()),
        (true, false) => Some(escape_tex(end).into_owned()),
        (false, false) => Some(format!("{} -- {}", escape_tex(start), escape_tex(end))),
    }
}

fn write_title_row(out: &mut String, title: &str, dates: Option<String>) {
    match dates {
        Some(dates) => {
            let _ = writeln!(out, "\\textbf{{{title}}} \\hfill {dates} \\\\");
        }
        None => {
            let _ = writeln!(out, "\\textbf{{{title}}} \\\\");
        }
    }
}

fn write_bullets(out: &mut String, bullets: &[String]) {
    if bullets.is_empty() {
        return;
    }
    out.push_str("\\begin{itemize}[leftmargin=*]\n");
    for bullet in bullets {
        let _ = writeln!(out, "  \\item {}", render_markup(bullet, Target::Typeset));
    }
    out.push_str("\\end{itemize}\n");
}

fn write_experience(out: &mut String, entry: &ExperienceEntry) {
    let title = if entry.company.is_empty() {
        escape_tex(&entry.job_title).into_owned()
    } else {
        format!(
            "{} at {}",
            escape_tex(&entry.job_title),
            escape_tex(&entry.company)
        )
    };
    write_title_row(out, &title, date_range(&entry.start_date, &entry.end_date));
    if !entry.location.is_empty() {
        let _ = writeln!(out, "\\textit{{{}}}", escape_tex(&entry.location));
    }
    write_bullets(out, &entry.bullets);
    out.push('\n');
}

fn write_education(out: &mut String, entry: &EducationEntry) {
    let title = if entry.school.is_empty() {
        escape_tex(&entry.degree).into_owned()
    } else {
        format!(
            "{} -- {}",
            escape_tex(&entry.degree),
            escape_tex(&entry.school)
        )
    };
    write_title_row(out, &title, date_range(&entry.start_date, &entry.end_date));
    if !entry.location.is_empty() {
        let _ = writeln!(out, "\\textit{{{}}}", escape_tex(&entry.location));
    }
    if !entry.gpa.is_empty() {
        let _ = writeln!(out, "GPA: {}", escape_tex(&entry.gpa));
    }
    out.push('\n');
}

fn write_skills(out: &mut String, skills: &Skills) {
    for (label, value) in [
        ("Languages", &skills.languages),
        ("Frameworks", &skills.frameworks),
        ("Tools", &skills.tools),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "\\textbf{{{label}:}} {} \\\\", escape_tex(value));
        }
    }
}

fn write_project(out: &mut String, entry: &ProjectEntry) {
    let title = if entry.technologies.is_empty() {
        escape_tex(&entry.name).into_owned()
    } else {
        format!(
            "{} \\textit{{({})}}",
            escape_tex(&entry.name),
            escape_tex(&entry.technologies)
        )
    };
    write_title_row(out, &title, None);
    let mut links = Vec::new();
    if !entry.link.is_empty() {
        links.push(format!("\\href{{{}}}{{Repo}}", escape_tex(&entry.link)));
    }
    if !entry.live_link.is_empty() {
        links.push(format!("\\href{{{}}}{{Live}}", escape_tex(&entry.live_link)));
    }
    if !links.is_empty() {
        let _ = writeln!(out, "{} \\\\", links.join(" \\;|\\; "));
    }
    if !entry.description.is_empty() {
        let _ = writeln!(out, "{}", render_markup(&entry.description, Target::Typeset));
    }
    write_bullets(out, &entry.bullets);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use lumina_model::Document;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Document {
        let mut doc = Document::default();
        doc.personal_info.full_name = "Alex Johnson".into();
        doc.personal_info.email = "alex@example.com".into();
        doc.personal_info.phone = "(555) 987-6543".into();
        let exp = doc.push_experience();
        exp.job_title = "Senior Software Engineer".into();
        exp.company = "Tech Corp".into();
        exp.location = "San Francisco, CA".into();
        exp.start_date = "2022-01".into();
        exp.end_date = "present".into();
        exp.bullets = vec!["Improved API performance by **40%**".into()];
        doc
    }

    #[test]
    fn test_complete_document_structure() {
        let tex = render(&sample());
        assert!(tex.starts_with("\\documentclass[11pt]{article}"));
        assert!(tex.contains("\\begin{document}"));
        assert!(tex.contains("{\\Huge \\textbf{Alex Johnson}}"));
        assert!(tex.contains("alex@example.com \\;|\\; (555) 987-6543"));
        assert!(tex.contains("\\section*{Experience}"));
        assert!(
            tex.contains("\\textbf{Senior Software Engineer at Tech Corp} \\hfill 2022-01 -- present \\\\")
        );
        assert!(tex.contains("\\textit{San Francisco, CA}"));
        assert!(tex.contains("  \\item Improved API performance by \\textbf{40\\%}"));
        assert!(tex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let tex = render(&Document::default());
        assert!(!tex.contains("\\section*{"));
        assert!(tex.contains("{\\Huge \\textbf{Your Name}}"));
    }

    #[test]
    fn test_reserved_characters_cannot_inject() {
        let mut doc = Document::default();
        doc.personal_info.full_name = "A & B #1 100% $_{}~^\\".into();
        let tex = render(&doc);
        assert!(tex.contains(
            "\\& B \\#1 100\\% \\$\\_\\{\\}\\textasciitilde{}\\textasciicircum{}\\textbackslash{}"
        ));
    }

    #[test]
    fn test_skills_and_project_blocks() {
        let mut doc = Document::default();
        doc.skills.languages = "Rust, C++".into();
        let proj = doc.push_project();
        proj.name = "LuminaCV".into();
        proj.technologies = "JS".into();
        proj.link = "github.com/u/luminacv".into();
        proj.description = "Resume builder with *live* preview".into();

        let tex = render(&doc);
        assert!(tex.contains("\\textbf{Languages:} Rust, C++ \\\\"));
        assert!(tex.contains("\\textbf{LuminaCV \\textit{(JS)}} \\\\"));
        assert!(tex.contains("\\href{github.com/u/luminacv}{Repo}"));
        assert!(tex.contains("Resume builder with \\textit{live} preview"));
    }

    #[test]
    fn test_render_is_pure() {
        let doc = sample();
        assert_eq!(render(&doc), render(&doc));
    }
}
