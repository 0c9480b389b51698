//! Preview Renderer: turns a `ResumeDocument` into an ordered list of display blocks.
//!
//! # Omission rules
//! - The name block always renders (placeholder when `full_name` is empty).
//! - Contact and link lines carry only their non-empty fields and are dropped when
//!   all of them are empty.
//! - A section heading renders only when the section has content.
//! - Achievements, coursework and key features go through [`gated_items`].
//!
//! Absence is never an error: a missing field drops its line, nothing more.

use serde::{Deserialize, Serialize};

use crate::editor::experience::shows_end_date;
use crate::editor::skills::SkillCategory;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillSet,
};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PRESENT: &str = "Present";

// ────────────────────────────────────────────────────────────────────────────
// Block types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewBlock {
    Name { text: String },
    Contact { items: Vec<String> },
    Links { items: Vec<String> },
    Heading { text: String },
    Summary { text: String },
    Experience(ExperienceItem),
    Education(EducationItem),
    SkillLine { label: String, text: String },
    Project(ProjectItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub job_title: String,
    pub company: String,
    /// `start - end`, or `start - Present` for a current job.
    pub date_range: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Empty when the achievements list is suppressed.
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
    pub gpa: Option<String>,
    pub honors: Option<String>,
    /// Comma-joined coursework.
    pub coursework: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub date_range: String,
    /// Comma-joined technologies.
    pub technologies: Option<String>,
    pub description: Option<String>,
    pub key_features: Vec<String>,
    pub links: Vec<PreviewLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLink {
    pub label: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

pub fn render_preview(doc: &ResumeDocument) -> Vec<PreviewBlock> {
    let mut blocks = Vec::new();

    render_header(&doc.personal_info, &mut blocks);

    if !doc.personal_info.professional_summary.is_empty() {
        blocks.push(heading("Professional Summary"));
        blocks.push(PreviewBlock::Summary {
            text: doc.personal_info.professional_summary.clone(),
        });
    }

    if !doc.experience.is_empty() {
        blocks.push(heading("Work Experience"));
        blocks.extend(doc.experience.iter().map(experience_block));
    }

    if !doc.education.is_empty() {
        blocks.push(heading("Education"));
        blocks.extend(doc.education.iter().map(education_block));
    }

    if !doc.skills.is_empty() {
        blocks.push(heading("Skills"));
        render_skills(&doc.skills, &mut blocks);
    }

    if !doc.projects.is_empty() {
        blocks.push(heading("Projects"));
        blocks.extend(doc.projects.iter().map(project_block));
    }

    blocks
}

fn render_header(info: &PersonalInfo, blocks: &mut Vec<PreviewBlock>) {
    let name = if info.full_name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };
    blocks.push(PreviewBlock::Name { text: name });

    let contact = non_empty([&info.email, &info.phone, &info.location]);
    if !contact.is_empty() {
        blocks.push(PreviewBlock::Contact { items: contact });
    }

    let links = non_empty([&info.website, &info.linkedin]);
    if !links.is_empty() {
        blocks.push(PreviewBlock::Links { items: links });
    }
}

fn experience_block(exp: &ExperienceEntry) -> PreviewBlock {
    let end = if shows_end_date(exp) {
        exp.end_date.as_str()
    } else {
        PRESENT
    };
    PreviewBlock::Experience(ExperienceItem {
        job_title: exp.job_title.clone(),
        company: exp.company.clone(),
        date_range: format!("{} - {}", exp.start_date, end),
        location: optional(&exp.location),
        description: optional(&exp.description),
        achievements: gated_items(&exp.achievements),
    })
}

fn education_block(edu: &EducationEntry) -> PreviewBlock {
    let coursework = gated_items(&edu.relevant_coursework);
    PreviewBlock::Education(EducationItem {
        degree: edu
            .degree
            .map(|d| d.label().to_string())
            .unwrap_or_default(),
        institution: edu.institution.clone(),
        location: optional(&edu.location),
        graduation_date: optional(&edu.graduation_date),
        gpa: optional(&edu.gpa),
        honors: optional(&edu.honors),
        coursework: (!coursework.is_empty()).then(|| coursework.join(", ")),
    })
}

fn render_skills(skills: &SkillSet, blocks: &mut Vec<PreviewBlock>) {
    for category in SkillCategory::ALL {
        let list = category.list(skills);
        if !list.is_empty() {
            blocks.push(PreviewBlock::SkillLine {
                label: category.title().to_string(),
                text: list.join(", "),
            });
        }
    }
}

fn project_block(project: &ProjectEntry) -> PreviewBlock {
    let mut links = Vec::new();
    if !project.live_url.is_empty() {
        links.push(PreviewLink {
            label: "Live Demo".to_string(),
            url: project.live_url.clone(),
        });
    }
    if !project.github_url.is_empty() {
        links.push(PreviewLink {
            label: "GitHub".to_string(),
            url: project.github_url.clone(),
        });
    }

    PreviewBlock::Project(ProjectItem {
        name: project.name.clone(),
        date_range: format!("{} - {}", project.start_date, project.end_date),
        technologies: (!project.technologies.is_empty())
            .then(|| project.technologies.join(", ")),
        description: optional(&project.description),
        key_features: gated_items(&project.key_features),
        links,
    })
}

/// Items shown for a nested list. The whole list is hidden unless the first item
/// is non-blank; when shown, blank items are filtered out.
///
/// Only the first item is checked, so `["", "Led team"]` renders nothing.
pub fn gated_items(items: &[String]) -> Vec<String> {
    match items.first() {
        Some(first) if !first.trim().is_empty() => items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

fn heading(text: &str) -> PreviewBlock {
    PreviewBlock::Heading {
        text: text.to_string(),
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn non_empty<const N: usize>(fields: [&String; N]) -> Vec<String> {
    fields
        .into_iter()
        .filter(|f| !f.is_empty())
        .cloned()
        .collect()
}
